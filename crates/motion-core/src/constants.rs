/// Effect tuning constants.
///
/// These express intended behavior (easing rates, thresholds, clamp windows)
/// and keep magic numbers out of the trackers.

// Pointer glow
pub const GLOW_SMOOTHING: f32 = 0.15; // fraction of remaining distance covered per frame
pub const GLOW_RADIUS_IDLE_PX: f32 = 600.0;
pub const GLOW_RADIUS_PRESSED_PX: f32 = 450.0;

// Scroll-driven structural toggles (pixels scrolled)
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0; // scroll-to-top control appears past this
pub const HEADER_SCROLLED_THRESHOLD_PX: f64 = 10.0;
pub const HERO_PARALLAX_FACTOR: f64 = 0.5;

// Platform graphic: portion of the pinned section's progress spent drawing
pub const DRAWING_START_PROGRESS: f64 = 0.0;
pub const DRAWING_END_PROGRESS: f64 = 0.7;

// Platform graphic layout (SVG user units)
pub const PLATFORM_VIEW_W: f64 = 300.0;
pub const PLATFORM_VIEW_H: f64 = 500.0;
pub const PLATFORM_CORNER_RADIUS: f64 = 8.0;
pub const PLATFORM_RINGS: [[f64; 2]; 3] = [
    [280.0, 480.0], // outer
    [230.0, 410.0], // middle
    [180.0, 340.0], // inner
];
// Tracer dots are hidden this close to either end of their ring
pub const TRACER_EDGE_EPSILON: f64 = 0.001;

// Content sections reveal once this share of them is on screen
pub const REVEAL_VISIBLE_FRACTION: f64 = 0.1;

// Work showcase tilt
pub const TILT_MAX_DEG: f32 = 5.0;

// Default DOM ids of effect targets
pub const GLOW_ELEMENT_ID: &str = "cursor-glow";
pub const HEADER_ELEMENT_ID: &str = "site-header";
pub const HERO_GRID_ELEMENT_ID: &str = "hero-grid";
pub const SCROLL_TOP_ELEMENT_ID: &str = "scroll-to-top";
pub const FEATURES_SECTION_ID: &str = "features";
pub const WORK_SECTION_ID: &str = "our-work";
pub const WORK_GRAPHIC_ID: &str = "our-work-graphic";
pub const PLATFORM_SECTION_ID: &str = "ai-platform";
pub const PLATFORM_RING_ID_PREFIX: &str = "platform-ring-";
pub const PLATFORM_TRACER_ID_PREFIX: &str = "platform-tracer-";
pub const PLATFORM_GRAPHIC_ID: &str = "platform-graphic";
pub const PLATFORM_FEATURES_ID: &str = "platform-features";
pub const REVEAL_SECTION_IDS: [&str; 3] = ["features", "our-work", "clients"];
