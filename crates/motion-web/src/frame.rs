use motion_core::{CancelToken, FrameGate};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(callback: &FrameCallback, handle: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = callback.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(h) => handle.set(Some(h)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}

fn cancel_pending(token: &CancelToken, callback: &FrameCallback, handle: &Cell<Option<i32>>) {
    token.cancel();
    if let (Some(w), Some(h)) = (web::window(), handle.take()) {
        _ = w.cancel_animation_frame(h);
    }
    // breaks the closure's reference to itself
    callback.borrow_mut().take();
}

/// A self-rescheduling `requestAnimationFrame` loop.
///
/// Runs once per display frame until dropped. Dropping cancels the token and
/// the pending frame, so no callback outlives its owner.
pub struct AnimationLoop {
    token: CancelToken,
    callback: FrameCallback,
    handle: Rc<Cell<Option<i32>>>,
}

pub fn start_loop(mut frame: impl FnMut() + 'static) -> AnimationLoop {
    let token = CancelToken::new();
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let handle = Rc::new(Cell::new(None));

    let token_tick = token.clone();
    let callback_tick = callback.clone();
    let handle_tick = handle.clone();
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        handle_tick.set(None);
        if token_tick.is_cancelled() {
            return;
        }
        frame();
        if !token_tick.is_cancelled() {
            request_frame(&callback_tick, &handle_tick);
        }
    }) as Box<dyn FnMut()>));

    request_frame(&callback, &handle);
    AnimationLoop {
        token,
        callback,
        handle,
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        cancel_pending(&self.token, &self.callback, &self.handle);
    }
}

/// Runs `work` at most once per frame however often `request` is called
/// in between.
pub struct CoalescedFrame {
    gate: Rc<FrameGate>,
    token: CancelToken,
    callback: FrameCallback,
    handle: Rc<Cell<Option<i32>>>,
}

impl CoalescedFrame {
    pub fn new(mut work: impl FnMut() + 'static) -> Self {
        let gate = Rc::new(FrameGate::new());
        let token = CancelToken::new();
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));

        let gate_cb = gate.clone();
        let token_cb = token.clone();
        let handle_cb = handle.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_cb.set(None);
            gate_cb.begin_frame();
            if !token_cb.is_cancelled() {
                work();
            }
        }) as Box<dyn FnMut()>));

        Self {
            gate,
            token,
            callback,
            handle,
        }
    }

    pub fn request(&self) {
        if self.token.is_cancelled() || !self.gate.request() {
            return;
        }
        request_frame(&self.callback, &self.handle);
    }
}

impl Drop for CoalescedFrame {
    fn drop(&mut self) {
        cancel_pending(&self.token, &self.callback, &self.handle);
    }
}
