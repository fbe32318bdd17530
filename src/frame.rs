use crate::core::{frame_scale, Animator, FrameStatus, StartOutcome};
use crate::dom;
use crate::render::CanvasSurface;
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub animator: Animator<CanvasSurface, StdRng>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(animator: Animator<CanvasSurface, StdRng>) -> Self {
        Self {
            animator,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) -> FrameStatus {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        self.animator.frame(frame_scale(dt.as_secs_f64() * 1000.0))
    }
}

/// Start the animator and, on first activation, wire resize and the frame
/// loop. Later calls and reduced motion do nothing.
pub fn start_particles(frame_ctx: &Rc<RefCell<FrameContext>>) {
    let Some(window) = web::window() else {
        return;
    };
    let outcome = {
        let mut ctx = frame_ctx.borrow_mut();
        let outcome = ctx.animator.start(dom::viewport_size(&window));
        ctx.last_instant = Instant::now();
        outcome
    };
    if outcome == StartOutcome::Started {
        wire_viewport_resize(&window, frame_ctx.clone());
        start_loop(frame_ctx.clone());
    }
}

fn wire_viewport_resize(window: &web::Window, frame_ctx: Rc<RefCell<FrameContext>>) {
    let resize_closure = Closure::wrap(Box::new(move || {
        if let Some(w) = web::window() {
            frame_ctx.borrow_mut().animator.resize(dom::viewport_size(&w));
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    resize_closure.forget();
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let status = frame_ctx.borrow_mut().frame();
        if status == FrameStatus::Stopped {
            log::info!("[animator] stopped");
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
