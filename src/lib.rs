#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::core::{Animator, LetterContent, ParticleParams};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;
mod writer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("[init] love-letter-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    dom::on_document_ready(&document, || {
        if let Err(e) = init() {
            log::error!("[init] init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Evaluated once per page load
    let reduced_motion = dom::prefers_reduced_motion(&window);
    log::info!("[init] reduced motion: {}", reduced_motion);

    if let Err(e) = events::init_reveal(&document, reduced_motion) {
        log::error!("[reveal] init error: {:?}", e);
    }

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let surface = render::CanvasSurface::new(canvas)?;
    let animator = Animator::new(
        surface,
        StdRng::from_entropy(),
        ParticleParams::default(),
        reduced_motion,
    );
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(animator)));

    let button: web::HtmlButtonElement = dom::element_by_id(&document, OPEN_BUTTON_ID)?
        .dyn_into::<web::HtmlButtonElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let envelope = document
        .query_selector(ENVELOPE_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let message = dom::element_by_id(&document, MESSAGE_ID)?;
    let section = dom::element_by_id(&document, LETTER_SECTION_ID)?;

    events::wire_open_letter(events::LetterWiring {
        document,
        button,
        envelope,
        message,
        section,
        frame_ctx,
        content: Rc::new(LetterContent::default()),
    });
    Ok(())
}
