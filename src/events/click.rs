use crate::constants::OPEN_CLASS;
use crate::core::{write_letter, Activation, ActivationHost, LetterActivation, LetterContent};
use crate::dom;
use crate::frame::{self, FrameContext};
use crate::writer::{self, DomLetterSink};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Page elements and subsystems the button drives.
#[derive(Clone)]
pub struct LetterWiring {
    pub document: web::Document,
    pub button: web::HtmlButtonElement,
    pub envelope: Option<web::Element>,
    pub message: web::Element,
    pub section: web::Element,
    pub frame_ctx: Rc<RefCell<FrameContext>>,
    pub content: Rc<LetterContent>,
}

impl ActivationHost for LetterWiring {
    fn scroll_to_letter(&mut self) {
        dom::scroll_into_view_centered(&self.section);
    }

    fn lock_button(&mut self, label: &str) {
        self.button.set_disabled(true);
        self.button.set_text_content(Some(label));
    }

    fn open_envelope(&mut self) {
        match &self.envelope {
            Some(env) => dom::add_class(env, OPEN_CLASS),
            None => log::warn!("[activation] no envelope element"),
        }
    }

    fn start_particles(&mut self) {
        frame::start_particles(&self.frame_ctx);
    }

    fn begin_letter(&mut self) {
        let mut sink = DomLetterSink::new(self.document.clone(), self.message.clone());
        let content = self.content.clone();
        spawn_local(async move {
            write_letter(
                &mut sink,
                content.paragraphs.clone(),
                content.char_delay_ms,
                writer::sleep_ms,
            )
            .await;
        });
    }
}

pub fn wire_open_letter(wiring: LetterWiring) {
    let mut host = wiring;
    let mut activation = LetterActivation::new(host.content.opened_label.clone());
    let target: web::EventTarget = host.button.clone().into();
    dom::add_click_listener(&target, move |ev| {
        if activation.activate(&mut host) == Activation::Opened {
            ev.prevent_default();
        }
    });
}
