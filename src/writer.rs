use crate::constants::{LINE_CLASS, VISIBLE_CLASS};
use crate::core::LetterSink;
use crate::dom;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Letter container that receives one `<p class="letter__line">` per paragraph.
pub struct DomLetterSink {
    document: web::Document,
    container: web::Element,
    line: Option<web::Element>,
}

impl DomLetterSink {
    pub fn new(document: web::Document, container: web::Element) -> Self {
        Self {
            document,
            container,
            line: None,
        }
    }
}

impl LetterSink for DomLetterSink {
    fn clear(&mut self) {
        self.container.set_inner_html("");
        self.line = None;
    }

    fn show(&mut self) {
        dom::add_class(&self.container, VISIBLE_CLASS);
    }

    fn append_line(&mut self) -> bool {
        match self.document.create_element("p") {
            Ok(p) => {
                dom::add_class(&p, LINE_CLASS);
                _ = self.container.append_child(&p);
                self.line = Some(p);
                true
            }
            Err(e) => {
                log::error!("[letter] create <p> failed: {:?}", e);
                self.line = None;
                false
            }
        }
    }

    fn set_line_text(&mut self, text: &str) {
        if let Some(line) = &self.line {
            line.set_text_content(Some(text));
        }
    }
}

/// Resolve after `ms` milliseconds via `setTimeout`.
pub async fn sleep_ms(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32);
        }
    });
    _ = JsFuture::from(promise).await;
}
