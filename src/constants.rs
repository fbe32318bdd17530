/// DOM contract with the page markup and stylesheet.
///
/// Ids, selectors and class names the glue looks up. Keeping them here keeps
/// string literals out of the wiring code.
pub const CANVAS_ID: &str = "heartCanvas";
pub const OPEN_BUTTON_ID: &str = "open-letter";
pub const ENVELOPE_SELECTOR: &str = ".letter__envelope";
pub const MESSAGE_ID: &str = "letterMessage";
pub const LETTER_SECTION_ID: &str = "carta";
pub const REVEAL_SELECTOR: &str = "[data-reveal]";

// `document.readyState` while the parser is still running
pub const LOADING_READY_STATE: &str = "loading";

/// `true` once `DOMContentLoaded` has fired (`interactive` or `complete`).
#[inline]
pub fn is_document_parsed(ready_state: &str) -> bool {
    ready_state != LOADING_READY_STATE
}

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Classes toggled by the stylesheet
pub const VISIBLE_CLASS: &str = "is-visible";
pub const OPEN_CLASS: &str = "is-open";
pub const LINE_CLASS: &str = "letter__line";
