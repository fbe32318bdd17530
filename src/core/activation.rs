/// Page actions triggered by the "open letter" button.
pub trait ActivationHost {
    fn scroll_to_letter(&mut self);
    /// Disable the button and replace its label.
    fn lock_button(&mut self, label: &str);
    fn open_envelope(&mut self);
    fn start_particles(&mut self);
    /// Kick off the typing sequence. Must not wait for it to finish.
    fn begin_letter(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    Opened,
    /// Letter was already open; only scrolled back to it.
    AlreadyOpen,
}

/// Already-opened guard for the button.
#[derive(Clone, Debug)]
pub struct LetterActivation {
    opened: bool,
    opened_label: String,
}

impl LetterActivation {
    pub fn new(opened_label: impl Into<String>) -> Self {
        Self {
            opened: false,
            opened_label: opened_label.into(),
        }
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    #[inline]
    pub fn is_opened(&self) -> bool {
        self.opened
    }

    pub fn activate<H: ActivationHost>(&mut self, host: &mut H) -> Activation {
        if self.opened {
            log::debug!("[activation] letter already open; scrolling");
            host.scroll_to_letter();
            return Activation::AlreadyOpen;
        }
        self.opened = true;
        host.lock_button(&self.opened_label);
        host.open_envelope();
        host.scroll_to_letter();
        host.start_particles();
        host.begin_letter();
        log::info!("[activation] letter opened");
        Activation::Opened
    }
}
