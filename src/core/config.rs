use super::constants::*;

/// Half-open sampling range `[min, min + span)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f32,
    pub span: f32,
}

impl Span {
    pub const fn new(min: f32, span: f32) -> Self {
        Self { min, span }
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    #[inline]
    pub fn max(&self) -> f32 {
        self.min + self.span
    }

    /// Map a unit sample in `[0, 1)` into the range.
    #[inline]
    pub fn lerp(&self, t: f32) -> f32 {
        self.min + t * self.span
    }
}

#[derive(Clone, Debug)]
pub struct ParticleParams {
    pub count: usize,
    pub size: Span,
    pub speed: Span,
    pub wobble: Span,
    pub wobble_frequency: Span,
    pub alpha: Span,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            size: Span::new(SIZE_MIN, SIZE_SPAN),
            speed: Span::new(SPEED_MIN, SPEED_SPAN),
            wobble: Span::new(WOBBLE_MIN, WOBBLE_SPAN),
            wobble_frequency: Span::new(WOBBLE_FREQ_MIN, WOBBLE_FREQ_SPAN),
            alpha: Span::new(ALPHA_MIN, ALPHA_SPAN),
        }
    }
}

pub const LETTER_PARAGRAPHS: &[&str] = &[
    "Princesa, passando para agradecer por esses 11 meses ao teu lado e lembrar que eu te amo infinitamente.",
    "Você é minha melhor companhia, a pessoa com quem eu amo dividir cada momento e cada sonho. Olho para o que já vivemos e sinto orgulho de quem me tornei desde que te conheci.",
    "Lembro de Gramado e de como você roubou toda a beleza daquele lugar. Ali eu tive a certeza: eu estava — e sigo — cada vez mais apaixonado por você.",
    "Eu acredito — e sei — que você vai ser a melhor médica de todas. Confia, acredita e segue na fé, porque essa aprovação já é tua.",
    "Te admiro demais, minha cueia sapecuda. Obrigado por ser minha casa, meu riso e minha paz. Feliz nosso dia 07!",
];

/// Text shown once the letter is opened.
#[derive(Clone, Debug)]
pub struct LetterContent {
    pub paragraphs: Vec<String>,
    pub opened_label: String,
    pub char_delay_ms: u32,
}

impl Default for LetterContent {
    fn default() -> Self {
        Self {
            paragraphs: LETTER_PARAGRAPHS.iter().map(|p| p.to_string()).collect(),
            opened_label: OPENED_BUTTON_LABEL.to_string(),
            char_delay_ms: CHAR_DELAY_MS,
        }
    }
}
