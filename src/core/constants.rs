// Shared tuning for the particle field, letter and reveal behavior.
// Ranges are half-open `[min, min + span)` to match how they are sampled.

// Particle pool
pub const PARTICLE_COUNT: usize = 60;

// Particle attribute ranges
pub const SIZE_MIN: f32 = 12.0;
pub const SIZE_SPAN: f32 = 18.0;
pub const SPEED_MIN: f32 = 0.8; // px per frame at 60 Hz
pub const SPEED_SPAN: f32 = 1.5;
pub const WOBBLE_MIN: f32 = 1.0; // px
pub const WOBBLE_SPAN: f32 = 2.0;
pub const WOBBLE_FREQ_MIN: f32 = 0.02; // rad per px of travel
pub const WOBBLE_FREQ_SPAN: f32 = 0.04;
pub const ALPHA_MIN: f32 = 0.2;
pub const ALPHA_SPAN: f32 = 0.6;

// Heart fill, alpha appended per particle
pub const HEART_RGB: [u8; 3] = [255, 126, 194];

// Heart outline control points, as multiples of particle size
pub const HEART_SHOULDER_X: f32 = 0.5;
pub const HEART_LOBE_X: f32 = 1.4;
pub const HEART_LOBE_Y: f32 = 1.0 / 3.0;

// Frame pacing: drift speeds are tuned for this refresh rate
pub const REFERENCE_FRAME_MS: f64 = 1000.0 / 60.0;
pub const MAX_FRAME_SCALE: f32 = 3.0; // caps catch-up after a backgrounded tab

// Letter typing
pub const CHAR_DELAY_MS: u32 = 32;
pub const OPENED_BUTTON_LABEL: &str = "Carta aberta com amor";

// Reveal-on-scroll visibility ratio
pub const REVEAL_THRESHOLD: f64 = 0.25;
