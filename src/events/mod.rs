pub mod click;
pub mod visibility;

pub use click::{wire_open_letter, LetterWiring};
pub use visibility::init_reveal;
