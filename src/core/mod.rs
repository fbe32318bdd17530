pub mod activation;
pub mod animator;
pub mod config;
pub mod constants;
pub mod letter;
pub mod particles;
pub mod reveal;

pub use activation::*;
pub use animator::*;
pub use config::*;
pub use letter::*;
pub use particles::*;
pub use reveal::*;
