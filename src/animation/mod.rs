pub mod easing;
pub mod property;

pub use easing::EasingType;
pub use property::{Animatable, Axis};
