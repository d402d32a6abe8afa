//! Page components for Card Forge.

mod studio;

pub use studio::Studio;
