//! Theme for Card Forge.

mod styles;

pub use styles::GLOBAL_STYLES;
