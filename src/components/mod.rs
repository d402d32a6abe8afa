//! UI Components for Card Forge.

mod card_form;
mod card_placeholder;
mod creature_card;
mod toast;

pub use card_form::CardForm;
pub use card_placeholder::CardPlaceholder;
pub use creature_card::CreatureCard;
pub use toast::Toast;
