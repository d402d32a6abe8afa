use dioxus::prelude::*;

use cardforge_core::CardClient;

use crate::context::Toaster;
use crate::pages::Studio;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the generation client, and the toast notifier to
/// the single studio page.
#[component]
pub fn App() -> Element {
    // One client for the whole session; cloning shares the connection pool
    let client: Signal<CardClient> = use_signal(|| CardClient::new(crate::server_url()));
    use_context_provider(|| client);

    Toaster::provide();

    rsx! {
        style { {GLOBAL_STYLES} }
        Studio {}
    }
}
