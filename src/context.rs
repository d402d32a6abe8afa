//! Shared UI context for Card Forge.
//!
//! Provides the generation client and the toast notifier to all components
//! via use_context.

use std::time::Duration;

use dioxus::prelude::*;

use cardforge_core::CardClient;

/// How long a toast stays visible unless replaced.
pub const TOAST_DURATION: Duration = Duration::from_millis(4000);

/// Hook to access the generation client from context.
pub fn use_client() -> Signal<CardClient> {
    use_context::<Signal<CardClient>>()
}

/// Hook to access the toast notifier from context.
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}

/// A transient notification message.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    /// Monotonically increasing id; the dismiss timer only clears the toast
    /// it was armed for, so a newer toast always gets its full duration.
    pub id: u64,
    pub text: String,
}

/// The single transient notification surface.
///
/// One notifier value owns the current-message signal for the whole app;
/// components call [`Toaster::notify`] instead of creating their own
/// notification elements.
#[derive(Clone, Copy)]
pub struct Toaster {
    current: Signal<Option<ToastMessage>>,
    next_id: Signal<u64>,
}

impl Toaster {
    /// Create the notifier and register it in context. Call once, from the
    /// root component.
    pub fn provide() -> Self {
        let current = use_signal(|| Option::<ToastMessage>::None);
        let next_id = use_signal(|| 0u64);
        let toaster = Self { current, next_id };
        use_context_provider(|| toaster);
        toaster
    }

    /// Show a message, replacing whatever is currently visible, and schedule
    /// its dismissal after `duration`.
    pub fn notify(&mut self, text: impl Into<String>, duration: Duration) {
        let id = self.next_id.peek().wrapping_add(1);
        self.next_id.set(id);
        self.current.set(Some(ToastMessage {
            id,
            text: text.into(),
        }));

        let mut current = self.current;
        spawn(async move {
            tokio::time::sleep(duration).await;
            let still_current = current.peek().as_ref().is_some_and(|t| t.id == id);
            if still_current {
                current.set(None);
            }
        });
    }

    /// The currently visible message, if any.
    pub fn current(&self) -> Option<ToastMessage> {
        (self.current)()
    }
}
