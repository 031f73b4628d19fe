//! The single observer notified of captured status values.

use std::sync::{Arc, Mutex, Weak};

/// Receives status values captured from webview payloads.
///
/// Always called on the UI thread.
pub trait StatusSubscriber: Send + Sync {
    fn did_capture_status_value(&self, value: &str);
}

impl<F> StatusSubscriber for F
where
    F: Fn(&str) + Send + Sync,
{
    fn did_capture_status_value(&self, value: &str) {
        self(value)
    }
}

/// Holds at most one non-owning subscriber reference. Last write wins.
#[derive(Default)]
pub(crate) struct SubscriberSlot {
    current: Mutex<Option<Weak<dyn StatusSubscriber>>>,
}

impl SubscriberSlot {
    pub(crate) fn set(&self, subscriber: Weak<dyn StatusSubscriber>) {
        if let Ok(mut current) = self.current.lock() {
            *current = Some(subscriber);
        }
    }

    pub(crate) fn clear(&self) {
        if let Ok(mut current) = self.current.lock() {
            *current = None;
        }
    }

    /// The live subscriber, if one is registered and not yet dropped.
    pub(crate) fn get(&self) -> Option<Arc<dyn StatusSubscriber>> {
        self.current
            .lock()
            .ok()
            .and_then(|current| current.as_ref().and_then(Weak::upgrade))
    }

    /// Deliver `value`. Returns false when nobody is listening.
    ///
    /// The lock is released before the callback runs, so a subscriber may
    /// unsubscribe from inside it.
    pub(crate) fn notify(&self, value: &str) -> bool {
        match self.get() {
            Some(subscriber) => {
                subscriber.did_capture_status_value(value);
                true
            }
            None => false,
        }
    }
}
