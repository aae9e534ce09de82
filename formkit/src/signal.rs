//! Change-notification channel between choice elements and their group.
//!
//! The group defers aggregate recomputation until its settle point. When a
//! member's state changes, a change signal latches the group's pending flag;
//! multiple buffered signals coalesce into a single recompute.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Sender half of the change channel.
///
/// Installed into each registered choice element. Cloning is cheap; all
/// clones latch the same pending flag.
#[derive(Clone, Debug)]
pub struct ChangeSender {
    pending: Arc<AtomicBool>,
}

impl ChangeSender {
    /// Latch the pending flag.
    ///
    /// Non-blocking and infallible.
    pub fn send(&self) {
        self.pending.store(true, Ordering::SeqCst);
    }
}

/// Receiver half of the change channel, owned by the group.
#[derive(Debug)]
pub struct ChangePending {
    pending: Arc<AtomicBool>,
}

impl ChangePending {
    /// Consume the latch.
    ///
    /// Returns `true` if at least one signal arrived since the last call.
    /// Buffered signals collapse into a single `true`.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::SeqCst)
    }

    /// Peek at the latch without consuming it.
    pub fn is_set(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    /// Latch the flag from the receiving side.
    ///
    /// Used by the group for mutations it performs itself (registration,
    /// removal) that must trigger a recompute at the next settle.
    pub fn set(&self) {
        self.pending.store(true, Ordering::SeqCst);
    }
}

/// Create a new connected channel pair.
pub fn channel() -> (ChangeSender, ChangePending) {
    let pending = Arc::new(AtomicBool::new(false));
    (
        ChangeSender {
            pending: Arc::clone(&pending),
        },
        ChangePending { pending },
    )
}

/// Handle for installing a change sender into a choice element.
///
/// An element is constructed standalone; the sender is installed later, when
/// a group registers the element, and removed again on unregistration.
#[derive(Debug, Default, Clone)]
pub struct ChangeNotifier {
    inner: Arc<Mutex<Option<ChangeSender>>>,
}

impl ChangeNotifier {
    /// Create a new empty notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a change sender.
    pub fn install(&self, sender: ChangeSender) {
        if let Ok(mut guard) = self.inner.lock() {
            *guard = Some(sender);
        }
    }

    /// Remove the installed sender.
    pub fn uninstall(&self) {
        if let Ok(mut guard) = self.inner.lock() {
            *guard = None;
        }
    }

    /// Send a change signal if a sender is installed.
    pub fn send(&self) {
        if let Ok(guard) = self.inner.lock() {
            if let Some(sender) = guard.as_ref() {
                sender.send();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signals_coalesce_into_one_take() {
        let (tx, rx) = channel();
        assert!(!rx.is_set());
        tx.send();
        tx.send();
        tx.send();
        assert!(rx.is_set());
        assert!(rx.take());
        assert!(!rx.take());
    }

    #[test]
    fn uninstalled_notifier_is_noop() {
        let notifier = ChangeNotifier::new();
        notifier.send();

        let (tx, rx) = channel();
        notifier.install(tx);
        notifier.send();
        assert!(rx.take());

        notifier.uninstall();
        notifier.send();
        assert!(!rx.take());
    }
}
