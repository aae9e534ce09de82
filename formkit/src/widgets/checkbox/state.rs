//! Checkbox choice element state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use serde_json::Value;

use crate::signal::{ChangeNotifier, ChangeSender};
use crate::validation::ErrorDisplay;

/// Unique identifier for a Checkbox instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckboxId(usize);

impl CheckboxId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for CheckboxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__checkbox_{}", self.0)
    }
}

/// Internal state for a Checkbox
#[derive(Debug)]
struct CheckboxInner {
    /// Whether the checkbox is checked
    checked: bool,
    /// The payload this option contributes to the group aggregate
    value: Value,
    /// Label text
    label: String,
    /// Whether the checkbox is disabled for user interaction
    disabled: bool,
    /// Checked state captured at the reset point
    initial_checked: bool,
    /// Value captured at the reset point
    initial_value: Value,
    /// Validation error message (if any)
    error: Option<String>,
    /// How to display validation errors
    error_display: ErrorDisplay,
}

/// A checkbox choice element with reactive state.
///
/// `Checkbox` holds an individual checked state plus the value it
/// contributes to its group's aggregate. The state present at construction
/// is captured as a snapshot; `reset()` restores it. When registered with a
/// [`CheckboxGroup`](crate::widgets::CheckboxGroup), every checked or value
/// transition signals the group so its aggregate is recomputed at the next
/// settle point.
///
/// # Example
///
/// ```ignore
/// let group = CheckboxGroup::new("scientists[]");
/// let archimedes = Checkbox::new("Archimedes");
/// let curie = Checkbox::with_checked("Marie Curie", false);
/// group.register(&archimedes);
/// group.register(&curie);
///
/// archimedes.set_checked(true);
/// group.update_complete().await?;
/// assert_eq!(group.model_value(), vec![json!("Archimedes")]);
/// ```
#[derive(Debug)]
pub struct Checkbox {
    /// Unique identifier for this checkbox instance
    id: CheckboxId,
    /// Internal state
    inner: Arc<RwLock<CheckboxInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
    /// Change signal to the owning group (installed at registration)
    notifier: ChangeNotifier,
}

impl Checkbox {
    /// Create an unchecked checkbox with the given value.
    ///
    /// The snapshot is captured as (value, unchecked).
    pub fn new(value: impl Into<Value>) -> Self {
        Self::with_checked(value, false)
    }

    /// Create a checkbox with the given value and initial checked state.
    ///
    /// The flag is the *initial* checked state: it seeds the snapshot that
    /// `reset()` restores, and the element may be unchecked afterwards.
    pub fn with_checked(value: impl Into<Value>, checked: bool) -> Self {
        let value = value.into();
        Self {
            id: CheckboxId::new(),
            inner: Arc::new(RwLock::new(CheckboxInner {
                checked,
                value: value.clone(),
                label: String::new(),
                disabled: false,
                initial_checked: checked,
                initial_value: value,
                error: None,
                error_display: ErrorDisplay::default(),
            })),
            dirty: Arc::new(AtomicBool::new(false)),
            notifier: ChangeNotifier::new(),
        }
    }

    /// Set the label text at construction time.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.label = label.into();
        }
        self
    }

    /// Get the unique ID for this checkbox
    pub fn id(&self) -> CheckboxId {
        self.id
    }

    /// Get the ID as a string (for node binding)
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Check if the checkbox is checked
    pub fn is_checked(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.checked)
            .unwrap_or(false)
    }

    /// Get the value this option contributes to the group aggregate
    pub fn value(&self) -> Value {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or(Value::Null)
    }

    /// Get the label text
    pub fn label(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.label.clone())
            .unwrap_or_default()
    }

    /// Check if the checkbox is disabled
    pub fn is_disabled(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.disabled)
            .unwrap_or(false)
    }

    /// Get the checked state captured at the reset point
    pub fn initial_checked(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.initial_checked)
            .unwrap_or(false)
    }

    /// Get the value captured at the reset point
    pub fn initial_value(&self) -> Value {
        self.inner
            .read()
            .map(|guard| guard.initial_value.clone())
            .unwrap_or(Value::Null)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the checked state
    pub fn set_checked(&self, checked: bool) {
        if let Ok(mut guard) = self.inner.write()
            && guard.checked != checked
        {
            guard.checked = checked;
            self.dirty.store(true, Ordering::SeqCst);
            self.notifier.send();
        }
    }

    /// Toggle the checked state
    pub fn toggle(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.checked = !guard.checked;
        }
        self.dirty.store(true, Ordering::SeqCst);
        self.notifier.send();
    }

    /// Set the value.
    ///
    /// The group aggregate depends on member values, so this signals the
    /// owning group like a checked transition. The snapshot is untouched;
    /// `reset()` restores the original value.
    pub fn set_value(&self, value: impl Into<Value>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
        }
        self.dirty.store(true, Ordering::SeqCst);
        self.notifier.send();
    }

    /// Set the label text
    pub fn set_label(&self, label: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.label = label.into();
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Set the disabled state
    pub fn set_disabled(&self, disabled: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.disabled = disabled;
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Snapshot / reset
    // -------------------------------------------------------------------------

    /// Restore the checked state and value from the captured snapshot.
    ///
    /// Does not re-capture the snapshot: resetting twice restores the same
    /// state both times.
    pub fn reset(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.checked = guard.initial_checked;
            guard.value = guard.initial_value.clone();
        }
        self.dirty.store(true, Ordering::SeqCst);
        self.notifier.send();
    }

    /// Re-capture the snapshot from the current state.
    ///
    /// Subsequent `reset()` calls restore the state present at this call.
    pub fn capture_reset_point(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.initial_checked = guard.checked;
            guard.initial_value = guard.value.clone();
        }
    }

    // -------------------------------------------------------------------------
    // Group wiring
    // -------------------------------------------------------------------------

    /// Install the change sender of the owning group.
    pub(crate) fn install_notifier(&self, sender: ChangeSender) {
        self.notifier.install(sender);
    }

    /// Remove the installed change sender.
    pub(crate) fn uninstall_notifier(&self) {
        self.notifier.uninstall();
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the checkbox state has changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Set a validation error message on this checkbox.
    pub fn set_error(&self, msg: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error = Some(msg.into());
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Clear the validation error.
    pub fn clear_error(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.error.is_some()
        {
            guard.error = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if this checkbox has a validation error.
    pub fn has_error(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.error.is_some())
            .unwrap_or(false)
    }

    /// Get the current validation error message (if any).
    pub fn error(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.error.clone())
            .unwrap_or(None)
    }

    /// Get the error display mode.
    pub fn error_display(&self) -> ErrorDisplay {
        self.inner
            .read()
            .map(|guard| guard.error_display)
            .unwrap_or_default()
    }

    /// Set the error display mode.
    pub fn set_error_display(&self, display: ErrorDisplay) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error_display = display;
        }
        self.dirty.store(true, Ordering::SeqCst);
    }
}

impl Clone for Checkbox {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            notifier: self.notifier.clone(),
        }
    }
}

impl Default for Checkbox {
    fn default() -> Self {
        Self::new(Value::Null)
    }
}

// -----------------------------------------------------------------------------
// Validatable implementation
// -----------------------------------------------------------------------------

use crate::validation::Validatable;

impl Validatable for Checkbox {
    /// Value type is `bool` - the checked state
    type Value = bool;

    fn validation_value(&self) -> Self::Value {
        self.is_checked()
    }

    fn set_error(&self, msg: impl Into<String>) {
        Checkbox::set_error(self, msg)
    }

    fn clear_error(&self) {
        Checkbox::clear_error(self)
    }

    fn has_error(&self) -> bool {
        Checkbox::has_error(self)
    }

    fn error(&self) -> Option<String> {
        Checkbox::error(self)
    }

    fn widget_id(&self) -> String {
        self.id_string()
    }

    fn error_display(&self) -> ErrorDisplay {
        Checkbox::error_display(self)
    }

    fn set_error_display(&self, display: ErrorDisplay) {
        Checkbox::set_error_display(self, display)
    }
}
