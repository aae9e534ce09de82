//! Checkbox group container state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use serde_json::Value;

use crate::events::{FormEvent, FormEventKind};
use crate::signal::{self, ChangePending, ChangeSender};
use crate::validation::ErrorDisplay;
use crate::widgets::checkbox::{Checkbox, CheckboxId};

use super::NamingError;

/// Unique identifier for a CheckboxGroup instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckboxGroupId(usize);

impl CheckboxGroupId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for CheckboxGroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__checkbox_group_{}", self.0)
    }
}

/// Internal state for a CheckboxGroup
#[derive(Debug)]
struct CheckboxGroupInner {
    /// Group name; must end in `[]` by the next settle after assignment
    name: String,
    /// Registered members, in document order
    members: Vec<Checkbox>,
    /// Cached aggregate: values of the checked members, in document order
    model_value: Vec<Value>,
    /// Label text
    label: String,
    /// A name assignment awaits validation at the next settle
    name_dirty: bool,
    /// Recorded events, drained by `take_events()`
    events: Vec<FormEvent>,
    /// Validation error message (if any)
    error: Option<String>,
    /// How to display validation errors
    error_display: ErrorDisplay,
}

/// A checkbox group container with reactive state.
///
/// `CheckboxGroup` owns an ordered collection of [`Checkbox`] members and
/// aggregates their values: `model_value()` is the ordered list of values of
/// exactly the checked members. Member mutations signal the group; the
/// aggregate is recomputed when a caller awaits [`update_complete()`], so
/// multiple synchronous mutations coalesce into one recompute. A reader that
/// skips settlement may observe a stale aggregate.
///
/// Group names carry multi-value semantics and must end in `[]`; assignments
/// are validated at the next settle point, not synchronously.
///
/// # Example
///
/// ```ignore
/// let group = CheckboxGroup::new("scientists[]");
/// let bacon = Checkbox::with_checked("Francis Bacon", true);
/// group.register(&Checkbox::new("Archimedes"));
/// group.register(&bacon);
/// group.update_complete().await?;
/// assert_eq!(group.model_value(), vec![json!("Francis Bacon")]);
///
/// group.form_elements()[0].set_checked(true);
/// group.update_complete().await?;
/// assert_eq!(
///     group.model_value(),
///     vec![json!("Archimedes"), json!("Francis Bacon")],
/// );
///
/// group.reset_group();
/// assert_eq!(group.model_value(), vec![json!("Francis Bacon")]);
/// ```
///
/// [`update_complete()`]: CheckboxGroup::update_complete
#[derive(Debug)]
pub struct CheckboxGroup {
    /// Unique identifier for this group instance
    id: CheckboxGroupId,
    /// Internal state
    inner: Arc<RwLock<CheckboxGroupInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
    /// Sender installed into each registered member
    sender: ChangeSender,
    /// Latch set by member signals, consumed at settle
    pending: Arc<ChangePending>,
}

impl CheckboxGroup {
    /// Create a new empty group with the given name.
    ///
    /// The name is stored as given; suffix validation is deferred to the
    /// first settle point, like any other assignment.
    pub fn new(name: impl Into<String>) -> Self {
        let (sender, pending) = signal::channel();
        Self {
            id: CheckboxGroupId::new(),
            inner: Arc::new(RwLock::new(CheckboxGroupInner {
                name: name.into(),
                members: Vec::new(),
                model_value: Vec::new(),
                label: String::new(),
                name_dirty: true,
                events: Vec::new(),
                error: None,
                error_display: ErrorDisplay::default(),
            })),
            dirty: Arc::new(AtomicBool::new(false)),
            sender,
            pending: Arc::new(pending),
        }
    }

    /// Set the label text at construction time.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.label = label.into();
        }
        self
    }

    /// Get the unique ID for this group
    pub fn id(&self) -> CheckboxGroupId {
        self.id
    }

    /// Get the ID as a string (for node binding)
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the group name
    pub fn name(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.name.clone())
            .unwrap_or_default()
    }

    /// Get the label text
    pub fn label(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.label.clone())
            .unwrap_or_default()
    }

    /// Get the registered members, in document order
    pub fn form_elements(&self) -> Vec<Checkbox> {
        self.inner
            .read()
            .map(|guard| guard.members.clone())
            .unwrap_or_default()
    }

    /// Get the number of registered members
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.members.len())
            .unwrap_or(0)
    }

    /// Check if the group has no members
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the aggregate value: the values of the checked members, in
    /// document order.
    ///
    /// This is the cached aggregate from the last settle (or from
    /// `reset_group()`/`clear_group()`, which recompute before returning).
    /// After a member mutation it is stale until `update_complete()` is
    /// awaited.
    pub fn model_value(&self) -> Vec<Value> {
        self.inner
            .read()
            .map(|guard| guard.model_value.clone())
            .unwrap_or_default()
    }

    /// Get the aggregate as a serialized JSON array.
    pub fn serialized_value(&self) -> Value {
        Value::Array(self.model_value())
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the group name.
    ///
    /// The name is stored immediately and `name()` reflects it; suffix
    /// validation is deferred to the next settle point. The aggregate is
    /// never touched by a rename.
    pub fn set_name(&self, name: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.name = name.into();
            guard.name_dirty = true;
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Set the label text
    pub fn set_label(&self, label: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.label = label.into();
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Member registration
    // -------------------------------------------------------------------------

    /// Register a member at the end of the group.
    ///
    /// Registration order is document order: it fixes the member's position
    /// in `form_elements()` and in the aggregate. The member's change signal
    /// is wired to this group; the aggregate includes the member from the
    /// next settle on.
    pub fn register(&self, member: &Checkbox) {
        member.install_notifier(self.sender.clone());
        if let Ok(mut guard) = self.inner.write() {
            guard.members.push(member.clone());
            guard
                .events
                .push(FormEvent::new(FormEventKind::Register, member.id_string()));
        }
        self.pending.set();
        self.dirty.store(true, Ordering::SeqCst);
        log::debug!("group {}: registered member {}", self.id, member.id());
    }

    /// Remove a member from the group.
    ///
    /// Returns `true` if the member was registered. The member itself is
    /// untouched apart from losing its change wiring; the aggregate drops
    /// its value at the next settle.
    pub fn unregister(&self, id: CheckboxId) -> bool {
        let mut removed = None;
        if let Ok(mut guard) = self.inner.write()
            && let Some(pos) = guard.members.iter().position(|m| m.id() == id)
        {
            removed = Some(guard.members.remove(pos));
            guard
                .events
                .push(FormEvent::new(FormEventKind::Unregister, id.to_string()));
        }
        match removed {
            Some(member) => {
                member.uninstall_notifier();
                self.pending.set();
                self.dirty.store(true, Ordering::SeqCst);
                log::debug!("group {}: unregistered member {}", self.id, id);
                true
            }
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Reset / clear
    // -------------------------------------------------------------------------

    /// Reset every member to its captured snapshot, in document order.
    ///
    /// Members initialized as checked come back checked. The aggregate is
    /// recomputed before this returns; no settle is needed to observe the
    /// post-reset value. Idempotent.
    pub fn reset_group(&self) {
        if let Ok(mut guard) = self.inner.write() {
            for member in &guard.members {
                member.reset();
            }
            Self::recompute(&mut guard);
            let id = self.id.to_string();
            guard.events.push(FormEvent::new(FormEventKind::Reset, id));
        }
        // Consume the signals latched by the member resets
        self.pending.take();
        self.dirty.store(true, Ordering::SeqCst);
        log::debug!("group {}: reset", self.id);
    }

    /// Uncheck every member, leaving snapshots intact.
    ///
    /// Like `reset_group()`, the aggregate is recomputed before returning;
    /// it is empty afterwards.
    pub fn clear_group(&self) {
        if let Ok(mut guard) = self.inner.write() {
            for member in &guard.members {
                member.set_checked(false);
            }
            Self::recompute(&mut guard);
        }
        self.pending.take();
        self.dirty.store(true, Ordering::SeqCst);
        log::debug!("group {}: cleared", self.id);
    }

    // -------------------------------------------------------------------------
    // Settlement
    // -------------------------------------------------------------------------

    /// Settle all pending mutations.
    ///
    /// Resolves once buffered member signals have been coalesced into a
    /// single aggregate recompute and any pending name assignment has been
    /// validated. Returns [`NamingError`] when a name lacking the `[]`
    /// suffix was assigned since the last settle; the error leaves the
    /// aggregate and all applied member mutations intact, and is reported
    /// once per offending assignment.
    pub async fn update_complete(&self) -> Result<(), NamingError> {
        // Settlement resolves at a task-tick boundary.
        tokio::task::yield_now().await;

        let mut result = Ok(());
        if let Ok(mut guard) = self.inner.write() {
            if self.pending.take() && Self::recompute(&mut guard) {
                let id = self.id.to_string();
                guard.events.push(FormEvent::new(FormEventKind::Change, id));
                log::debug!("group {}: aggregate recomputed", self.id);
            }
            if guard.name_dirty {
                guard.name_dirty = false;
                if !guard.name.ends_with("[]") {
                    log::warn!("group {}: invalid name {:?}", self.id, guard.name);
                    result = Err(NamingError::new(guard.name.clone()));
                }
            }
        }
        result
    }

    /// Recompute the aggregate from the members. Returns whether it changed.
    fn recompute(guard: &mut CheckboxGroupInner) -> bool {
        let next: Vec<Value> = guard
            .members
            .iter()
            .filter(|m| m.is_checked())
            .map(|m| m.value())
            .collect();
        if next != guard.model_value {
            guard.model_value = next;
            true
        } else {
            false
        }
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Drain the recorded events, in the order they were recorded.
    pub fn take_events(&self) -> Vec<FormEvent> {
        self.inner
            .write()
            .map(|mut guard| std::mem::take(&mut guard.events))
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the group state has changed
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

    /// Set a validation error message on this group.
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

    /// Check if this group has a validation error.
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

impl Clone for CheckboxGroup {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            sender: self.sender.clone(),
            pending: Arc::clone(&self.pending),
        }
    }
}

// -----------------------------------------------------------------------------
// Validatable implementation
// -----------------------------------------------------------------------------

use crate::validation::Validatable;

impl Validatable for CheckboxGroup {
    /// Value type is `Vec<Value>` - the aggregate of checked members
    type Value = Vec<Value>;

    fn validation_value(&self) -> Self::Value {
        self.model_value()
    }

    fn set_error(&self, msg: impl Into<String>) {
        CheckboxGroup::set_error(self, msg)
    }

    fn clear_error(&self) {
        CheckboxGroup::clear_error(self)
    }

    fn has_error(&self) -> bool {
        CheckboxGroup::has_error(self)
    }

    fn error(&self) -> Option<String> {
        CheckboxGroup::error(self)
    }

    fn widget_id(&self) -> String {
        self.id_string()
    }

    fn error_display(&self) -> ErrorDisplay {
        CheckboxGroup::error_display(self)
    }

    fn set_error_display(&self, display: ErrorDisplay) {
        CheckboxGroup::set_error_display(self, display)
    }
}
