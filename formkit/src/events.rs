//! Form event types.
//!
//! Groups record events as their membership and aggregate value change.
//! Callers drain the queue via `CheckboxGroup::take_events()` after awaiting
//! settlement; events arrive in the order they were recorded. Events are
//! serializable so front-ends can forward them across process boundaries.

use serde::Serialize;

/// Identifies what happened to a form widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormEventKind {
    /// A choice element was registered with a group
    Register,
    /// A choice element was removed from a group
    Unregister,
    /// The aggregate value changed at a settle point
    Change,
    /// The group was reset to its default state
    Reset,
}

/// A recorded form event.
#[derive(Debug, Clone, Serialize)]
pub struct FormEvent {
    /// Which kind of event
    pub kind: FormEventKind,
    /// Widget ID that the event concerns
    pub widget_id: String,
}

impl FormEvent {
    /// Create a new form event.
    pub fn new(kind: FormEventKind, widget_id: impl Into<String>) -> Self {
        Self {
            kind,
            widget_id: widget_id.into(),
        }
    }
}
