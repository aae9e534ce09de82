//! Tests for the checkbox choice element.

use formkit::widgets::Checkbox;
use serde_json::json;

// ============================================================================
// Construction & snapshot capture
// ============================================================================

#[test]
fn test_new_starts_unchecked() {
    let cb = Checkbox::new("Archimedes");
    assert!(!cb.is_checked());
    assert_eq!(cb.value(), json!("Archimedes"));
    assert!(!cb.initial_checked());
}

#[test]
fn test_with_checked_seeds_snapshot() {
    let cb = Checkbox::with_checked("Francis Bacon", true);
    assert!(cb.is_checked());
    assert!(cb.initial_checked());
    assert_eq!(cb.initial_value(), json!("Francis Bacon"));
}

#[test]
fn test_with_checked_false_is_not_forced_true() {
    // The shorthand flag is an initial state, not a permanent one
    let cb = Checkbox::with_checked("Marie Curie", false);
    assert!(!cb.is_checked());
    assert!(!cb.initial_checked());
}

#[test]
fn test_structured_value_payload() {
    let cb = Checkbox::new(json!({"id": 7, "label": "Other"}));
    assert_eq!(cb.value(), json!({"id": 7, "label": "Other"}));
}

#[test]
fn test_with_label() {
    let cb = Checkbox::new("a").with_label("Option A");
    assert_eq!(cb.label(), "Option A");
}

// ============================================================================
// Reset
// ============================================================================

#[test]
fn test_reset_restores_checked_snapshot() {
    let cb = Checkbox::with_checked("Francis Bacon", true);
    cb.set_checked(false);
    assert!(!cb.is_checked());

    cb.reset();
    assert!(cb.is_checked());
}

#[test]
fn test_reset_does_not_recapture() {
    let cb = Checkbox::new("Archimedes");

    cb.set_checked(true);
    cb.reset();
    assert!(!cb.is_checked());

    // A second cycle restores the same snapshot, not the intervening state
    cb.set_checked(true);
    cb.reset();
    assert!(!cb.is_checked());
}

#[test]
fn test_reset_restores_value() {
    let cb = Checkbox::new("Archimedes");
    cb.set_value("Aristotle");
    assert_eq!(cb.value(), json!("Aristotle"));

    cb.reset();
    assert_eq!(cb.value(), json!("Archimedes"));
}

#[test]
fn test_capture_reset_point() {
    let cb = Checkbox::new("Archimedes");
    cb.set_checked(true);
    cb.capture_reset_point();

    cb.set_checked(false);
    cb.reset();
    assert!(cb.is_checked());
}

// ============================================================================
// State transitions
// ============================================================================

#[test]
fn test_toggle_cycles() {
    let cb = Checkbox::new("a");
    cb.toggle();
    assert!(cb.is_checked());
    cb.toggle();
    assert!(!cb.is_checked());
}

#[test]
fn test_disabled_flag() {
    let cb = Checkbox::new("a");
    assert!(!cb.is_disabled());
    cb.set_disabled(true);
    assert!(cb.is_disabled());

    // Programmatic writes stay effective on disabled elements
    cb.set_checked(true);
    assert!(cb.is_checked());
}

#[test]
fn test_clone_shares_state() {
    let cb = Checkbox::new("a");
    let other = cb.clone();
    other.set_checked(true);
    assert!(cb.is_checked());
    assert_eq!(cb.id(), other.id());
}

#[test]
fn test_dirty_tracking() {
    let cb = Checkbox::new("a");
    assert!(!cb.is_dirty());

    cb.set_checked(true);
    assert!(cb.is_dirty());

    cb.clear_dirty();
    assert!(!cb.is_dirty());

    // Change-detecting setter: no transition, no dirty
    cb.set_checked(true);
    assert!(!cb.is_dirty());
}

#[test]
fn test_ids_are_unique() {
    let a = Checkbox::new("a");
    let b = Checkbox::new("b");
    assert_ne!(a.id(), b.id());
    assert_ne!(a.id_string(), b.id_string());
}
