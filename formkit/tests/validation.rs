//! Tests for the form validation system.

use formkit::validation::Validator;
use formkit::widgets::{Checkbox, CheckboxGroup};

async fn settled_group(members: &[(&str, bool)]) -> CheckboxGroup {
    let group = CheckboxGroup::new("answers[]");
    for (value, checked) in members {
        group.register(&Checkbox::with_checked(*value, *checked));
    }
    group.update_complete().await.unwrap();
    group
}

#[test]
fn test_checked_rule() {
    let terms = Checkbox::new("terms");

    let result = Validator::new()
        .field(&terms, "terms")
        .checked("You must accept the terms")
        .validate();
    assert!(result.is_invalid());
    assert_eq!(terms.error().as_deref(), Some("You must accept the terms"));
    assert_eq!(result.first_invalid_widget(), Some(terms.id_string()).as_deref());

    terms.set_checked(true);
    let result = Validator::new()
        .field(&terms, "terms")
        .checked("You must accept the terms")
        .validate();
    assert!(result.is_valid());
    assert!(!terms.has_error());
}

#[test]
fn test_unchecked_rule() {
    let opt_out = Checkbox::with_checked("opt-out", true);

    let result = Validator::new()
        .field(&opt_out, "opt_out")
        .unchecked("Cannot opt out here")
        .validate();
    assert!(result.is_invalid());
}

#[tokio::test]
async fn test_group_required_rule() {
    let group = settled_group(&[("a", false), ("b", false)]).await;

    let result = Validator::new()
        .field(&group, "answers")
        .required("Pick at least one")
        .validate();
    assert!(result.is_invalid());
    assert_eq!(result.errors()[0].field_name, "answers");
    assert_eq!(group.error().as_deref(), Some("Pick at least one"));

    group.form_elements()[0].set_checked(true);
    group.update_complete().await.unwrap();

    let result = Validator::new()
        .field(&group, "answers")
        .required("Pick at least one")
        .validate();
    assert!(result.is_valid());
    assert!(!group.has_error());
}

#[tokio::test]
async fn test_group_min_max_rules() {
    let group = settled_group(&[("a", true), ("b", true), ("c", true)]).await;

    let result = Validator::new()
        .field(&group, "answers")
        .min_checked(1, "Pick at least one")
        .max_checked(2, "Pick at most two")
        .validate();
    assert!(result.is_invalid());
    assert_eq!(result.errors()[0].message, "Pick at most two");
}

#[tokio::test]
async fn test_multiple_fields_report_in_order() {
    let terms = Checkbox::new("terms");
    let group = settled_group(&[("a", false)]).await;

    let result = Validator::new()
        .field(&terms, "terms")
        .checked("Accept the terms")
        .field(&group, "answers")
        .required("Pick one")
        .validate();

    let names: Vec<_> = result.errors().iter().map(|e| e.field_name.clone()).collect();
    assert_eq!(names, vec!["terms", "answers"]);
    assert_eq!(result.first_invalid_widget(), Some(terms.id_string()).as_deref());
}

#[tokio::test]
async fn test_async_rule() {
    let group = settled_group(&[("taken", true)]).await;

    let result = Validator::new()
        .field(&group, "answers")
        .rule_async(
            |values| async move { !values.iter().any(|v| v == "taken") },
            "That choice is unavailable",
        )
        .validate_async()
        .await;
    assert!(result.is_invalid());
    assert_eq!(result.errors()[0].message, "That choice is unavailable");
}

#[test]
fn test_error_display_mode() {
    use formkit::validation::ErrorDisplay;

    let cb = Checkbox::new("a");
    assert_eq!(cb.error_display(), ErrorDisplay::Below);
    cb.set_error_display(ErrorDisplay::Inline);
    assert_eq!(cb.error_display(), ErrorDisplay::Inline);
}

#[test]
fn test_custom_rule() {
    let cb = Checkbox::with_checked("a", true);

    let result = Validator::new()
        .field(&cb, "a")
        .rule(|&checked| !checked, "Must stay unchecked")
        .validate();
    assert!(result.is_invalid());
    assert_eq!(cb.error().as_deref(), Some("Must stay unchecked"));
}
