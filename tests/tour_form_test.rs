//! Tour form tests: covers opening the modal, validation rules, and the
//! submit path into the store.

mod common;

use tourdesk::models::tour::form::TourField;
use tourdesk::models::tour::types::IMAGE_CLASSES;
use tourdesk::models::tour::{FormState, SubmitOutcome, TourFormController, TourFormValues, TourStatus};
use common::*;

fn submit(values: TourFormValues, store: &mut tourdesk::models::tour::TourStore) -> (TourFormController, SubmitOutcome) {
    let mut form = TourFormController::new();
    form.open(None, store);
    form.fill(values);
    let outcome = form.submit(store, &mut rand::rng()).expect("storage works");
    (form, outcome)
}

#[test]
fn test_valid_submit_appends_one_tour_with_defaults() {
    let (_storage, mut store) = memory_store();
    store.append(valid_values().validate().expect("valid"), "markets").expect("append");

    let (form, outcome) = submit(valid_values(), &mut store);

    let SubmitOutcome::Created(tour) = outcome else {
        panic!("expected a created tour, got {outcome:?}");
    };
    assert_eq!(store.len(), 2);
    assert_eq!(store.tours().last(), Some(&tour));
    assert_eq!(tour.id, 2);
    assert_eq!(tour.title, "Tour X");
    assert_eq!(tour.description, VALID_DESCRIPTION);
    assert_eq!(tour.price, 100.0);
    assert_eq!(tour.currency, "MXN");
    assert_eq!(tour.category, "History");
    assert_eq!(tour.duration, 3);
    assert_eq!(tour.max_group_size, 10);
    assert_eq!(tour.meeting_point, "Main Plaza");
    assert_eq!(tour.included_items, vec!["guide", "lunch"]);
    assert_eq!(tour.status, TourStatus::Active);
    assert_eq!(tour.bookings, 0);
    assert!(tour.rating.is_none());
    assert!(IMAGE_CLASSES.contains(&tour.image_class.as_str()));
    assert_eq!(form.state(), FormState::Closed);
}

#[test]
fn test_values_are_trimmed_on_create() {
    let (_storage, mut store) = memory_store();
    let mut values = valid_values();
    values.title = "   Tour X   ".to_string();
    values.category = " History ".to_string();

    let (_form, outcome) = submit(values, &mut store);

    let SubmitOutcome::Created(tour) = outcome else { panic!("expected created") };
    assert_eq!(tour.title, "Tour X");
    assert_eq!(tour.category, "History");
}

#[test]
fn test_any_single_failing_rule_blocks_the_submit() {
    let cases: [(TourField, fn(&mut TourFormValues)); 13] = [
        (TourField::Title, |v| v.title = "Tour".into()),
        (TourField::Description, |v| v.description = "Too short to pass".into()),
        (TourField::Price, |v| v.price = "-5".into()),
        (TourField::Price, |v| v.price = "free".into()),
        (TourField::Category, |v| v.category = "   ".into()),
        (TourField::Duration, |v| v.duration = "0".into()),
        (TourField::Duration, |v| v.duration = "13".into()),
        (TourField::MaxGroupSize, |v| v.max_group_size = "51".into()),
        (TourField::MaxGroupSize, |v| v.max_group_size = "".into()),
        (TourField::MeetingPoint, |v| v.meeting_point = "Park".into()),
        (TourField::IncludedItems, |v| v.included_items = "tea".into()),
        (TourField::IncludedItems, |v| v.included_items = ", , ,".into()),
        (TourField::Status, |v| v.status = "archived".into()),
    ];

    for (field, break_it) in cases {
        let (_storage, mut store) = memory_store();
        store.append(valid_values().validate().expect("valid"), "markets").expect("append");
        let before = store.tours().to_vec();

        let mut values = valid_values();
        break_it(&mut values);
        let (form, outcome) = submit(values, &mut store);

        assert_eq!(outcome, SubmitOutcome::Invalid, "{field:?} should fail");
        assert_eq!(store.tours(), before.as_slice(), "{field:?} must not mutate the store");
        let failed: Vec<TourField> = form.errors().iter().map(|e| e.field).collect();
        assert_eq!(failed, vec![field]);
    }
}

#[test]
fn test_duration_out_of_range_fails_only_duration_and_keeps_values() {
    let (_storage, mut store) = memory_store();
    let mut values = valid_values();
    values.duration = "15".to_string();

    let (form, outcome) = submit(values.clone(), &mut store);

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert!(store.is_empty());
    assert_eq!(form.errors().len(), 1);
    assert_eq!(form.error_for("duration"), Some("Duration must be between 1 and 12 hours"));
    assert!(!form.has_error("title"));
    assert_eq!(form.values(), &values);
    assert!(form.is_open());
    assert_eq!(form.reasons(), vec!["Invalid duration"]);
}

#[test]
fn test_all_rules_are_reported_together() {
    let (_storage, mut store) = memory_store();

    let (form, outcome) = submit(TourFormValues::default(), &mut store);

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert_eq!(form.errors().len(), 9);
}

#[test]
fn test_open_with_known_id_prefills_in_edit_mode() {
    let (_storage, mut store) = memory_store();
    let mut values = valid_values();
    values.status = "pending".to_string();
    store.append(values.validate().expect("valid"), "markets").expect("append");
    let mut form = TourFormController::new();

    form.open(Some(1), &store);

    assert_eq!(form.state(), FormState::Editing(1));
    assert_eq!(form.title(), "Edit Tour");
    let prefilled = form.values();
    assert_eq!(prefilled.title, "Tour X");
    assert_eq!(prefilled.price, "100");
    assert_eq!(prefilled.duration, "3");
    assert_eq!(prefilled.max_group_size, "10");
    assert_eq!(prefilled.included_items, "guide, lunch");
    assert_eq!(prefilled.status, "pending");
}

#[test]
fn test_open_with_unknown_id_opens_blank_create_form() {
    let (_storage, store) = memory_store();
    let mut form = TourFormController::new();

    form.open(Some(42), &store);

    assert_eq!(form.state(), FormState::Creating);
    assert_eq!(form.title(), "Create New Tour");
    assert_eq!(form.values(), &TourFormValues::blank());
}

#[test]
fn test_open_clears_previous_errors() {
    let (_storage, mut store) = memory_store();
    let (mut form, _) = submit(TourFormValues::default(), &mut store);
    assert!(!form.errors().is_empty());

    form.open(None, &store);

    assert!(form.errors().is_empty());
}

#[test]
fn test_close_resets_values_and_errors() {
    let (_storage, mut store) = memory_store();
    let (mut form, _) = submit(TourFormValues::default(), &mut store);

    form.close();

    assert_eq!(form.state(), FormState::Closed);
    assert!(!form.is_open());
    assert!(form.errors().is_empty());
    assert_eq!(form.values(), &TourFormValues::blank());
}

#[test]
fn test_submit_from_edit_mode_appends_instead_of_updating() {
    let (_storage, mut store) = memory_store();
    store.append(valid_values().validate().expect("valid"), "markets").expect("append");
    let original = store.tours()[0].clone();

    let mut form = TourFormController::new();
    form.open(Some(1), &store);
    let mut values = form.values().clone();
    values.title = "Tour X, revised".to_string();
    form.fill(values);
    let outcome = form.submit(&mut store, &mut rand::rng()).expect("storage works");

    let SubmitOutcome::Created(created) = outcome else { panic!("expected created") };
    assert_eq!(created.id, 2);
    assert_eq!(store.len(), 2);
    assert_eq!(store.tours()[0], original);
}

#[test]
fn test_submit_with_failing_storage_returns_error_and_stays_open() {
    let mut store = failing_store();
    let mut form = TourFormController::new();
    form.open(None, &store);
    form.fill(valid_values());

    let result = form.submit(&mut store, &mut rand::rng());

    assert!(result.is_err());
    assert_eq!(store.len(), 1);
    assert_eq!(form.state(), FormState::Creating);
    assert_eq!(form.values().title, "Tour X");
}
