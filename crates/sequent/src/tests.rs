//! Unit tests for the umbrella surface: pipelines plus combinators used
//! the way callers combine them.

use test_case::test_case;

use crate::{
    FieldError, Pipeline, Record, Sequence, SequentError, filter, fold, get, intersperse, map,
    try_map,
};

mod property_tests;

// ============================================================================
// Test Helpers
// ============================================================================

fn muppets() -> Sequence<Record<String>> {
    ["Kermit", "Piggy", "Gonzo"]
        .iter()
        .map(|name| Record::new().with_field("name", (*name).to_owned()))
        .collect()
}

// ============================================================================
// Pipeline Basics
// ============================================================================

#[test]
fn advance_applies_the_function() {
    let p = Pipeline::new(3).advance(|n| n + 4);
    assert_eq!(*p.value(), 7);
    assert_eq!(p.steps(), 1);
}

#[test]
fn then_is_the_same_operation_as_advance() {
    let via_advance = Pipeline::new(3).advance(|n| n + 4);
    let via_then = Pipeline::new(3).then(|n| n + 4);
    assert_eq!(via_advance.value(), via_then.value());
    assert_eq!(via_advance.steps(), via_then.steps());
}

#[test]
fn a_fresh_pipeline_has_zero_steps() {
    let p = Pipeline::new("hello");
    assert_eq!(p.steps(), 0);
    assert_eq!(p.into_value(), "hello");
}

#[test]
fn advance_can_change_the_wrapped_type() {
    let p = Pipeline::new(42).advance(|n| format!("n = {n}"));
    assert_eq!(p.into_value(), "n = 42");
}

#[test_case(0, 4 ; "zero")]
#[test_case(3, 7 ; "three plus four")]
#[test_case(-4, 0 ; "negative input")]
fn advance_adds_four(input: i64, expected: i64) {
    assert_eq!(Pipeline::new(input).advance(|n| n + 4).into_value(), expected);
}

#[test]
fn chaining_equals_composition() {
    let f = |n: i64| n + 1;
    let g = |n: i64| n * 3;

    let chained = Pipeline::new(10).advance(f).advance(g);
    let composed = Pipeline::new(10).advance(|n| g(f(n)));

    assert_eq!(chained.value(), composed.value());
}

#[test]
fn cloning_a_pipeline_forks_independent_chains() {
    let base = Pipeline::new(2);
    let doubled = base.clone().advance(|n| n * 2);
    let squared = base.advance(|n| n * n);

    assert_eq!(doubled.into_value(), 4);
    assert_eq!(squared.into_value(), 4);
}

// ============================================================================
// Pipelines over Sequences
// ============================================================================

#[test]
fn a_full_pipeline_filters_maps_and_folds() {
    let total = Pipeline::new(Sequence::from([1, 2, 3, 4, 5, 6]))
        .advance(|s| filter(|n| n % 2 == 0, &s))
        .advance(|s| map(|n| n * 10, &s))
        .advance(|s| fold(|acc, n| acc + n, 0, &s))
        .into_value();
    assert_eq!(total, 120);
}

#[test]
fn accessor_through_map_in_a_pipeline() {
    let names = Pipeline::new(muppets())
        .advance(|records| try_map(get("name"), &records))
        .into_value()
        .expect("every record carries a name");

    let expected: Sequence<String> = ["Kermit", "Piggy", "Gonzo"]
        .iter()
        .map(|s| (*s).to_owned())
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn join_on_commas_via_intersperse_and_fold() {
    let joined = Pipeline::new(muppets())
        .advance(|records| try_map(get("name"), &records))
        .into_value()
        .map(|s| intersperse(", ".to_owned(), &s))
        .map(|s| fold(|acc: String, item| acc + item, String::new(), &s))
        .expect("every record carries a name");
    assert_eq!(joined, "Kermit, Piggy, Gonzo");
}

// ============================================================================
// Error Surface
// ============================================================================

#[test]
fn field_errors_convert_into_the_unified_error() {
    let empty: Record<String> = Record::new();
    let err: SequentError = empty.field("name").unwrap_err().into();
    assert_eq!(
        err,
        SequentError::Field(FieldError::Missing {
            field: "name".to_owned()
        })
    );
    assert_eq!(err.to_string(), "missing field: name");
}

#[test]
fn missing_fields_surface_through_a_pipeline_unchanged() {
    let incomplete: Sequence<Record<String>> = vec![
        Record::new().with_field("name", "Kermit".to_owned()),
        Record::new(),
    ]
    .into_iter()
    .collect();

    let result: crate::Result<Sequence<String>> = Pipeline::new(incomplete)
        .advance(|records| try_map(get("name"), &records))
        .into_value()
        .map_err(SequentError::from);

    assert_eq!(
        result,
        Err(SequentError::Field(FieldError::Missing {
            field: "name".to_owned()
        }))
    );
}
