use outcome_rail::validation::ValidationErrorBuilder;
use outcome_rail::{Error, ErrorDetail, ErrorKind, ValidationError};

fn without_description(code: &'static str) -> Error {
    Error::from_detail(ErrorKind::Problem, ErrorDetail::code_only(code))
}

fn descriptions(builder: &ValidationErrorBuilder, code: &str) -> Vec<String> {
    builder
        .descriptions(code)
        .unwrap_or_default()
        .iter()
        .map(|d| d.to_string())
        .collect()
}

#[test]
fn create_returns_independent_empty_builders() {
    let mut first = ValidationErrorBuilder::create();
    let second = ValidationErrorBuilder::create();

    first.add("Email", "Email is required");

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
}

#[test]
fn add_error_without_description_is_ignored() {
    let mut builder = ValidationErrorBuilder::create();
    builder.add_error(without_description("Email"));
    assert!(builder.is_empty());

    builder.add("Password", "Password is required");
    builder.add_error(without_description("Email"));
    builder.add_error(without_description("Password"));
    assert_eq!(builder.len(), 1);
    assert_eq!(descriptions(&builder, "Password"), ["Password is required"]);
}

#[test]
fn add_error_ignores_the_sentinel() {
    let mut builder = ValidationErrorBuilder::create();
    builder.add_error(Error::NONE);

    assert!(builder.to_outcome().is_success());
}

#[test]
fn add_error_preserves_order_without_dedup() {
    let mut builder = ValidationErrorBuilder::create();
    builder
        .add_error(Error::problem("Email", "Email is required"))
        .add_error(Error::problem("Email", "Email format is invalid"))
        .add_error(Error::problem("Email", "Email is required"));

    assert_eq!(builder.len(), 1);
    assert_eq!(
        descriptions(&builder, "Email"),
        ["Email is required", "Email format is invalid", "Email is required"]
    );
}

#[test]
fn add_error_uses_code_regardless_of_kind() {
    let mut builder = ValidationErrorBuilder::create();
    builder
        .add_error(Error::conflict("Email", "Email already exists"))
        .add_error(Error::not_found("Email", "Domain not found"));

    assert_eq!(descriptions(&builder, "Email"), ["Email already exists", "Domain not found"]);
}

#[test]
fn empty_code_is_a_distinct_key() {
    let mut builder = ValidationErrorBuilder::create();
    builder.add("", "form level failure").add("Name", "Name is required");

    assert_eq!(builder.len(), 2);
    assert_eq!(descriptions(&builder, ""), ["form level failure"]);
}

#[test]
fn empty_builder_yields_success_with_sentinel() {
    let outcome = ValidationErrorBuilder::create().to_outcome();

    assert!(outcome.is_success());
    assert_eq!(outcome.error(), &Error::NONE);
}

#[test]
fn non_empty_builder_yields_validation_failure() {
    let mut builder = ValidationErrorBuilder::create();
    builder.add("Email", "Email is required");

    let outcome = builder.to_outcome();
    assert!(outcome.is_failure());

    let error = outcome.error();
    assert_eq!(error.kind(), ErrorKind::Validation);
    assert_eq!(error.code(), "Error-Validation");
    assert_eq!(error.description(), Some("A validation error has occured."));
    assert_eq!(
        error.as_validation().unwrap().descriptions("Email").unwrap(),
        ["Email is required"]
    );
}

#[test]
fn to_outcome_is_repeatable_and_does_not_freeze() {
    let mut builder = ValidationErrorBuilder::create();
    builder.add("Email", "Email is required");

    let first = builder.to_outcome();
    let second = builder.to_outcome();
    assert_eq!(first.error(), second.error());

    builder.add("Email", "Email format is invalid");
    let third = builder.to_outcome();
    assert_ne!(first.error(), third.error());
    assert_eq!(first.error().as_validation().unwrap().descriptions("Email").unwrap().len(), 1);
}

#[test]
fn to_outcome_with_returns_value_on_success() {
    let builder = ValidationErrorBuilder::create();
    assert_eq!(builder.to_outcome_with("ada").into_value(), Some("ada"));

    let mut failing = ValidationErrorBuilder::create();
    failing.add("Name", "Name is required");
    assert!(failing.to_outcome_with("ada").is_failure());
}

#[test]
fn merge_scenario_combines_all_fields() {
    let mut a = ValidationErrorBuilder::create();
    a.add_error(Error::problem("Email", "Email is required"));
    a.add_error(Error::problem("Email", "Email format is invalid"));
    a.add_error(Error::problem("Password", "Password is required"));

    let mut b = ValidationErrorBuilder::create();
    b.add_error(Error::problem("Email", "Email already exists"));
    b.add_error(Error::problem("Username", "Username is required"));

    a.merge(&b);

    let error = a.to_outcome().into_error().unwrap();
    let validation = error.as_validation().unwrap();
    assert_eq!(validation.len(), 3);
    assert_eq!(
        validation.descriptions("Email").unwrap(),
        ["Email is required", "Email format is invalid", "Email already exists"]
    );
    assert_eq!(validation.descriptions("Password").unwrap(), ["Password is required"]);
    assert_eq!(validation.descriptions("Username").unwrap(), ["Username is required"]);

    // the merged-in builder is left untouched
    assert_eq!(b.len(), 2);
}

#[test]
fn merging_two_empty_builders_succeeds() {
    let mut a = ValidationErrorBuilder::create();
    let b = ValidationErrorBuilder::create();

    a.merge(&b);

    assert!(a.to_outcome().is_success());
}

#[test]
fn merging_empty_into_non_empty_is_a_no_op() {
    let mut a = ValidationErrorBuilder::create();
    a.add("Email", "Email is required");
    let before = a.clone();

    a.merge(&ValidationErrorBuilder::create());

    assert_eq!(a, before);
}

#[test]
fn merging_non_empty_into_empty_copies_everything() {
    let mut a = ValidationErrorBuilder::create();
    let mut b = ValidationErrorBuilder::create();
    b.add("Email", "Email is required").add("Name", "Name is required");

    a.merge(&b);

    assert_eq!(a, b);
}

#[test]
fn merge_appends_in_call_order() {
    let mut a = ValidationErrorBuilder::create();
    a.add("Email", "a1");
    let mut b = ValidationErrorBuilder::create();
    b.add("Email", "b1").add("Email", "b2");
    let mut c = ValidationErrorBuilder::create();
    c.add("Email", "c1");

    a.merge(&b).merge(&c);

    assert_eq!(descriptions(&a, "Email"), ["a1", "b1", "b2", "c1"]);
}

#[test]
fn merge_owned_matches_merge() {
    let mut b = ValidationErrorBuilder::create();
    b.add("Email", "b1").add("Name", "n1");

    let mut by_ref = ValidationErrorBuilder::create();
    by_ref.add("Email", "a1");
    let mut by_value = by_ref.clone();

    by_ref.merge(&b);
    by_value.merge_owned(b);

    assert_eq!(by_ref, by_value);
}

#[test]
fn merging_a_copy_of_itself_duplicates_entries() {
    let mut a = ValidationErrorBuilder::create();
    a.add("Email", "Email is required");
    let copy = a.clone();

    a.merge(&copy);

    assert_eq!(descriptions(&a, "Email"), ["Email is required", "Email is required"]);
}

#[test]
fn concurrent_passes_are_combined_by_one_owner() {
    let passes: Vec<_> = ["Email", "Name", "Phone"]
        .into_iter()
        .map(|field| {
            std::thread::spawn(move || {
                let mut builder = ValidationErrorBuilder::create();
                builder.add(field, "is required");
                builder
            })
        })
        .collect();

    let mut combined = ValidationErrorBuilder::create();
    for pass in passes {
        combined.merge_owned(pass.join().unwrap());
    }

    assert_eq!(combined.len(), 3);
}

#[test]
fn collect_and_extend_use_add_error_rules() {
    let mut builder: ValidationErrorBuilder = vec![
        Error::problem("Email", "Email is required"),
        without_description("Email"),
        Error::problem("Name", "Name is required"),
    ]
    .into_iter()
    .collect();
    assert_eq!(builder.len(), 2);

    builder.extend([Error::problem("Name", "Name is too short")]);
    assert_eq!(descriptions(&builder, "Name"), ["Name is required", "Name is too short"]);
}

#[test]
fn into_errors_hands_over_the_map() {
    let mut builder = ValidationErrorBuilder::create();
    builder.add("Email", "Email is required");

    let errors = builder.into_errors();
    let validation = ValidationError::from_errors(errors);
    assert_eq!(validation.descriptions("Email").unwrap(), ["Email is required"]);
}
