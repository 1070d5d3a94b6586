use outcome_rail::validation::ValidationErrorBuilder;

#[test]
fn iter_yields_entries_ordered_by_code() {
    let mut builder = ValidationErrorBuilder::create();
    builder
        .add("Username", "Username is required")
        .add("Email", "Email is required")
        .add("Email", "Email format is invalid");

    let codes: Vec<&str> = builder.iter().map(|(code, _)| code).collect();
    assert_eq!(codes, ["Email", "Username"]);

    let (_, email) = builder.iter().next().unwrap();
    assert_eq!(email, ["Email is required", "Email format is invalid"]);
}

#[test]
fn iter_reports_exact_size_and_reverses() {
    let mut builder = ValidationErrorBuilder::create();
    builder.add("A", "a").add("B", "b").add("C", "c");

    let iter = builder.iter();
    assert_eq!(iter.len(), 3);

    let reversed: Vec<&str> = builder.iter().rev().map(|(code, _)| code).collect();
    assert_eq!(reversed, ["C", "B", "A"]);
}

#[test]
fn borrowed_builder_is_iterable() {
    let mut builder = ValidationErrorBuilder::create();
    builder.add("Name", "Name is required");

    let mut count = 0;
    for (code, descriptions) in &builder {
        assert_eq!(code, "Name");
        assert_eq!(descriptions.len(), 1);
        count += 1;
    }
    assert_eq!(count, 1);
}

#[test]
fn empty_builder_iterates_nothing() {
    let builder = ValidationErrorBuilder::create();
    assert!(builder.iter().next().is_none());
}
