use outcome_rail::traits::{OptionExt, ResultExt};
use outcome_rail::{Error, ErrorKind};

#[derive(Debug)]
struct StorageError;

impl From<StorageError> for Error {
    fn from(_: StorageError) -> Self {
        Error::service_unavailable("Storage.Down", "storage is unreachable")
    }
}

#[test]
fn into_outcome_uses_into_error() {
    let ok: Result<i32, StorageError> = Ok(1);
    assert_eq!(ok.into_outcome().into_value(), Some(1));

    let err: Result<i32, StorageError> = Err(StorageError);
    let outcome = err.into_outcome();
    assert_eq!(outcome.error().kind(), ErrorKind::ServiceUnavailable);
    assert_eq!(outcome.error().code(), "Storage.Down");
}

#[test]
fn or_problem_replaces_any_error() {
    let outcome = "abc".parse::<u32>().or_problem("Age", "Age must be a number");

    assert_eq!(outcome.error().kind(), ErrorKind::Problem);
    assert_eq!(outcome.error().description(), Some("Age must be a number"));
    assert_eq!("7".parse::<u32>().or_problem("Age", "unused").into_value(), Some(7));
}

#[test]
fn or_error_with_is_lazy() {
    let mut called = false;
    let outcome = Ok::<_, &str>(3).or_error_with(|_| {
        called = true;
        Error::NULL_VALUE
    });

    assert!(outcome.is_success());
    assert!(!called);

    let outcome = Err::<i32, _>("boom").or_error_with(|e| Error::internal_server_error("Boom", e));
    assert_eq!(outcome.error().description(), Some("boom"));
}

#[test]
fn option_into_outcome_uses_null_value() {
    assert_eq!(Some(1).into_outcome().into_value(), Some(1));
    assert_eq!(None::<i32>.into_outcome().error(), &Error::NULL_VALUE);
}

#[test]
fn option_or_error_uses_given_error() {
    let outcome = None::<i32>.or_error(Error::resource_gone("Link.Expired", "link expired"));

    assert_eq!(outcome.error().kind(), ErrorKind::ResourceGone);
    assert!(Some(2).or_error(Error::NULL_VALUE).is_success());
}
