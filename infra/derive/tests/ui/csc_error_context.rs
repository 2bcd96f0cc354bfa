use csc_derive::csc_error;
use std::borrow::Cow;

#[csc_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err(std::io::Error::other("disk gone")).context("Reading payload")
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.to_string(), "IO error (Reading payload): disk gone");

    let plain: Result<(), DemoError> = Err(std::io::Error::other("boom").into());
    let err = plain.context("Late context").unwrap_err();
    assert_eq!(err.to_string(), "IO error (Late context): boom");
}
