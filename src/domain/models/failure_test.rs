use super::RequestFailure;
use super::DEFAULT_FAILURE_MESSAGE;

#[test]
fn it_falls_back_on_empty_body() {
    assert_eq!(RequestFailure::new("").message, DEFAULT_FAILURE_MESSAGE);
}

#[test]
fn it_keeps_whitespace_body() {
    assert_eq!(RequestFailure::new(" \n").message, " \n");
}

#[test]
fn it_keeps_body_text() {
    assert_eq!(
        RequestFailure::new("Recipe not found.").to_string(),
        "Recipe not found."
    );
}
