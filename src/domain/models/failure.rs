#[cfg(test)]
#[path = "failure_test.rs"]
mod tests;

use thiserror::Error;

pub const DEFAULT_FAILURE_MESSAGE: &str = "Request failed";

/// The only error a remote call surfaces. The message is the response body
/// text as sent by the server, or a generic fallback when it is empty.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestFailure {
    pub message: String,
}

impl RequestFailure {
    pub fn new(message: &str) -> RequestFailure {
        if message.is_empty() {
            return RequestFailure {
                message: DEFAULT_FAILURE_MESSAGE.to_string(),
            };
        }

        return RequestFailure {
            message: message.to_string(),
        };
    }
}

impl From<reqwest::Error> for RequestFailure {
    fn from(err: reqwest::Error) -> RequestFailure {
        return RequestFailure::new(&err.to_string());
    }
}

/// Local checks that short-circuit before any request is made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter your OpenAI API key.")]
    MissingCredential,
    #[error("Ask a question first.")]
    MissingPrompt,
    #[error("Title is required.")]
    MissingTitle,
    #[error("KitchenPal is still answering.")]
    AskInProgress,
}
