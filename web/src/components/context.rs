use yewdux::prelude::*;

pub const ERROR_TITLE: &str = "Error";
pub const PASSWORD_MISMATCH_TITLE: &str = "Passwords don't match!";
pub const PASSWORD_MISMATCH_TEXT: &str = "Please ensure both passwords match.";

/// Content of the blocking modal shown by `ErrorDialog`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dialog {
    pub title: String,
    pub text: String,
}

impl Dialog {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            title: ERROR_TITLE.to_string(),
            text: text.into(),
        }
    }

    pub fn password_mismatch() -> Self {
        Self {
            title: PASSWORD_MISMATCH_TITLE.to_string(),
            text: PASSWORD_MISMATCH_TEXT.to_string(),
        }
    }
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub dialog: Option<Dialog>,
}
