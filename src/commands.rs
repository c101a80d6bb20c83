use std::borrow::Cow;

use reqwest::StatusCode;

use crate::apis::telegram::TelegramError;

pub mod process_photo;
pub mod select_mode;
pub mod start;

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug)]
pub enum CommandError {
    /// An image was expected but the message carried nothing usable. The text
    /// is shown to the user as-is.
    Input(&'static str),
    /// Non-2xx response from the storage backend.
    Storage { status: StatusCode, body: String },
    /// Non-2xx response from the generation API.
    Upstream { status: StatusCode, body: String },
    /// The generation API answered 2xx but no image URL could be recovered.
    EmptyResult,
    Telegram(TelegramError),
    Reqwest(reqwest::Error),
    Custom(Cow<'static, str>),
}

impl From<TelegramError> for CommandError {
    fn from(err: TelegramError) -> Self {
        Self::Telegram(err)
    }
}

impl From<reqwest::Error> for CommandError {
    fn from(err: reqwest::Error) -> Self {
        Self::Reqwest(err)
    }
}

impl From<&'static str> for CommandError {
    fn from(text: &'static str) -> Self {
        Self::Custom(Cow::Borrowed(text))
    }
}

impl From<String> for CommandError {
    fn from(text: String) -> Self {
        Self::Custom(Cow::Owned(text))
    }
}
