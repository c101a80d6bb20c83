use std::fmt;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::utilities::config::TelegramConfig;

pub type TelegramResult<T> = Result<T, TelegramError>;

#[derive(Debug)]
pub enum TelegramError {
    Api { code: i64, description: String },
    Http(reqwest::Error),
}

impl fmt::Display for TelegramError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api { code, description } => write!(formatter, "{code}: {description}"),
            Self::Http(err) => err.fmt(formatter),
        }
    }
}

impl std::error::Error for TelegramError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api { .. } => None,
            Self::Http(err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for TelegramError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

#[derive(Debug, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    pub from: Option<User>,
    pub text: Option<String>,
    #[serde(default)]
    pub photo: Vec<PhotoSize>,
    pub document: Option<Document>,
    pub forward_origin: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub username: Option<String>,
    #[serde(default)]
    pub is_bot: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoSize {
    pub file_id: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub file_id: String,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct File {
    pub file_path: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,
    pub resize_keyboard: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyboardButton {
    pub text: &'static str,
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<&'a ReplyKeyboardMarkup>,
}

#[derive(Serialize)]
struct SendPhoto<'a> {
    chat_id: i64,
    photo: &'a str,
}

#[derive(Serialize)]
struct SendChatAction<'a> {
    chat_id: i64,
    action: &'a str,
}

#[derive(Serialize)]
struct GetFile<'a> {
    file_id: &'a str,
}

#[derive(Serialize)]
struct Empty {}

#[derive(Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    error_code: Option<i64>,
    description: Option<String>,
}

fn into_result<T>(response: ApiResponse<T>) -> TelegramResult<T> {
    if response.ok {
        response.result.ok_or_else(|| TelegramError::Api {
            code: 0,
            description: "ok response carries no result".into(),
        })
    } else {
        Err(TelegramError::Api {
            code: response.error_code.unwrap_or_default(),
            description: response.description.unwrap_or_else(|| "unknown error".into()),
        })
    }
}

#[derive(Clone)]
pub struct TelegramApi {
    http_client: reqwest::Client,
    api_url: String,
    token: String,
}

impl TelegramApi {
    pub fn new(http_client: reqwest::Client, config: &TelegramConfig) -> Self {
        Self { http_client, api_url: config.api_url.clone(), token: config.token.clone() }
    }

    async fn call<P: Serialize, T: DeserializeOwned>(
        &self,
        method: &str,
        payload: &P,
    ) -> TelegramResult<T> {
        let response = self
            .http_client
            .post(format!("{}/bot{}/{method}", self.api_url, self.token))
            .json(payload)
            .send()
            .await?
            .json::<ApiResponse<T>>()
            .await?;

        into_result(response)
    }

    pub async fn get_me(&self) -> TelegramResult<User> {
        self.call("getMe", &Empty {}).await
    }

    pub async fn send_message(&self, chat_id: i64, text: &str) -> TelegramResult<Message> {
        self.call("sendMessage", &SendMessage { chat_id, text, reply_markup: None }).await
    }

    pub async fn send_message_with_keyboard(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: &ReplyKeyboardMarkup,
    ) -> TelegramResult<Message> {
        self.call("sendMessage", &SendMessage { chat_id, text, reply_markup: Some(keyboard) })
            .await
    }

    pub async fn send_photo(&self, chat_id: i64, photo_url: &str) -> TelegramResult<Message> {
        self.call("sendPhoto", &SendPhoto { chat_id, photo: photo_url }).await
    }

    pub async fn send_chat_action(&self, chat_id: i64, action: &str) -> TelegramResult<bool> {
        self.call("sendChatAction", &SendChatAction { chat_id, action }).await
    }

    /// Resolves a file identifier and downloads its content through the Bot
    /// API file endpoint.
    pub async fn download_file(&self, file_id: &str) -> TelegramResult<Bytes> {
        let file: File = self.call("getFile", &GetFile { file_id }).await?;
        let file_path = file.file_path.ok_or_else(|| TelegramError::Api {
            code: 0,
            description: "getFile response carries no file_path".into(),
        })?;

        let response = self
            .http_client
            .get(format!("{}/file/bot{}/{file_path}", self.api_url, self.token))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.bytes().await?)
    }
}
