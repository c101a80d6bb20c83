use std::sync::Arc;

use super::bot_state::BotState;
use crate::apis::telegram::{Message, ReplyKeyboardMarkup, TelegramResult};

pub struct CommandContext {
    pub chat_id: i64,
    pub message: Message,
    pub bot_state: Arc<BotState>,
}

impl CommandContext {
    pub async fn reply(&self, text: &str) -> TelegramResult<Message> {
        self.bot_state.telegram.send_message(self.chat_id, text).await
    }

    pub async fn reply_with_keyboard(
        &self,
        text: &str,
        keyboard: &ReplyKeyboardMarkup,
    ) -> TelegramResult<Message> {
        self.bot_state.telegram.send_message_with_keyboard(self.chat_id, text, keyboard).await
    }

    pub async fn reply_photo(&self, photo_url: &str) -> TelegramResult<Message> {
        self.bot_state.telegram.send_photo(self.chat_id, photo_url).await
    }

    pub async fn send_upload_photo_action(&self) -> TelegramResult<bool> {
        self.bot_state.telegram.send_chat_action(self.chat_id, "upload_photo").await
    }
}
