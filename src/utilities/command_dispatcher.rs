use std::error::Error;
use std::sync::Arc;

use super::bot_state::BotState;
use super::command_context::CommandContext;
use super::message_filters::{self, MessageDestination};
use crate::apis::telegram::{Message, TelegramResult};
use crate::commands::{self, CommandError};

pub async fn dispatch_message(bot_state: Arc<BotState>, message: Message) {
    let Some(destination) =
        message_filters::message_destination(&message, bot_state.bot_username())
    else {
        log::debug!("ignoring message {} in chat {}", message.message_id, message.chat.id);
        return;
    };

    let chat_id = message.chat.id;
    let context = CommandContext { chat_id, message, bot_state };

    log::info!("running {destination:?} in chat {chat_id}");

    let result = match destination {
        MessageDestination::Start => commands::start::execute(&context).await,
        MessageDestination::SelectMode(mode) => {
            commands::select_mode::execute(&context, mode).await
        }
        MessageDestination::ProcessPhoto => commands::process_photo::execute(&context).await,
    };

    if let Err(err) = result {
        if let Err(err) = report_command_error(&context, err).await {
            log::error!("Telegram error occurred while reporting the previous error: {err}");
        }
    }
}

async fn report_command_error(
    context: &CommandContext,
    error: CommandError,
) -> TelegramResult<()> {
    match error {
        CommandError::Input(text) => context.reply(text).await?,
        CommandError::Storage { status, body } => {
            log::warn!("storage upload failed in chat {}: {status}: {body}", context.chat_id);
            context
                .reply(&format!("⚠️ Не удалось загрузить файл в хранилище ({status})."))
                .await?
        }
        CommandError::Upstream { status, body } => {
            log::warn!("generation failed in chat {}: {status}: {body}", context.chat_id);
            context
                .reply(&format!("⚠️ Fal.ai вернул ошибку ({status}). Попробуйте ещё раз."))
                .await?
        }
        CommandError::EmptyResult => {
            log::warn!("generation returned no images in chat {}", context.chat_id);
            context
                .reply("⚠️ Генерация не вернула ни одного изображения. Попробуйте другое фото.")
                .await?
        }
        CommandError::Telegram(err) => {
            log::error!("Telegram error in chat {}: {err}", context.chat_id);
            context.reply("⚠️ Не получилось обработать сообщение. Попробуйте ещё раз.").await?
        }
        CommandError::Reqwest(err) => {
            let err = err.without_url();
            let text =
                err.source().map_or_else(|| err.to_string(), |source| format!("{err}: {source}"));

            log::warn!("HTTP error in chat {}: {text}", context.chat_id);
            context.reply("⚠️ Сетевая ошибка. Попробуйте ещё раз.").await?
        }
        CommandError::Custom(text) => context.reply(&text).await?,
    };

    Ok(())
}
