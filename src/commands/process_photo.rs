use crate::apis::{fal, storage};
use crate::commands::{CommandError, CommandResult};
use crate::utilities::command_context::CommandContext;
use crate::utilities::presets::Mode;
use crate::utilities::telegram_utils;

pub async fn execute(context: &CommandContext) -> CommandResult {
    let attachment = telegram_utils::get_message_attachment(&context.message)
        .ok_or(CommandError::Input("Пришлите фото товара — изображением или файлом."))?;

    let mode = context.bot_state.sessions.mode(context.chat_id).unwrap_or_default();
    let preset = mode.preset();

    context.reply("📤 Фото получено. Загружаю в облако...").await?;

    let content = context.bot_state.telegram.download_file(attachment.file_id()).await?;
    let suffix = storage::suffix_for_mime(attachment.mime_type());
    let source_url = storage::upload(
        &context.bot_state.http_client,
        &context.bot_state.config.storage,
        content,
        suffix,
    )
    .await?;

    log::debug!("source image for chat {} stored as {source_url}", context.chat_id);

    context.reply("🧠 Генерирую через Fal.ai...").await?;
    context.send_upload_photo_action().await?;

    let images = fal::generate(
        &context.bot_state.http_client,
        &context.bot_state.config.fal,
        &source_url,
        preset,
    )
    .await?;

    log::info!("generated {} image(s) for chat {} in {mode:?}", images.len(), context.chat_id);

    if mode == Mode::TwelveShotSet && images.len() > 1 {
        let mut links = Vec::with_capacity(images.len());

        for url in &images {
            let link = storage::reupload(
                &context.bot_state.http_client,
                &context.bot_state.config.storage,
                url,
            )
            .await?;
            links.push(link);
        }

        context.reply(&links.join("\n")).await?;
    } else {
        let Some(url) = images.first() else {
            return Err(CommandError::EmptyResult);
        };

        let link = storage::reupload(
            &context.bot_state.http_client,
            &context.bot_state.config.storage,
            url,
        )
        .await?;

        context.reply_photo(&link).await?;
    }

    Ok(())
}
