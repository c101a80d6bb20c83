use crate::commands::CommandResult;
use crate::utilities::command_context::CommandContext;
use crate::utilities::presets::Mode;

pub async fn execute(context: &CommandContext, mode: Mode) -> CommandResult {
    context.bot_state.sessions.set_mode(context.chat_id, mode);
    context.reply(mode.instruction()).await?;

    Ok(())
}
