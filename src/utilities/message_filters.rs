use super::parsed_command::ParsedCommand;
use super::presets::Mode;
use crate::apis::telegram::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageDestination {
    Start,
    SelectMode(Mode),
    ProcessPhoto,
}

pub fn message_destination(
    message: &Message,
    bot_username: Option<&str>,
) -> Option<MessageDestination> {
    if message.forward_origin.is_some() {
        return None; // ignore forwarded messages
    }

    if message.from.as_ref().is_some_and(|user| user.is_bot) {
        return None; // ignore other bots
    }

    if let Some(text) = message.text.as_deref() {
        let text = text.trim();

        if let Some(command) = ParsedCommand::parse(text) {
            if !command.addressed_to(bot_username) {
                return None; // command meant for another bot
            }

            return (command.name == "start").then_some(MessageDestination::Start);
        }

        if let Some(mode) = Mode::from_menu_label(text) {
            return Some(MessageDestination::SelectMode(mode));
        }

        return None; // free-form text, nothing to do
    }

    if !message.photo.is_empty() || message.document.is_some() {
        return Some(MessageDestination::ProcessPhoto);
    }

    None // stickers, voice messages and the like
}
