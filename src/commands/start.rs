use crate::apis::telegram::{KeyboardButton, ReplyKeyboardMarkup};
use crate::commands::CommandResult;
use crate::utilities::command_context::CommandContext;
use crate::utilities::presets::Mode;

const GREETING: &str = "Привет! Я делаю товарные фото одежды для маркетплейсов.\n\
                        Выберите режим и отправьте фото товара.";

pub async fn execute(context: &CommandContext) -> CommandResult {
    context.bot_state.sessions.reset(context.chat_id);
    context.reply_with_keyboard(GREETING, &main_menu()).await?;

    Ok(())
}

pub fn main_menu() -> ReplyKeyboardMarkup {
    ReplyKeyboardMarkup {
        keyboard: Mode::ALL
            .into_iter()
            .map(|mode| vec![KeyboardButton { text: mode.menu_label() }])
            .collect(),
        resize_keyboard: true,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn menu_has_a_row_per_mode() {
        let menu = main_menu();

        assert_eq!(menu.keyboard.len(), Mode::ALL.len());

        for (row, mode) in menu.keyboard.iter().zip(Mode::ALL) {
            assert_eq!(row.len(), 1);
            assert_eq!(row[0].text, mode.menu_label());
        }
    }
}
