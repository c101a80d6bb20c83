pub mod bot_state;
pub mod command_context;
pub mod command_dispatcher;
pub mod config;
pub mod logchamp;
pub mod message_filters;
pub mod parsed_command;
pub mod presets;
pub mod sessions;
pub mod telegram_utils;
pub mod text_utils;

#[cfg(test)]
pub mod test_fixtures;
