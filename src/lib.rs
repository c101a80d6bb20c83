pub mod apis;
pub mod bot;
pub mod commands;
pub mod utilities;
