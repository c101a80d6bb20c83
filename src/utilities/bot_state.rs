use std::sync::OnceLock;
use std::time::Duration;

use super::config::Config;
use super::sessions::Sessions;
use crate::apis::telegram::TelegramApi;

pub struct BotState {
    pub config: Config,
    pub http_client: reqwest::Client,
    pub telegram: TelegramApi,
    pub sessions: Sessions,
    bot_username: OnceLock<String>,
}

impl BotState {
    pub fn new(config: Config) -> Self {
        // the generation call is synchronous and can take minutes
        let http_client =
            reqwest::Client::builder().timeout(Duration::from_secs(300)).build().unwrap();

        let telegram = TelegramApi::new(http_client.clone(), &config.telegram);

        Self {
            config,
            http_client,
            telegram,
            sessions: Sessions::default(),
            bot_username: OnceLock::new(),
        }
    }

    pub fn set_bot_username(&self, username: String) {
        self.bot_username.set(username).ok();
    }

    pub fn bot_username(&self) -> Option<&str> {
        self.bot_username.get().map(String::as_str)
    }
}
