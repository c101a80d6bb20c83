use std::process;

use lookbook_bot::bot::Bot;
use lookbook_bot::utilities::config::Config;
use lookbook_bot::utilities::logchamp;

#[tokio::main]
async fn main() {
    logchamp::init();
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            process::exit(1);
        }
    };

    if let Err(err) = Bot::new(config).run().await {
        log::error!("{err}");
        process::exit(1);
    }
}
