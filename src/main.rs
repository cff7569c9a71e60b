use std::sync::Arc;

use dotenv::dotenv;
use history_quiz_bot::{
    bot::{self, resources::AssetDir, SessionStorage},
    config::Config,
};
use teloxide::{
    dispatching::dialogue::{serializer::Json, SqliteStorage, Storage},
    prelude::*,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // .env is optional; the variables may come from the environment
    dotenv().ok();
    pretty_env_logger::init();
    log::info!("Starting history quiz bot...");

    let config = Config::from_env()?;
    let bot = Bot::new(config.token.clone());

    log::info!("Opening dialogue storage at {}", config.db_path);
    let storage: SessionStorage = SqliteStorage::<Json>::open(&config.db_path, Json)
        .await?
        .erase();

    let assets = Arc::new(AssetDir::new(config.assets_dir.clone()));
    log::info!("Serving pictures from {}", assets.root().display());

    Dispatcher::builder(bot, bot::schema())
        .dependencies(dptree::deps![storage, assets])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
