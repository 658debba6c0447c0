//! Homework Bot - review status notifications for Telegram.

use anyhow::Context;
use homework_bot::api::PracticumClient;
use homework_bot::notify::{NotificationDispatcher, TelegramNotifier};
use homework_bot::{App, Config, Credentials};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_bot=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .init();

    let credentials = Credentials::from_env().context("refusing to start")?;
    let config = Config::load_or_default().context("failed to load configuration")?;

    let source = PracticumClient::builder()
        .config(config.api.clone())
        .token(credentials.practicum_token.clone())
        .build()?;
    let notifier = TelegramNotifier::new(&config.bot, credentials.telegram_token.clone())?;
    let dispatcher = NotificationDispatcher::new(notifier, credentials.chat_id.clone());

    let mut app = App::new(
        source,
        dispatcher,
        config.poll.retry_period(),
        chrono::Utc::now().timestamp(),
    );
    app.run().await;

    Ok(())
}
