use dioxus::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docdrop::{ui, Config, Uploader};

fn main() {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("docdrop");
    std::fs::create_dir_all(&log_dir).ok();
    let file_appender = tracing_appender::rolling::never(log_dir, "docdrop.log");
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(file_appender))
        .init();

    let config = Config::from_env();
    tracing::info!("webhook endpoint: {}", config.webhook_url);

    match Uploader::new(&config) {
        Ok(uploader) => {
            LaunchBuilder::new().with_context(uploader).launch(ui::app::App);
        }
        Err(e) => {
            LaunchBuilder::new()
                .with_context(ui::app::SetupError(e.to_string()))
                .launch(ui::app::SetupErrorApp);
        }
    }
}
