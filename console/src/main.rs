use application::service::RegisterAccountService;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::error::StackTrace;
use crate::handler::AppModule;

mod error;
mod handler;
mod menu;
mod prompt;

#[tokio::main]
async fn main() -> Result<(), StackTrace> {
    // Menus own stdout, so logs go to a rolling file only.
    let appender = tracing_appender::rolling::daily(std::path::Path::new("./logs/"), "debug.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    std::env::var("RUST_LOG").unwrap_or_else(|_| {
                        "console=debug,application=debug,driver=debug,sqlx=warn".into()
                    }),
                )),
        )
        .init();

    let app = AppModule::new().await?;
    app.database().bootstrap_admin().await?;

    println!("Starting the program...");
    menu::run(&app).await?;
    println!("Exiting program...");
    Ok(())
}
