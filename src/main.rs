mod app;
mod config;
mod dispatch;
mod error;
mod quote;
#[cfg(test)]
mod test_support;
mod twilio;
mod types;

use log::info;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env may carry RUST_LOG, so load it before the logger.
    config::load_dotenv()?;
    pretty_env_logger::init_timed();

    let config = Config::from_env()?;
    info!("Quote source: {}", config.quote.url);
    info!("Twilio API: {}", config.twilio.api_url);
    info!("Recipients: {}", config.recipients.len());

    let outcome = app::run(&config).await?;

    // Per-recipient failures never change the exit status once sending has
    // started; the summary line is the report.
    println!("{}", outcome);

    Ok(())
}
