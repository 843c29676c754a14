use clap::Parser;
use gowon_lastfm::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::parse();

    gowon_lastfm::run(config).await
}
