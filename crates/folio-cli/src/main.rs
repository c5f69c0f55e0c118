use anyhow::Result;
use clap::Parser;

use folio::client::AssistantClient;
use folio::config::{ClientConfig, DEFAULT_MAX_SPEAK_WORDS};

mod render;
mod session;

use session::Session;

#[derive(Parser)]
#[command(name = "folio", version, about = "Ask questions about your investment portfolio", long_about = None)]
struct Cli {
    /// Assistant API base URL (can also be set via FOLIO_API_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Account to query (can also be set via FOLIO_ACCOUNT_ID)
    #[arg(long)]
    account_id: Option<i64>,

    /// Word budget for the speakable summary
    #[arg(long, default_value_t = DEFAULT_MAX_SPEAK_WORDS)]
    max_speak_words: u32,

    /// Ask a single question and exit instead of starting a session
    #[arg(short, long)]
    ask: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(account_id) = cli.account_id {
        config.account_id = account_id;
    }

    let client = AssistantClient::new(config)?;
    let mut session = Session::new(client, cli.max_speak_words);

    match cli.ask {
        Some(query) => session.ask_once(&query).await,
        None => session.start().await,
    }
}
