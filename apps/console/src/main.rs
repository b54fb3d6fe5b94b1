use anyhow::Result;
use clap::{Parser, Subcommand};
use client_core::{build_search_request, BackendClient};
use shared::{domain::KeywordSource, protocol::EchoRequest};

const ECHO_GREETING: &str = "Hello from the console!";

#[derive(Parser, Debug)]
#[command(about = "Command-line smoke checks against the keyword-search backend")]
struct Args {
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    server_url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Greeting round-trip against /api/hello.
    Hello,
    /// Post a synthesized payload to /api/echo and print what came back.
    Echo,
    /// Run a keyword search; uses the spreadsheet keyword unless --keyword is given.
    Search {
        #[arg(long)]
        keyword: Option<String>,
    },
    /// Backend liveness via /health.
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();
    let client = BackendClient::new(args.server_url);

    match args.command {
        Command::Hello => {
            let body = client.hello().await?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Command::Echo => {
            let request = EchoRequest::synthesized(ECHO_GREETING);
            tracing::info!(random_number = request.random_number, "posting echo payload");
            let body = client.echo(&request).await?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Command::Search { keyword } => {
            let source = if keyword.is_some() {
                KeywordSource::Custom
            } else {
                KeywordSource::Sheet
            };
            let request = build_search_request(source, keyword.as_deref().unwrap_or(""))?;
            tracing::info!("searching with the {}", source.label());
            let outcome = client.search_keyword(&request).await?;
            println!("{}", outcome.message);
            println!("{}", serde_json::to_string_pretty(&outcome.results)?);
        }
        Command::Health => {
            let body = client.health().await?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
    }

    Ok(())
}
