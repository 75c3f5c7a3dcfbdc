use anyhow::{bail, Result};
use clap::Parser;
use client_core::{load_settings, Completion, Notifier, ProductClient, RequestHandler, ViewState};
use tracing_subscriber::EnvFilter;

/// Looks up one product against the products backend and prints the response.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    product: String,
    /// Overrides `products_url` from client.toml and the environment.
    #[arg(long)]
    endpoint: Option<String>,
}

struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn toast(&mut self, message: &str) {
        println!("{message}");
    }

    fn error_dialog(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings();
    if let Some(endpoint) = args.endpoint {
        settings.products_url = endpoint;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .with_writer(std::io::stderr)
        .init();
    settings.validate()?;

    let client = ProductClient::new(settings.products_url);
    let mut handler = RequestHandler::new();
    let mut state = ViewState::default();

    let completion = handler
        .run(&mut state, &args.product, &client, &mut ConsoleNotifier)
        .await;
    let result = finish(completion, &state, &args.product)?;
    if let Some(result) = result {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(())
}

/// Turns the lookup outcome into the process result, logging either way.
fn finish(
    completion: Completion,
    state: &ViewState,
    raw_product: &str,
) -> Result<Option<serde_json::Value>> {
    let product = raw_product.trim();
    match completion {
        Completion::Succeeded => {
            tracing::info!(product, "product lookup finished");
            Ok(state.api_result().cloned())
        }
        Completion::Rejected => {
            tracing::error!("no product given");
            bail!("no product given")
        }
        Completion::Failed { message } => {
            tracing::error!(product, "product lookup failed: {message}");
            bail!("product lookup for '{product}' failed")
        }
        Completion::Unknown => {
            tracing::error!(product, "lookup completed without a matching request");
            bail!("lookup completed without a matching request")
        }
    }
}
