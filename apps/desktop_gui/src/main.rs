mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::load_settings;
use crossbeam_channel::bounded;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::ui::ProductLookupApp;

#[derive(Parser, Debug)]
struct Args {
    /// Overrides `products_url` from client.toml and the environment.
    #[arg(long)]
    endpoint: Option<String>,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    let mut settings = load_settings();
    if let Some(endpoint) = args.endpoint {
        settings.products_url = endpoint;
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    match settings.validate() {
        Ok(()) => backend_bridge::runtime::launch(cmd_rx, ui_tx, settings.products_url),
        Err(err) => {
            // Lookups fail as disconnected once the receiver is gone.
            drop(cmd_rx);
            tracing::error!("refusing to start backend worker: {err}");
            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                UiErrorContext::Configuration,
                err.to_string(),
            )));
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Product Lookup")
            .with_inner_size([720.0, 520.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Product Lookup",
        options,
        Box::new(|_cc| Ok(Box::new(ProductLookupApp::new(cmd_tx, ui_rx)))),
    )
}
