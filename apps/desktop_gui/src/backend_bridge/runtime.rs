//! Backend worker: owns the tokio runtime and the HTTP client, reports completions
//! back to the UI thread.

use std::{sync::Arc, thread};

use client_core::{ProductClient, ProductTransport, RequestError};
use crossbeam_channel::{Receiver, Sender};
use shared::{domain::RequestId, protocol::ProductResult};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, products_url: String) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = Arc::new(ProductClient::new(products_url));
            let _ = ui_tx.try_send(UiEvent::Info(format!(
                "Backend worker ready ({})",
                client.products_url()
            )));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::LookupProduct {
                        request_id,
                        request,
                    } => {
                        let client = Arc::clone(&client);
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            let outcome = client.post_product(&request).await;
                            report_completion(&ui_tx, request_id, outcome);
                        });
                    }
                }
            }
            tracing::debug!("ui command channel closed; backend worker exiting");
        });
    });
}

/// Hands a finished lookup to the UI thread. Returns false once the UI is gone.
fn report_completion(
    ui_tx: &Sender<UiEvent>,
    request_id: RequestId,
    outcome: Result<ProductResult, RequestError>,
) -> bool {
    // Blocking `send`, not `try_send`: a dropped completion would leave the view busy
    // forever. The UI drains the queue every frame, so a full queue only stalls briefly.
    let delivered = ui_tx
        .send(UiEvent::ProductLookupCompleted {
            request_id,
            outcome,
        })
        .is_ok();
    if !delivered {
        tracing::warn!(%request_id, "ui event channel closed; dropping lookup result");
    }
    delivered
}
