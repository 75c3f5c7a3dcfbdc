//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues `cmd` for the backend worker. The error is user-facing text.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), String> {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => Err("UI command queue is full; please retry".to_string()),
        Err(TrySendError::Disconnected(_)) => Err(
            "Backend command processor disconnected (possible startup/runtime failure)"
                .to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;
    use shared::{domain::RequestId, protocol::ProductRequest};

    use super::*;

    fn lookup(id: u64) -> BackendCommand {
        BackendCommand::LookupProduct {
            request_id: RequestId(id),
            request: ProductRequest {
                product: "shoes".into(),
            },
        }
    }

    #[test]
    fn queues_command_when_there_is_room() {
        let (tx, rx) = bounded(1);
        dispatch_backend_command(&tx, lookup(1)).expect("queued");
        assert_eq!(rx.try_recv().expect("command"), lookup(1));
    }

    #[test]
    fn full_queue_is_reported() {
        let (tx, _rx) = bounded(1);
        dispatch_backend_command(&tx, lookup(1)).expect("queued");
        let err = dispatch_backend_command(&tx, lookup(2)).expect_err("full");
        assert!(err.contains("queue is full"));
    }

    #[test]
    fn disconnected_worker_is_reported() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let err = dispatch_backend_command(&tx, lookup(1)).expect_err("disconnected");
        assert!(err.contains("disconnected"));
    }
}
