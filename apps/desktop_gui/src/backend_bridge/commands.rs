//! Backend commands queued from UI to backend worker.

use shared::{domain::RequestId, protocol::ProductRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    LookupProduct {
        request_id: RequestId,
        request: ProductRequest,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::LookupProduct { .. } => "lookup_product",
        }
    }
}
