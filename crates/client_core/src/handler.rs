//! Product lookup controller: validates input, tracks the busy flag, and turns a
//! request outcome into view state and user notifications.
//!
//! The lookup is split into two phases so callers decide how the request travels:
//! [`RequestHandler::submit`] validates and marks the view busy, and
//! [`RequestHandler::on_complete`] applies whatever the transport produced.
//! [`RequestHandler::run`] strings both together over a [`ProductTransport`].

use std::collections::HashMap;

use shared::{
    domain::{ProductName, RequestId},
    protocol::{ProductRequest, ProductResult},
};
use tracing::{debug, error, info, warn};

use crate::{error::RequestError, transport::ProductTransport};

pub const EMPTY_INPUT_NOTICE: &str = "Please enter a product value first.";
pub const SUCCESS_NOTICE: &str = "API call successful.";
pub const FAILURE_HEADLINE: &str = "Failed to call the backend API.";

/// Presentation channels the handler reports through.
pub trait Notifier {
    /// Short-lived, non-blocking message.
    fn toast(&mut self, message: &str);
    /// Modal error the user has to dismiss.
    fn error_dialog(&mut self, message: &str);
}

/// State bound to the view. Only [`RequestHandler`] mutates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    product_input: String,
    api_result: Option<ProductResult>,
    is_busy: bool,
}

impl ViewState {
    /// Last product value that produced a successful response.
    pub fn product_input(&self) -> &str {
        &self.product_input
    }

    pub fn api_result(&self) -> Option<&ProductResult> {
        self.api_result.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.is_busy
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Input was blank; nothing was sent and the view is unchanged.
    Rejected,
    Dispatched {
        request_id: RequestId,
        request: ProductRequest,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Rejected,
    Succeeded,
    Failed { message: String },
    /// Completion for a request this handler never dispatched, or already completed.
    Unknown,
}

#[derive(Debug)]
pub struct RequestHandler {
    next_id: RequestId,
    in_flight: HashMap<RequestId, ProductName>,
}

impl Default for RequestHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestHandler {
    pub fn new() -> Self {
        Self {
            next_id: RequestId::FIRST,
            in_flight: HashMap::new(),
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_pending(&self, request_id: RequestId) -> bool {
        self.in_flight.contains_key(&request_id)
    }

    pub fn submit(
        &mut self,
        state: &mut ViewState,
        raw_input: &str,
        notifier: &mut impl Notifier,
    ) -> Submission {
        let Some(product) = ProductName::parse(raw_input) else {
            notifier.toast(EMPTY_INPUT_NOTICE);
            return Submission::Rejected;
        };

        let request_id = self.next_id;
        self.next_id = request_id.next();

        let request = ProductRequest::new(&product);
        debug!(%request_id, %product, "dispatching product lookup");
        self.in_flight.insert(request_id, product);
        state.is_busy = true;

        Submission::Dispatched {
            request_id,
            request,
        }
    }

    pub fn on_complete(
        &mut self,
        state: &mut ViewState,
        request_id: RequestId,
        outcome: Result<ProductResult, RequestError>,
        notifier: &mut impl Notifier,
    ) -> Completion {
        let Some(product) = self.in_flight.remove(&request_id) else {
            warn!(%request_id, "ignoring completion for unknown product lookup");
            return Completion::Unknown;
        };

        let completion = match outcome {
            Ok(result) => {
                info!(%request_id, %product, response = %result, "backend API response");
                state.product_input = product.into_inner();
                state.api_result = Some(result);
                notifier.toast(SUCCESS_NOTICE);
                Completion::Succeeded
            }
            Err(err) => {
                error!(%request_id, %product, status = ?err.status(), "backend API error: {err}");
                let message = format!("{FAILURE_HEADLINE}\n{err}");
                notifier.error_dialog(&message);
                Completion::Failed { message }
            }
        };

        state.is_busy = false;
        completion
    }

    /// Submits `raw_input`, awaits `transport`, and applies the outcome.
    pub async fn run<T>(
        &mut self,
        state: &mut ViewState,
        raw_input: &str,
        transport: &T,
        notifier: &mut impl Notifier,
    ) -> Completion
    where
        T: ProductTransport + ?Sized,
    {
        match self.submit(state, raw_input, notifier) {
            Submission::Rejected => Completion::Rejected,
            Submission::Dispatched {
                request_id,
                request,
            } => {
                let outcome = transport.post_product(&request).await;
                self.on_complete(state, request_id, outcome, notifier)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/handler_tests.rs"]
mod tests;
