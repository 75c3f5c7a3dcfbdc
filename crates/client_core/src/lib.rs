pub mod config;
pub mod error;
pub mod handler;
pub mod transport;

pub use config::{load_settings, Settings};
pub use error::{HttpFailure, RequestError};
pub use handler::{Completion, Notifier, RequestHandler, Submission, ViewState};
pub use transport::{ProductClient, ProductTransport};
