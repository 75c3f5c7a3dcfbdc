//! UI layer for desktop GUI: app shell and notification presentation.

pub mod app;
pub mod notifications;

pub use app::ProductLookupApp;
