/// EventLink - Event Networking Core
///
/// The domain core of an event-networking app: attendee profiles with
/// attendance badges, a contact-request ledger, lazily-created direct-message
/// threads, per-interest chat channels, and the view state of the shell.
/// Everything is in-memory and mutated synchronously by user actions.

pub mod error;
pub mod config;
pub mod types;
pub mod badge;
pub mod directory;
pub mod ledger;
pub mod chats;
pub mod channels;
pub mod schedule;
pub mod profile;
pub mod qr;
pub mod view;
pub mod session;
pub mod cli_app;

pub use error::{EventError, Result};
pub use config::Config;
pub use session::Session;
