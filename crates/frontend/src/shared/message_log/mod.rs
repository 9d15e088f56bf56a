//! On-page message log
//!
//! - model.rs: entries and the newest-first log
//! - view.rs: `<ul id="message-history">` rendering

mod model;
mod view;

pub use model::{LogEntry, LogMessage, MessageLog, Severity};
pub use view::{provide_message_log, use_message_log, MessageHistory};
