pub mod api_utils;
pub mod config;
pub mod csrf;
pub mod message_log;
