//! Nickname update use case
//!
//! - api.rs: `POST /api/username-chat/`
//! - state.rs: form state and result dispatch
//! - view_model.rs: signals and commands
//! - view.rs: Leptos component

pub mod api;
mod state;
mod view;
mod view_model;

pub use state::{Hint, NicknameForm};
pub use view::NicknameUpdater;
pub use view_model::NicknameViewModel;
