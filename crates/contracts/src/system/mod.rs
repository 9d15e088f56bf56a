pub mod username_chat;
