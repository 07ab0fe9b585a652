use thiserror::Error;

pub mod client;
pub mod server;

pub use client::Choice;
pub use server::{ActionRequest, MenuOption, Narration, RequestKind, SideId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid message format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Empty message")]
    EmptyMessage,
}
