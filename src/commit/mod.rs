//! Heuristic commit messages from working tree changes.

pub mod classify;
pub mod describe;
pub mod message;

pub use classify::{FileContext, FileFamily, classify};
pub use describe::{FileDescriptions, describe_changes};
pub use message::{
    DEFAULT_DETAIL_LIMIT, GeneratedMessage, assemble_message, generate_commit_message,
};
