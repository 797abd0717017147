//! Git status parsing and the version-control capability.

pub mod client;
pub mod diff;
pub mod status;

pub use client::{GitCli, VersionControlClient};
pub use status::{ChangeSet, ChangedFile, FileStatus, parse_status};
