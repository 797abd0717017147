//! GitHub repository hosting.

pub mod client;

pub use client::{CreateRepository, GhCli, HostingClient};
