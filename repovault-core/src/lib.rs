//! Repovault Core - Core library for repovault mirror backups
//!
//! This crate provides the building blocks for mirroring GitHub
//! repositories to local disk: configuration, repository naming,
//! allow-list filtering, and mirror cloning through the git binary.

pub mod config;
pub mod error;
pub mod filter;
pub mod mirror;
pub mod repo;

pub use config::Config;
pub use error::{Error, Result};
pub use mirror::{GitCli, MirrorGit};
pub use repo::RepoName;
