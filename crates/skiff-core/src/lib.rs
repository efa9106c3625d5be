//! Skiff Core Library
//!
//! This crate provides shared types, errors, and configuration for Skiff.

pub mod config;
pub mod error;
pub mod types;

pub use config::ShellConfig;
pub use error::{SkiffError, SkiffResult};
pub use types::{NavigationState, ShellCommand};
