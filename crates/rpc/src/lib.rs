//! KAYICOM RPC - fee calculator CLI
//!
//! This crate provides the CLI binary and command orchestration on top of
//! the fee engine and rate converter.

pub mod commands;
pub mod context;

pub use context::{AppContext, ContextError};
