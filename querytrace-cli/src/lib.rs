//! QueryTrace CLI - Command-line interface for rendering SQL traces.
//!
//! This crate provides the `querytrace` tool for rendering single queries
//! and replaying recorded query logs.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
