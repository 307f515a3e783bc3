// Make the same modules available from the library crate so the binary and
// the integration tests can reach them via `cryptolab::...`.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
