//! jo library: command dispatch for the `jo` binary.

pub mod app;
pub mod config;
