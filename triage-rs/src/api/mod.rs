//! HTTP interface for triage-rs
//!
//! Thin collaborator over the core: handlers parse requests, call
//! `classify`/`run`/`aggregate` and serialize the results.

pub mod handlers;
pub mod server;
pub mod web;

pub use server::ApiServer;
