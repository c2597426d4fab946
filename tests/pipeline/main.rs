//! Pipeline Integration Tests
//!
//! Config file → tokenizer → CSV extraction → store → export, through the
//! facade crate.

#[path = "../common/mod.rs"]
mod common;

mod config_driven;
mod extract_export;
mod properties;
