//! Promptops workflows.
//!
//! Pull a baseline prompt from the LangSmith Hub, check a locally edited
//! revision, and publish it back under your own namespace.

pub mod commands;
pub mod output;
