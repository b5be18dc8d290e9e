//! Presentation layer
//!
//! Terminal front end: argument parsing, prompts, progress and output.

pub mod cli;
