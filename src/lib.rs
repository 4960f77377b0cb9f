//! TUDU - Terminal Todo List Library
//!
//! A terminal-based todo list application with local persistence, built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
