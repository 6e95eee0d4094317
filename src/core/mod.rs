//! Core functionality module
//!
//! This module contains the ambient pieces shared by the library and the
//! binary: configuration management and error handling.
//!
//! # Submodules
//!
//! - `config` - Configuration loading, saving, and management
//! - `error` - Error types and result aliases

pub mod config;
pub mod error;
