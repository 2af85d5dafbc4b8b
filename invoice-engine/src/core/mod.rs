//! Core module - configuration
//!
//! - [`Config`] - invoice desk configuration

pub mod config;

pub use config::Config;
