//! Configuration module for briefly
//!
//! Handles loading settings from a TOML file and the environment.

mod settings;

pub use settings::{Settings, API_KEY_ENV, ENDPOINT_ENV, MODEL_ENV};
