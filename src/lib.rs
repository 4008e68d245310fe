//! Overpeak - a synthetic usage/denial telemetry generator
//!
//! This service synthesizes dated numeric records that alternate between
//! concurrent-usage ramps toward a configured threshold and denial events
//! during overpeak excursions, for use as test fixtures in downstream
//! telemetry consumers.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;

pub use application::Application;
pub use error::{Error, Result};
