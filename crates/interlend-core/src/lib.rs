//! Interlend Core - shared library for interlend services
//!
//! This crate provides configuration and consortium membership tracking
//! used by the routing core and the surrounding service.

pub mod config;
pub mod directory;

pub use config::{SearchConfig, ServiceConfig};
pub use directory::{TenantDirectory, TenantEntry, TenantStatus};
