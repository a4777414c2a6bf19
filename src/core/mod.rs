//! Core components of the `newswatch` pipeline.
//!
//! This module contains the foundational building blocks of the crate:
//! - The shared HTTP client ([`NwClient`]) and its builder.
//! - The primary [`NwError`] type.
//! - The [`NewsSource`] trait that decouples the pipeline from the transport.

/// The shared client (`NwClient`), builder, and configuration.
pub mod client;
/// The primary error type (`NwError`) for the crate.
pub mod error;
/// Service traits for abstracting the upstream news transport.
pub mod services;

// convenient re-exports so most code can just `use crate::core::NwClient`
pub use client::{NwClient, NwClientBuilder};
pub use error::NwError;
pub use services::NewsSource;
