//! Domain layer
//!
//! Contains the contact pipeline's models and the ports it talks through.
//! - `entities`: Submission and outbound email models
//! - `ports`: Trait definitions for external dependencies (mail transport)

pub mod entities;
pub mod ports;
