//! Core types for the Mergington extracurricular sign-up service.
//!
//! Defines the activity model, the fixed seed table, and the in-memory
//! registry that enforces the one-signup-per-student rule.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod activity;
pub mod error;
pub mod registry;
pub mod seed;

pub use activity::{Activity, Participant, Roster};
pub use error::{ErrorKind, RegistryError};
pub use registry::ActivityRegistry;
pub use seed::seed_roster;
