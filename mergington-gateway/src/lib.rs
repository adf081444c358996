//! HTTP API gateway for the Mergington activity sign-up service.
//!
//! Exposes the activity listing and the signup / unregister endpoints over
//! a shared [`mergington_core::ActivityRegistry`].

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
