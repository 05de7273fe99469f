//! Shared types for the TrafficWatch dashboard
//!
//! This crate contains the wire contract between the dashboard UI and the
//! Agent service:
//! - Violation records and their dynamic category flags
//! - Request/response envelopes for the Agent's HTTP endpoints

pub mod messages;

pub use messages::*;
