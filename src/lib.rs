//! Approval wizard — two-step lead intake with a fire-and-forget form
//! transport.

pub mod cli;
pub mod config;
pub mod error;
pub mod transport;
pub mod wizard;
