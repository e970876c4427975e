//! Transport for the Opoint search API.

pub mod client;
pub mod types;

pub use client::{OpointClient, OpointError, SearchClient};
