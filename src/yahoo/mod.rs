// =============================================================================
// Yahoo Finance Chart API Module
// =============================================================================
//
// Read-only upstream: one GET per request, typed deserialization, no retries.

pub mod client;

pub use client::{ChartResult, YahooClient};
