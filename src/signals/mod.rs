// =============================================================================
// Signals Module
// =============================================================================
//
// Signal derivation for the endpoint:
// - EMA crossover detection over the two most recent bars

pub mod crossover;

pub use crossover::crossover_signal;
