// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free indicator math. The signal endpoint only needs the
// EMA, but the module keeps the same shape as a larger indicator library so
// new indicators slot in without touching the API layer.

pub mod ema;
