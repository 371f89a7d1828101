// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives more weight to recent prices, making it more responsive to new
// information than the Simple Moving Average (SMA).
//
// Formula:
//   k     = 2 / (period + 1)
//   EMA_t = (close_t - EMA_{t-1}) * k + EMA_{t-1}
//
// The first EMA value is seeded with the SMA of the first `period` closes and
// sits at index `period - 1`.
// =============================================================================

/// Compute the EMA series for the given `closes` slice and look-back `period`.
///
/// The output always has the same length as the input. Positions before
/// `period - 1` are `None` (not enough history yet); every later position
/// holds the recursively smoothed value.
///
/// # Edge cases
/// - `period == 0` => all-`None` series (division by zero guard)
/// - `closes.len() < period` => all-`None` series
/// - Non-finite closes propagate through the recursion per IEEE-754; callers
///   are expected to sanitize their input first.
pub fn ema_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 || closes.len() < period {
        return out;
    }

    let k = 2.0 / (period as f64 + 1.0);

    // Seed: SMA of the first `period` closes, assigned at index period - 1.
    let seed = closes[..period].iter().sum::<f64>() / period as f64;
    out[period - 1] = Some(seed);

    let mut prev = seed;
    for i in period..closes.len() {
        prev = (closes[i] - prev) * k + prev;
        out[i] = Some(prev);
    }

    out
}
