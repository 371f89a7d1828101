// =============================================================================
// EMA Crossover Signal
// =============================================================================
//
// Compares the short and long EMA at the two most recent indices:
//
//   prev_short <= prev_long  &&  curr_short > curr_long   => buy
//   prev_short >= prev_long  &&  curr_short < curr_long   => sell
//   all four values defined, no crossover                  => hold
//   any value undefined (not enough history)               => neutral
//
// The boundary treatment is deliberately asymmetric (inclusive on the
// previous bar, strict on the current bar): a tie that breaks outward counts
// as a crossover, a tie that stays a tie falls through to hold.
// =============================================================================

use crate::types::Signal;

/// Derive the crossover signal from two EMA series at `last_index` (the most
/// recent observation, normally `len - 1`).
///
/// Returns [`Signal::Neutral`] when `last_index` leaves no previous bar to
/// compare against, falls outside either series, or any of the four EMA
/// values involved is still undefined.
pub fn crossover_signal(
    ema_short: &[Option<f64>],
    ema_long: &[Option<f64>],
    last_index: usize,
) -> Signal {
    if last_index == 0 || last_index >= ema_short.len() || last_index >= ema_long.len() {
        return Signal::Neutral;
    }

    let values = (
        ema_short[last_index - 1],
        ema_long[last_index - 1],
        ema_short[last_index],
        ema_long[last_index],
    );
    let (prev_short, prev_long, curr_short, curr_long) = match values {
        (Some(ps), Some(pl), Some(cs), Some(cl)) => (ps, pl, cs, cl),
        _ => return Signal::Neutral,
    };

    if prev_short <= prev_long && curr_short > curr_long {
        Signal::Buy
    } else if prev_short >= prev_long && curr_short < curr_long {
        Signal::Sell
    } else {
        Signal::Hold
    }
}
