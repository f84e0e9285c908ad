//! Derived statistics
//!
//! Plain arithmetic helpers shared by the record types. Both return `0.0`
//! when the denominator is zero instead of producing `inf`/`NaN`.

/// Runs per match played.
pub fn batting_average(runs: u32, matches: u32) -> f32 {
    if matches > 0 {
        runs as f32 / matches as f32
    } else {
        0.0
    }
}

/// Strike rate as the record keeps it: runs per match, the same quotient as
/// [`batting_average`]. Balls faced are not tracked.
///
/// Zero matches gives `0.0` even when runs are positive. A guard on
/// `runs > 0` instead would divide by zero there and yield `+inf`.
pub fn strike_rate(runs: u32, matches: u32) -> f32 {
    batting_average(runs, matches)
}

/// Runs conceded per over bowled.
pub fn economy_rate(runs_conceded: u32, overs: f32) -> f32 {
    if overs > 0.0 {
        runs_conceded as f32 / overs
    } else {
        0.0
    }
}

/// `true` when `stored` is within `tolerance` of `expected`.
pub(crate) fn approx_eq(stored: f32, expected: f32, tolerance: f32) -> bool {
    (stored - expected).abs() <= tolerance
}
