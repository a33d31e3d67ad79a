//! Leitner-style escalation ladder.

/// Re-show thresholds in cases: after 1 case, then 3, then 7.
pub const REVIEW_LADDER: [u32; 3] = [1, 3, 7];

/// Threshold for a first miss.
pub fn first_interval() -> u32 {
    REVIEW_LADDER[0]
}

/// Threshold after another miss: the next rung above `current`, capped at
/// the top of the ladder. Values not on the ladder snap to the next rung.
pub fn next_interval(current: u32) -> u32 {
    REVIEW_LADDER
        .iter()
        .copied()
        .find(|&interval| interval > current)
        .unwrap_or(REVIEW_LADDER[REVIEW_LADDER.len() - 1])
}
