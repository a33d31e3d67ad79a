//! Scripted player input.

/// Miss the first case, then answer the second correctly. The missed
/// case comes back for review right after.
pub fn miss_then_review() -> Vec<&'static str> {
    vec!["HLHS", ":next", "VSD", ":next"]
}

/// Correct answers for every built-in case, in catalog order.
pub fn perfect_run() -> Vec<&'static str> {
    [
        "ASD", "VSD", "PDA", "CoA", "PS", "TOF", "TGA", "truncus", "TAPVR", "AVSD", "Ebstein",
        "HLHS",
    ]
    .into_iter()
    .flat_map(|answer| [answer, ":next"])
    .collect()
}
