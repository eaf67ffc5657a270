/// Answers treated as "yes". Matching is case-insensitive on the trimmed value.
pub const AFFIRMATIVE: &[&str] = &[
    "yes",
    "true",
    "1",
    "yeah",
    "yh",
    "sure",
    "ok",
    "i am",
    "just joined",
    "joined now",
];

/// Interpret a yes/no style answer. Anything outside [`AFFIRMATIVE`] is `false`.
pub fn parse_boolean(value: Option<&str>) -> bool {
    match value {
        Some(v) => {
            let normalized = v.trim().to_lowercase();
            AFFIRMATIVE.contains(&normalized.as_str())
        }
        None => false,
    }
}
