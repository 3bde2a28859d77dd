/// Upper-cases the first character and lower-cases the rest (`"HAPPY"` -> `"Happy"`).
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Rounds to two decimal places, ties to even (`97.125` -> `97.12`).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Renders a percentage as `"<number>%"`. Whole numbers keep a `.0` suffix.
pub fn format_confidence(value: f64) -> String {
    format!("{:?}%", value)
}
