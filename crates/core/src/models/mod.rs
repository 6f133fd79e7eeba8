pub mod room;
pub mod schedule;
pub mod user;

/// Normalizes a free-text label list: trims whitespace, drops blanks, and
/// drops duplicate literals while preserving first-seen order. Used for
/// room facilities and schedule attendees.
pub fn normalize_labels(labels: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(labels.len());
    for label in labels {
        let label = label.trim();
        if label.is_empty() || out.iter().any(|seen| seen == label) {
            continue;
        }
        out.push(label.to_string());
    }
    out
}
