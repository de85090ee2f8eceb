//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Join cycle labels with an arrow, closing the loop back to the first node
pub fn format_cycle_path<S: AsRef<str>>(nodes: &[S]) -> String {
    let mut parts: Vec<&str> = nodes.iter().map(AsRef::as_ref).collect();
    if let Some(first) = parts.first().copied() {
        parts.push(first);
    }
    parts.join(" → ")
}
