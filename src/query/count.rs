/// Largest article count the provider form accepts.
pub const MAX_REQUESTED_ARTICLES: u32 = 50;

/// Coerce user input into a requested article count.
///
/// Fractions are truncated. Anything that is not a finite number of at least 1
/// becomes 1; large values are capped at [`MAX_REQUESTED_ARTICLES`].
pub fn requested_count(input: &str) -> u32 {
    match input.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 1.0 => (n.trunc() as u32).min(MAX_REQUESTED_ARTICLES),
        _ => 1,
    }
}
