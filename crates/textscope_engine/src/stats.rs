use crate::types::WordStats;

/// Word count and summed word length over every unit.
///
/// Units are split on runs of whitespace. Tokens that parse as a base-10
/// `i64` (optional sign, digits only) are skipped entirely. Lengths are
/// counted in characters.
pub fn compute_stats<S: AsRef<str>>(units: &[S]) -> WordStats {
    units
        .iter()
        .flat_map(|unit| unit.as_ref().split_whitespace())
        .filter(|token| !is_integer_token(token))
        .fold(WordStats::default(), |mut stats, token| {
            stats.total_words += 1;
            stats.total_length += token.chars().count();
            stats
        })
}

fn is_integer_token(token: &str) -> bool {
    token.parse::<i64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_integers_are_integers() {
        assert!(is_integer_token("42"));
        assert!(is_integer_token("-7"));
        assert!(is_integer_token("+7"));
        assert!(!is_integer_token("+"));
        assert!(!is_integer_token("3.14"));
        assert!(!is_integer_token("12abc"));
        // Out of i64 range: not an integer for the parser, so it is a word.
        assert!(!is_integer_token("99999999999999999999"));
    }
}
