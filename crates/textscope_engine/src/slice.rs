use crate::types::Slice;

/// First and last `n` units, `n` clamped to the corpus length.
pub fn head_tail<S: AsRef<str>>(units: &[S], n: usize) -> Slice {
    let n = n.min(units.len());
    let owned = |part: &[S]| -> Vec<String> {
        part.iter().map(|u| u.as_ref().to_string()).collect()
    };
    Slice {
        head: owned(&units[..n]),
        tail: owned(&units[units.len() - n..]),
    }
}

/// Parses a requested slice length typed by a user.
///
/// Anything that is not a base-10 integer yields 0, and so do negative values.
pub fn parse_slice_len(raw: &str) -> usize {
    match raw.trim().parse::<i64>() {
        Ok(n) if n > 0 => usize::try_from(n).unwrap_or(usize::MAX),
        _ => 0,
    }
}
