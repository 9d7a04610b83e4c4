use crate::types::{FilterResult, MatchCase};

/// Stable partition of `units` by substring containment of `keyword`.
///
/// An empty keyword matches every unit.
pub fn filter_by_keyword<S: AsRef<str>>(
    units: &[S],
    keyword: &str,
    case: MatchCase,
) -> FilterResult {
    let needle = match case {
        MatchCase::Sensitive => keyword.to_string(),
        MatchCase::Insensitive => keyword.to_lowercase(),
    };

    let mut result = FilterResult::default();
    for unit in units {
        let unit = unit.as_ref();
        let found = match case {
            MatchCase::Sensitive => unit.contains(needle.as_str()),
            MatchCase::Insensitive => unit.to_lowercase().contains(needle.as_str()),
        };
        if found {
            result.matching.push(unit.to_string());
        } else {
            result.non_matching.push(unit.to_string());
        }
    }
    result
}
