const MAX_STEM_CHARS: usize = 120;

/// `wiki_<article>.txt`, with the article made safe as a single path
/// component on every platform.
pub fn article_file_name(article: &str) -> String {
    format!("wiki_{}.txt", sanitize_stem(article))
}

fn sanitize_stem(input: &str) -> String {
    let cleaned: String = input
        .trim()
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .take(MAX_STEM_CHARS)
        .collect();
    let stem = cleaned.trim_matches(&[' ', '.'][..]);
    if stem.is_empty() {
        "untitled".to_string()
    } else {
        stem.to_string()
    }
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}
