use crate::models::ParsedTune;

/// Sentinel for fields not found during the line scan. A segment whose title
/// is still this value after scanning is not a valid tune.
pub const UNKNOWN: &str = "Unknown";

/// Maximum number of characters of raw segment text kept in the excerpt.
pub const EXCERPT_MAX_CHARS: usize = 200;

const EXCERPT_ELLIPSIS: &str = "...";

/// Extract tune records from the text content of one ABC file.
///
/// The input is split on the literal `X:` tune-index marker, which by
/// convention opens each tune. Each non-empty segment is scanned line by line
/// for the `T:` (title), `R:` (type), `K:` (key) and `M:` (meter) field
/// markers; repeated markers overwrite the prior value, so the last occurrence
/// wins. Lines without a recognized marker, including the notation body, are
/// ignored.
///
/// Segments without a `T:` line never leave the default title and are dropped.
/// Text before the first `X:` marker is handled the same way; it only fails
/// the title requirement rather than being special-cased.
///
/// Pure function: no I/O, no shared state, and identical input always yields
/// the identical sequence in segment order. Safe to call concurrently from
/// many threads.
///
/// # Examples
///
/// ```
/// use abc_tunebook::extract_tunes;
///
/// let tunes = extract_tunes("X:1\nT:Cooley's\nR:reel\nK:Edor\nM:4/4\n|:D2|EB{c}BA B2 EB|\n");
/// assert_eq!(tunes.len(), 1);
/// assert_eq!(tunes[0].title, "Cooley's");
/// assert_eq!(tunes[0].tune_type, "reel");
/// ```
pub fn extract_tunes(content: &str) -> Vec<ParsedTune> {
    let mut tunes = Vec::new();

    for segment in content.split("X:") {
        if segment.trim().is_empty() {
            continue;
        }

        let mut title = UNKNOWN.to_string();
        let mut tune_type = UNKNOWN.to_string();
        let mut key = String::new();
        let mut meter = String::new();

        for line in segment.lines() {
            let line = line.trim();
            if let Some(rest) = line.strip_prefix("T:") {
                title = rest.trim().to_string();
            } else if let Some(rest) = line.strip_prefix("R:") {
                tune_type = rest.trim().to_string();
            } else if let Some(rest) = line.strip_prefix("K:") {
                key = rest.trim().to_string();
            } else if let Some(rest) = line.strip_prefix("M:") {
                meter = rest.trim().to_string();
            }
        }

        if title == UNKNOWN {
            continue;
        }

        tunes.push(ParsedTune {
            title,
            tune_type,
            key,
            meter,
            notation_excerpt: excerpt(segment),
        });
    }

    tunes
}

/// Bounded preview of the raw (untrimmed) segment text.
///
/// Counts characters, not bytes, so truncation never lands inside a
/// multi-byte sequence. Segments of exactly [`EXCERPT_MAX_CHARS`] characters
/// are kept verbatim; only longer segments get the ellipsis.
fn excerpt(segment: &str) -> String {
    match segment.char_indices().nth(EXCERPT_MAX_CHARS) {
        Some((byte_idx, _)) => format!("{}{}", &segment[..byte_idx], EXCERPT_ELLIPSIS),
        None => segment.to_string(),
    }
}
