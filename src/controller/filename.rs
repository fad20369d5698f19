use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_FILENAME: &str = "generated_image";
const MAX_STEM_LEN: usize = 30;

static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new("[^a-z0-9]+").expect("static pattern compiles"));

/// Suggested download name for an image generated from `prompt`.
pub fn download_filename(prompt: &str) -> String {
    let lowered = prompt.trim().to_lowercase();
    let collapsed = NON_ALPHANUMERIC.replace_all(&lowered, "_");

    // Only ASCII remains after the replacement, so byte truncation is safe.
    let stem = collapsed.trim_matches('_');
    let stem = stem[..stem.len().min(MAX_STEM_LEN)].trim_end_matches('_');

    if stem.is_empty() {
        format!("{}.png", DEFAULT_FILENAME)
    } else {
        format!("{}.png", stem)
    }
}
