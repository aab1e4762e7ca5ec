use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use regex::Regex;

pub fn is_lowercase_word(input: &str) -> bool {
    lazy_static! {
        static ref LOWERCASE_WORD_RE: Regex = Regex::new(r"^[a-z]+$").unwrap();
    }
    LOWERCASE_WORD_RE.is_match(input)
}

/// Reads a dictionary file with one word per line. Lines containing
/// anything but lowercase ascii letters are silently dropped.
pub fn extract_dictionary(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("could not read dictionary file {}", path.display()))?;
    Ok(contents
        .lines()
        .filter(|line| is_lowercase_word(line))
        .map(String::from)
        .collect())
}

pub fn choose_word(words: &[String]) -> Option<&str> {
    words.choose(&mut rand::thread_rng()).map(String::as_str)
}
