use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Ordered gallows frames. Index 0 is the untouched gallows, the last
/// index is the losing frame.
pub struct Gallows {
    stages: Vec<String>,
}

impl Gallows {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Gallows> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("could not read gallows file {}", path.display()))?;
        Ok(Gallows::parse(&contents))
    }

    /// Stages are separated by two empty lines, i.e. a "\n\n\n" run.
    /// Each split consumes exactly the first three newlines, a longer run
    /// carries its leftover newlines into the start of the next stage.
    pub fn parse(contents: &str) -> Gallows {
        let mut rest = contents.trim_matches('\n');
        let mut stages = Vec::new();
        while let Some(delimiter) = rest.find("\n\n\n") {
            stages.push(rest[..delimiter].to_string());
            rest = &rest[delimiter + 3..];
        }
        stages.push(rest.to_string());
        Gallows { stages }
    }

    /// Frame for the given number of bad guesses, clamped to the losing
    /// frame once the count runs past the end.
    pub fn stage(&self, bad_guesses: usize) -> &str {
        &self.stages[bad_guesses.min(self.stages.len() - 1)]
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }
}
