//! Run summary reporting for the CLI.

use serde::Serialize;

/// Summary of one generation run.
///
/// Informational only; the functional contract is the header artifact.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub target_count: usize,
    pub words_emitted: usize,
    pub elapsed_ms: u128,
    pub output_path: String,
    /// Up to the first 20 words of the dictionary.
    pub sample: Vec<String>,
}

/// Number of leading words included in the sample.
pub const SAMPLE_LEN: usize = 20;

impl RunReport {
    pub fn new(
        target_count: usize,
        words: &[String],
        elapsed_ms: u128,
        output_path: &str,
    ) -> Self {
        Self {
            target_count,
            words_emitted: words.len(),
            elapsed_ms,
            output_path: output_path.to_string(),
            sample: words.iter().take(SAMPLE_LEN).cloned().collect(),
        }
    }

    /// Human-readable summary on stderr.
    pub fn print_human(&self) {
        eprintln!(
            "Generated {} words in {} ms, saved to {}",
            self.words_emitted, self.elapsed_ms, self.output_path
        );
        eprintln!("Sample: {:?}", self.sample);
    }
}
