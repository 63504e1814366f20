//! Term statistics for plain-text files
//!
//! Glue between the I/O crate and the statistics core: a [`Document`] is a
//! bag of lowercased terms read line by line, which can be viewed as a term
//! set, a term-frequency vector, a TF-IDF vector or a term distribution.

use ahash::{AHashMap, AHashSet};
use shobai_io::{
    count_lines, LineReader, ProgressSink, ProgressTracker, ResourceLocator, Result, TracingSink,
};
use std::io::BufRead;
use std::path::Path;
use tracing::debug;

/// Tokenize a line for term statistics
///
/// Lowercases, splits on whitespace and ASCII punctuation, and drops
/// single-character tokens.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
        .map(|s| s.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|s| s.chars().count() > 1)
}

/// Term counts of a single text source
#[derive(Debug, Clone, Default)]
pub struct Document {
    counts: AHashMap<String, u32>,
    lines: u64,
}

impl Document {
    /// Build a document from lines, skipping `stopwords`
    ///
    /// Every line is recorded on `tracker`.
    pub fn from_lines<B, S>(
        lines: LineReader<B>,
        stopwords: &AHashSet<String>,
        tracker: &mut ProgressTracker<S>,
    ) -> Result<Self>
    where
        B: BufRead,
        S: ProgressSink,
    {
        let mut doc = Self::default();
        for line in lines {
            let line = line?;
            for term in tokenize(&line) {
                if !stopwords.contains(&term) {
                    *doc.counts.entry(term).or_insert(0) += 1;
                }
            }
            doc.lines += 1;
            tracker.progress();
        }
        Ok(doc)
    }

    /// Load a document from a resource name or path
    ///
    /// The file is read twice: once to count lines for the progress
    /// estimate, once to collect terms.
    pub fn load<P: AsRef<Path>>(
        locator: &ResourceLocator,
        source: P,
        stopwords: &AHashSet<String>,
    ) -> Result<Self> {
        let source = source.as_ref();
        let estimated = count_lines(locator.open(source)?)? as u64;
        debug!(source = %source.display(), lines = estimated, "Loading document");

        let mut tracker = ProgressTracker::new(estimated, TracingSink::new(source.display().to_string()));
        let doc = Self::from_lines(LineReader::new(locator.open(source)?), stopwords, &mut tracker)?;

        debug!(
            source = %source.display(),
            terms = doc.counts.len(),
            tokens = doc.token_count(),
            "Loaded document"
        );
        Ok(doc)
    }

    pub fn counts(&self) -> &AHashMap<String, u32> {
        &self.counts
    }

    /// Number of lines read
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Total number of term occurrences
    pub fn token_count(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    /// Distinct terms
    pub fn terms(&self) -> AHashSet<String> {
        self.counts.keys().cloned().collect()
    }

    /// Raw term frequencies as weights
    pub fn tf_vector(&self) -> AHashMap<String, f64> {
        self.counts
            .iter()
            .map(|(term, &count)| (term.clone(), f64::from(count)))
            .collect()
    }

    /// Term frequencies weighted by inverse document frequency
    ///
    /// Terms missing from `idfs` are left out.
    pub fn tf_idf_vector(&self, idfs: &AHashMap<String, f64>) -> AHashMap<String, f64> {
        let vector: AHashMap<String, f64> = self
            .counts
            .iter()
            .filter_map(|(term, &count)| idfs.get(term).map(|idf| (term.clone(), f64::from(count) * idf)))
            .collect();

        let dropped = self.counts.len() - vector.len();
        if dropped > 0 {
            debug!(dropped, "Terms without IDF left out of TF-IDF vector");
        }
        vector
    }

    /// Term distribution: counts divided by the total number of occurrences
    pub fn distribution(&self) -> AHashMap<String, f64> {
        let total = self.token_count() as f64;
        self.counts
            .iter()
            .map(|(term, &count)| (term.clone(), f64::from(count) / total))
            .collect()
    }
}
