//! Resolution of named resources to files
//!
//! A source name is looked up under each configured root in order, falling
//! back to the name itself as a plain path. This lets experiments ship data
//! files (stopword lists, IDF tables) next to the code while still accepting
//! ad-hoc paths on the command line.

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

/// Environment variable holding the resource search path
pub const RESOURCE_PATH_VAR: &str = "SHOBAI_RESOURCE_PATH";

#[derive(Debug, Clone, Default)]
pub struct ResourceLocator {
    roots: Vec<PathBuf>,
}

impl ResourceLocator {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a locator from `SHOBAI_RESOURCE_PATH` (platform path-list syntax)
    pub fn from_env() -> Self {
        match env::var_os(RESOURCE_PATH_VAR) {
            Some(paths) => Self::new(env::split_paths(&paths)),
            None => Self::default(),
        }
    }

    /// Append a search root, returning the locator for chaining
    #[must_use]
    pub fn with_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.roots.push(root.into());
        self
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// First existing `root/source`, or `source` itself
    pub fn resolve<P: AsRef<Path>>(&self, source: P) -> PathBuf {
        let source = source.as_ref();
        // "/stopwords.txt" names the same resource as "stopwords.txt"
        let relative = source.strip_prefix("/").unwrap_or(source);

        self.roots
            .iter()
            .map(|root| root.join(relative))
            .find(|candidate| candidate.is_file())
            .unwrap_or_else(|| source.to_path_buf())
    }

    /// Open a buffered reader over the resolved source
    pub fn open<P: AsRef<Path>>(&self, source: P) -> io::Result<BufReader<File>> {
        let path = self.resolve(source);
        Ok(BufReader::new(File::open(path)?))
    }
}
