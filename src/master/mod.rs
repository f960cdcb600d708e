//! Master test list
//!
//! Loads the set of known test identifiers used by the inclusion filter.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::PlanError;

/// The set of known test identifiers, read-only after load
#[derive(Clone, Debug, Default)]
pub struct MasterTestSet {
    names: HashSet<String>,
}

impl MasterTestSet {
    /// Load a master list file.
    ///
    /// Each line is whitespace-separated and its second token is a test
    /// identifier. Lines with fewer than two tokens are skipped; duplicates
    /// collapse.
    pub fn load(path: &Path) -> Result<Self, PlanError> {
        let file = File::open(path).map_err(|source| PlanError::MissingFile {
            path: path.to_path_buf(),
            source,
        })?;

        let mut names = HashSet::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| PlanError::MissingFile {
                path: path.to_path_buf(),
                source,
            })?;
            if let Some(name) = line.split_whitespace().nth(1) {
                names.insert(name.to_string());
            }
        }

        debug!("loaded {} known tests from {}", names.len(), path.display());
        Ok(Self { names })
    }

    /// Build a set from explicit names
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_second_token_collected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "12 org.acme.CartTest enabled").unwrap();
        writeln!(file, "13 org.acme.StockTest").unwrap();
        let set = MasterTestSet::load(file.path()).unwrap();

        assert!(set.contains("org.acme.CartTest"));
        assert!(set.contains("org.acme.StockTest"));
        assert!(!set.contains("12"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_short_lines_skipped_and_duplicates_collapse() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "lonely-token").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "1 org.acme.CartTest").unwrap();
        writeln!(file, "2 org.acme.CartTest").unwrap();
        let set = MasterTestSet::load(file.path()).unwrap();

        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let err = MasterTestSet::load(Path::new("/nonexistent/KnownTests.txt")).unwrap_err();
        assert!(matches!(err, PlanError::MissingFile { .. }));
    }
}
