//! Common-password reference set.
//!
//! The engine checks candidates against an immutable set of known weak
//! passwords. The default set is bundled into the binary at compile time and
//! parsed once on first use; callers that want a different corpus can load
//! one from a file or build one from raw lines and pass it to
//! [`analyze_with_wordlist`](crate::analyze_with_wordlist).

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

static BUNDLED: OnceLock<Wordlist> = OnceLock::new();

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Wordlist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read wordlist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Wordlist file has no entries")]
    EmptyFile,
}

/// An immutable set of known common passwords.
///
/// Entries are stored lowercased; all lookups are case-insensitive. A
/// `Wordlist` is never mutated after construction, so sharing one across
/// threads needs no locking.
#[derive(Debug, Clone, Default)]
pub struct Wordlist {
    entries: HashSet<String>,
}

impl Wordlist {
    /// Returns the bundled reference set, parsed on first call.
    ///
    /// The list ships inside the binary (`assets/common_passwords.txt`), so
    /// this never touches the filesystem and cannot fail.
    pub fn bundled() -> &'static Wordlist {
        BUNDLED.get_or_init(|| {
            let list = Wordlist::from_lines(include_str!("../assets/common_passwords.txt"));
            #[cfg(feature = "tracing")]
            tracing::debug!("Bundled common-password list loaded: {} entries", list.len());
            list
        })
    }

    /// Builds a wordlist from newline-separated entries.
    ///
    /// Lines are trimmed and lowercased; blank lines and `#` comments are
    /// skipped. An input with no usable lines yields an empty list.
    pub fn from_lines(lines: &str) -> Wordlist {
        let entries = lines
            .lines()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(|l| l.to_lowercase())
            .collect();
        Wordlist { entries }
    }

    /// Loads a wordlist from a file, one entry per line.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the file does not exist
    /// - the file cannot be read
    /// - the file contains no entries after comment/blank filtering
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Wordlist, WordlistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Wordlist loading FAILED: file not found {}", path.display());
            return Err(WordlistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let list = Wordlist::from_lines(&content);

        if list.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Wordlist loading FAILED: no entries in {}", path.display());
            return Err(WordlistError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Wordlist loaded: {} entries from {}", list.len(), path.display());

        Ok(list)
    }

    /// Checks whether `candidate` is in the list (case-insensitive).
    pub fn contains(&self, candidate: &str) -> bool {
        self.entries.contains(&candidate.to_lowercase())
    }

    /// Iterates over the (lowercased) entries, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Number of entries in the list.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_lines_skips_comments_and_blanks() {
        let list = Wordlist::from_lines("# header\n\npassword\n  qwerty  \n# tail\n");
        assert_eq!(list.len(), 2);
        assert!(list.contains("password"));
        assert!(list.contains("qwerty"));
    }

    #[test]
    fn test_from_lines_lowercases_entries() {
        let list = Wordlist::from_lines("LetMeIn\n");
        assert!(list.contains("letmein"));
        assert!(list.contains("LETMEIN"));
    }

    #[test]
    fn test_from_lines_empty_input() {
        let list = Wordlist::from_lines("# only comments\n\n");
        assert!(list.is_empty());
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let list = Wordlist::from_lines("dragon\n");
        assert!(list.contains("DRAGON"));
        assert!(list.contains("Dragon"));
        assert!(!list.contains("dragons"));
    }

    #[test]
    fn test_from_file_success() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "password123").expect("Failed to write");
        writeln!(temp_file, "qwerty").expect("Failed to write");

        let list = Wordlist::from_file(temp_file.path()).expect("should load");
        assert_eq!(list.len(), 2);
        assert!(list.contains("password123"));
    }

    #[test]
    fn test_from_file_not_found() {
        let result = Wordlist::from_file("/nonexistent/path/wordlist.txt");
        assert!(matches!(result, Err(WordlistError::FileNotFound(_))));
    }

    #[test]
    fn test_from_file_empty() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "# nothing but comments\n").expect("Failed to write");

        let result = Wordlist::from_file(temp_file.path());
        assert!(matches!(result, Err(WordlistError::EmptyFile)));
    }

    #[test]
    fn test_bundled_list_has_the_classics() {
        let list = Wordlist::bundled();
        assert!(!list.is_empty());
        assert!(list.contains("password"));
        assert!(list.contains("123456"));
        assert!(list.contains("qwerty"));
        assert!(list.contains("PASSWORD"));
    }

    #[test]
    fn test_entries_are_lowercased() {
        let list = Wordlist::from_lines("AbC\nxyz\n");
        let mut entries: Vec<&str> = list.entries().collect();
        entries.sort_unstable();
        assert_eq!(entries, vec!["abc", "xyz"]);
    }
}
