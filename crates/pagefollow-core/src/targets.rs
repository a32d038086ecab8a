use crate::Result;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// An ordered list of distinct career-page URLs to process.
///
/// Built once at batch start and immutable afterwards. Duplicate entries
/// are dropped on load, keeping the first occurrence in file order.
#[derive(Debug, Clone)]
pub struct TargetList {
    urls: Vec<String>,
    duplicates_removed: usize,
    blank_rows_skipped: usize,
}

impl TargetList {
    /// Load targets from a headerless single-column CSV file.
    ///
    /// The first field of each record is taken as the URL; surrounding
    /// whitespace is trimmed and blank rows are skipped.
    pub fn from_path(path: &Path) -> Result<Self> {
        tracing::debug!("Reading target file: {}", path.display());

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse targets from any reader producing the same tabular format.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut raw = Vec::new();
        let mut blank_rows_skipped = 0;
        for record in csv_reader.records() {
            let record = record?;
            let url = record.get(0).unwrap_or("").trim();
            if url.is_empty() {
                blank_rows_skipped += 1;
                continue;
            }
            raw.push(url.to_string());
        }

        let mut list = Self::from_urls(raw);
        list.blank_rows_skipped = blank_rows_skipped;
        Ok(list)
    }

    /// Build a target list from URLs already in memory, applying the same
    /// first-occurrence-wins duplicate removal as file loading.
    pub fn from_urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut distinct = Vec::new();
        let mut duplicates_removed = 0;

        for url in urls {
            let url = url.into();
            if seen.insert(url.clone()) {
                distinct.push(url);
            } else {
                duplicates_removed += 1;
            }
        }

        if duplicates_removed > 0 {
            tracing::info!(
                "Duplicate entries found, removed {} of {} rows",
                duplicates_removed,
                distinct.len() + duplicates_removed
            );
        }

        Self {
            urls: distinct,
            duplicates_removed,
            blank_rows_skipped: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }

    /// Number of later duplicate occurrences dropped during load.
    pub fn duplicates_removed(&self) -> usize {
        self.duplicates_removed
    }

    /// Number of empty rows skipped during load.
    pub fn blank_rows_skipped(&self) -> usize {
        self.blank_rows_skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_duplicates_dropped_preserving_first_seen_order() {
        let list = TargetList::from_urls(["a", "b", "a", "c"]);

        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(list.duplicates_removed(), 1);
    }

    #[test]
    fn test_distinct_input_is_untouched() {
        let list = TargetList::from_urls(["a", "b", "c"]);

        assert_eq!(list.len(), 3);
        assert_eq!(list.duplicates_removed(), 0);
    }

    #[test]
    fn test_from_reader_trims_and_skips_blank_rows() {
        let input = "https://example.com/one\n\n  https://example.com/two  \n";
        let list = TargetList::from_reader(input.as_bytes()).unwrap();

        assert_eq!(
            list.iter().collect::<Vec<_>>(),
            vec!["https://example.com/one", "https://example.com/two"]
        );
        assert_eq!(list.blank_rows_skipped(), 1);
    }

    #[test]
    fn test_from_path_reads_headerless_single_column() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "https://example.com/jobs").unwrap();
        writeln!(file, "https://example.com/careers").unwrap();
        writeln!(file, "https://example.com/jobs").unwrap();

        let list = TargetList::from_path(file.path()).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.duplicates_removed(), 1);
    }

    #[test]
    fn test_from_path_missing_file_is_a_load_error() {
        let result = TargetList::from_path(Path::new("/nonexistent/targets.csv"));
        assert!(result.is_err());
    }
}
