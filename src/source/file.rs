//! File-based reading source.
//!
//! Replays values from a file, one per tick.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glucowatch_core::{MonitorError, ReadingSource};

/// A source that replays values read from a file.
///
/// Accepts either one value per line or the CSV written by the export
/// (the last comma-separated field of each row is used). Blank lines,
/// `#` comments and rows that don't parse, such as the CSV header, are
/// skipped.
///
/// Once every value has been returned the source reports itself
/// unavailable, unless looping is enabled.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
    values: Vec<f64>,
    position: usize,
    looping: bool,
}

impl FileSource {
    /// Load all values from `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = fs::read_to_string(&path)?;
        Ok(Self::from_values(&path, parse_values(&content)))
    }

    fn from_values(path: &Path, values: Vec<f64>) -> Self {
        Self {
            description: format!("replay: {}", path.display()),
            path: path.to_path_buf(),
            values,
            position: 0,
            looping: false,
        }
    }

    /// Restart from the first value after the last one instead of failing.
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        if looping {
            self.description.push_str(" (loop)");
        }
        self
    }
}

/// Extract every parseable value from file content.
fn parse_values(content: &str) -> Vec<f64> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.rsplit(',').next())
        .filter_map(|field| field.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .collect()
}

impl ReadingSource for FileSource {
    fn next_value(&mut self) -> glucowatch_core::Result<f64> {
        if self.position >= self.values.len() {
            if !self.looping || self.values.is_empty() {
                return Err(MonitorError::unavailable(format!(
                    "{} has no more readings",
                    self.path.display()
                )));
            }
            self.position = 0;
        }

        let value = self.values[self.position];
        self.position += 1;
        Ok(value)
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_plain_values_replay_in_order() {
        let file = file_with("65\n\n# comment\n75.5\n150\n");
        let mut source = FileSource::open(file.path()).unwrap();

        assert_eq!(source.next_value().unwrap(), 65.0);
        assert_eq!(source.next_value().unwrap(), 75.5);
        assert_eq!(source.next_value().unwrap(), 150.0);
        assert!(matches!(
            source.next_value(),
            Err(MonitorError::SourceUnavailable(_))
        ));
    }

    #[test]
    fn test_exported_csv_is_accepted() {
        let file = file_with("Time,Blood Sugar Level (mg/dL)\n10:00:00,65.5\n10:00:05,190\n");
        let mut source = FileSource::open(file.path()).unwrap();

        assert_eq!(source.next_value().unwrap(), 65.5);
        assert_eq!(source.next_value().unwrap(), 190.0);
        assert!(source.next_value().is_err());
    }

    #[test]
    fn test_looping_wraps_around() {
        let file = file_with("1\n2\n");
        let mut source = FileSource::open(file.path()).unwrap().looping(true);

        let values: Vec<f64> = (0..5).map(|_| source.next_value().unwrap()).collect();
        assert_eq!(values, vec![1.0, 2.0, 1.0, 2.0, 1.0]);
        assert!(source.description().ends_with("(loop)"));
    }

    #[test]
    fn test_empty_file_is_unavailable_even_when_looping() {
        let file = file_with("Time,Blood Sugar Level (mg/dL)\n");
        let mut source = FileSource::open(file.path()).unwrap().looping(true);
        assert!(source.next_value().is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(FileSource::open("/nonexistent/path/readings.csv").is_err());
    }

    #[test]
    fn test_description_names_path() {
        let file = file_with("100\n");
        let source = FileSource::open(file.path()).unwrap();
        assert_eq!(
            source.description(),
            format!("replay: {}", file.path().display())
        );
    }
}
