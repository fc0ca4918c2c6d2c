//! Puzzle inputs read from a local directory
//!
//! Layout: `{input_dir}/{year}_day{day:02}.txt`

use crate::error::ExecutorError;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Read-only store of puzzle inputs on disk
#[derive(Debug, Clone)]
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path where the input for a year/day is expected
    pub fn path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Whether an input file exists for the puzzle
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.path(year, day).is_file()
    }

    /// Read the input for a puzzle
    pub fn get(&self, year: u16, day: u8) -> Result<String, ExecutorError> {
        let path = self.path(year, day);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ExecutorError::MissingInput { year, day, path },
            _ => ExecutorError::InputRead { year, day, source },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_format() {
        let store = InputStore::new(PathBuf::from("/inputs"));
        assert_eq!(store.path(2025, 8), PathBuf::from("/inputs/2025_day08.txt"));
        assert_eq!(store.path(2023, 25), PathBuf::from("/inputs/2023_day25.txt"));
    }

    #[test]
    fn test_reads_existing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        let input = "162,817,812\n57,618,57\n";
        fs::write(temp.path().join("2025_day08.txt"), input).unwrap();

        assert!(store.contains(2025, 8));
        assert_eq!(store.get(2025, 8).unwrap(), input);
    }

    #[test]
    fn test_missing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2025, 1));
        match store.get(2025, 1) {
            Err(ExecutorError::MissingInput { year, day, path }) => {
                assert_eq!((year, day), (2025, 1));
                assert_eq!(path, store.path(2025, 1));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_directory_in_place_of_file() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("2025_day03.txt")).unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2025, 3));
        assert!(matches!(store.get(2025, 3), Err(ExecutorError::InputRead { .. })));
    }
}
