//! Locate the newest spreadsheet in a data directory.
//!
//! The directory is an explicitly passed storage root, not ambient process
//! state; callers decide where uploads land and hand the path in.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{AppError, ErrorKind};

/// Find the most-recently-modified `*.csv` file in `dir`.
///
/// Files whose metadata cannot be read are skipped; an unreadable or empty
/// directory is an error.
pub fn newest_csv(dir: &Path) -> Result<PathBuf, AppError> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        AppError::new(
            ErrorKind::Io,
            format!("Failed to read data directory '{}': {e}", dir.display()),
        )
    })?;

    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for entry in entries.flatten() {
        let path = entry.path();
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if !is_csv || !path.is_file() {
            continue;
        }

        let Ok(modified) = entry.metadata().and_then(|m| m.modified()) else {
            continue;
        };

        let replace = match &newest {
            Some((best, _)) => modified > *best,
            None => true,
        };
        if replace {
            newest = Some((modified, path));
        }
    }

    newest.map(|(_, path)| path).ok_or_else(|| {
        AppError::new(
            ErrorKind::Io,
            format!("No CSV files found in data directory '{}'.", dir.display()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn picks_most_recently_modified_csv() {
        let dir = std::env::temp_dir().join("price-forecast-discover-test");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        let older = dir.join("older.csv");
        let newer = dir.join("newer.csv");
        let ignored = dir.join("notes.txt");
        fs::write(&older, "Day,Price (VND)\n1,1\n").unwrap();
        fs::write(&ignored, "not a spreadsheet").unwrap();
        // Ensure a strictly later mtime on coarse-grained filesystems.
        std::thread::sleep(std::time::Duration::from_millis(20));
        fs::write(&newer, "Day,Price (VND)\n1,2\n").unwrap();

        let picked = newest_csv(&dir).unwrap();
        assert_eq!(picked, newer);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn empty_directory_is_io_error() {
        let dir = std::env::temp_dir().join("price-forecast-discover-empty");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        let err = newest_csv(&dir).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = std::env::temp_dir().join("price-forecast-discover-missing");
        let _ = fs::remove_dir_all(&dir);

        let err = newest_csv(&dir).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
