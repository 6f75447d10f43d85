//! Roster file load/save
//!
//! Features:
//! - Header-driven CSV (`name,points,avatar`)
//! - Missing file loads as an empty roster
//! - Atomic save (tmp → save, old save → backup)

pub mod csv;

use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::board::{PlayerRecord, Roster};

/// Read roster records from `path`. A missing file yields no records.
pub fn load_records(path: &Path) -> Result<Vec<PlayerRecord>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!("Roster {} not found, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("read roster {}", path.display()));
        }
    };
    let text = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = text {
        log::warn!(
            "Roster {} is not valid UTF-8, replacing undecodable bytes",
            path.display()
        );
    }
    let records = csv::parse(&text);
    log::debug!("Read {} roster rows from {}", records.len(), path.display());
    Ok(records)
}

/// Write the roster to `path`, keeping the previous file as `<path>.bak`
pub fn save_roster(path: &Path, roster: &Roster) -> Result<()> {
    save_records(path, &roster.records())
}

pub fn save_records(path: &Path, records: &[PlayerRecord]) -> Result<()> {
    let tmp = sibling(path, "tmp");
    fs::write(&tmp, csv::render(records))
        .with_context(|| format!("write roster {}", tmp.display()))?;

    if path.exists() {
        let backup = sibling(path, "bak");
        fs::rename(path, &backup)
            .with_context(|| format!("back up roster to {}", backup.display()))?;
    }
    fs::rename(&tmp, path).with_context(|| format!("replace roster {}", path.display()))?;

    log::info!("Roster saved ({} players)", records.len());
    Ok(())
}

fn sibling(path: &Path, ext: &str) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(ext);
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let records = load_records(&dir.path().join("players.csv")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_save_then_load_with_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.csv");
        let roster = Roster::from_records(
            100.0,
            vec![
                PlayerRecord::new("A", 40.0, "a.png"),
                PlayerRecord::new("B", 12.5, ""),
            ],
        );
        save_roster(&path, &roster).unwrap();
        save_roster(&path, &roster).unwrap();
        assert!(dir.path().join("players.csv.bak").exists());
        assert!(!dir.path().join("players.csv.tmp").exists());

        let loaded = Roster::from_records(100.0, load_records(&path).unwrap());
        assert_eq!(loaded.records(), roster.records());
    }

    #[test]
    fn test_non_utf8_roster_still_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.csv");
        fs::write(&path, b"name,points,avatar\nJos\xe9,10,\nAmy,20,\n").unwrap();

        let roster = Roster::from_records(100.0, load_records(&path).unwrap());
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get("Jos\u{fffd}").map(|p| p.score), Some(10.0));
        assert_eq!(roster.get("Amy").map(|p| p.score), Some(20.0));
    }

    #[test]
    fn test_unreadable_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be read as a file
        assert!(load_records(dir.path()).is_err());
    }
}
