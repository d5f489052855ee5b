//! CSV output.
//!
//! Rows go to a temp file next to the destination, which is renamed into
//! place only after every row is flushed.

use super::types::{GazetteerError, PlaceOutput};
use csv::{Terminator, WriterBuilder};
use log::info;
use std::fs;
use std::io;
use std::path::Path;
use tempfile::NamedTempFile;

pub const DEFAULT_OUTPUT: &str = "us_all_census_places.csv";

const HEADER: [&str; 5] = ["country_code", "state_slug", "name", "slug", "population"];

/// Write `rows` as comma-separated text with a header row to `path`.
pub fn persist(rows: &[PlaceOutput], path: &Path) -> Result<(), GazetteerError> {
    let write_err = |source: io::Error| GazetteerError::Write {
        path: path.display().to_string(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    if let Some(perms) = output_permissions(path) {
        tmp.as_file().set_permissions(perms).map_err(write_err)?;
    }

    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(tmp);

    wtr.write_record(HEADER).map_err(|e| write_err(e.into()))?;
    for row in rows {
        wtr.serialize(row).map_err(|e| write_err(e.into()))?;
    }

    let tmp = wtr.into_inner().map_err(|e| write_err(e.into_error()))?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    info!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Mode for the renamed file: keep an existing target's permissions,
/// otherwise 0644 (temp files are created 0600).
fn output_permissions(path: &Path) -> Option<fs::Permissions> {
    if let Ok(meta) = fs::metadata(path) {
        return Some(meta.permissions());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(fs::Permissions::from_mode(0o644))
    }
    #[cfg(not(unix))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn rows() -> Vec<PlaceOutput> {
        vec![
            PlaceOutput {
                country_code: "us",
                state_slug: Some("california".into()),
                name: "Los Angeles".into(),
                slug: "los-angeles".into(),
                population: 3898747,
            },
            PlaceOutput {
                country_code: "us",
                state_slug: None,
                name: "Ponce, zona urbana".into(),
                slug: "ponce-zona-urbana".into(),
                population: 120000,
            },
        ]
    }

    #[test]
    fn test_persist_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        persist(&rows(), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "country_code,state_slug,name,slug,population\n\
us,california,Los Angeles,los-angeles,3898747\n\
us,,\"Ponce, zona urbana\",ponce-zona-urbana,120000\n"
        );
    }

    #[test]
    fn test_persist_empty_still_has_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        persist(&[], &path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "country_code,state_slug,name,slug,population\n"
        );
    }

    #[test]
    fn test_persist_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale").unwrap();
        persist(&rows(), &path).unwrap();
        assert!(fs::read_to_string(&path).unwrap().starts_with("country_code,"));
    }

    #[test]
    fn test_persist_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.csv");
        let b = dir.path().join("b.csv");
        persist(&rows(), &a).unwrap();
        persist(&rows(), &b).unwrap();
        assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
    }

    #[test]
    fn test_persist_missing_dir_leaves_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("out.csv");
        let err = persist(&rows(), &path).unwrap_err();
        assert!(matches!(err, GazetteerError::Write { .. }));
        assert!(!path.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        persist(&[], &path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_overwrite_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o664)).unwrap();

        persist(&rows(), &path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o664);
    }
}
