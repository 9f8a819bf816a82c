use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::CatalogError;
use crate::filter::SchemaFile;
use crate::model::Catalog;

/// Load the catalog from storage, `None` when no file exists yet.
pub fn load_catalog(path: &Path) -> Result<Option<Catalog>, CatalogError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(None);
        },
        Err(err) => return Err(err.into()),
    };

    let parsed = serde_json::from_str(&data)?;
    Ok(Some(parsed))
}

/// Save the catalog to storage.
pub fn save_catalog(path: &Path, catalog: &Catalog) -> Result<(), CatalogError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let payload = serde_json::to_string_pretty(catalog)?;
    write_atomic(path, payload.as_bytes())?;

    Ok(())
}

/// Load category attribute schemas.
///
/// A missing or unreadable schema file degrades to an empty map so the
/// grid still renders, only without attribute filters.
pub fn load_schemas(path: &Path) -> SchemaFile {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                log::warn!("schema file read failed: {err}");
            }
            return SchemaFile::new();
        },
    };

    match serde_json::from_str(&data) {
        Ok(schemas) => schemas,
        Err(err) => {
            log::warn!("schema file parse failed: {err}");
            SchemaFile::new()
        },
    }
}

/// Default catalog location under the user's config directory.
pub fn default_catalog_path() -> PathBuf {
    data_dir().join("catalog.json")
}

/// Default schema location under the user's config directory.
pub fn default_schemas_path() -> PathBuf {
    data_dir().join("schemas.json")
}

fn data_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home).join(".config").join("vetra");
    }

    std::env::temp_dir().join("vetra")
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};
    use std::{fs, process};

    use super::{load_catalog, load_schemas, save_catalog};
    use crate::model::Catalog;

    struct TempDirGuard {
        path: PathBuf,
    }

    impl TempDirGuard {
        fn new(test_name: &str) -> Self {
            let stamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("system time should be after epoch")
                .as_nanos();
            let path = std::env::temp_dir().join(format!(
                "vetra-catalog-storage-{test_name}-{}-{stamp}",
                process::id(),
            ));
            fs::create_dir_all(&path).expect("failed to create temporary dir");
            Self { path }
        }

        fn file_path(&self, name: &str) -> PathBuf {
            self.path.join(name)
        }
    }

    impl Drop for TempDirGuard {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.path);
        }
    }

    #[test]
    fn given_saved_catalog_when_loading_then_round_trip_succeeds() {
        let temp_dir = TempDirGuard::new("round-trip");
        let path = temp_dir.file_path("catalog.json");
        let payload = Catalog::empty();

        save_catalog(&path, &payload).expect("save should succeed");
        let loaded = load_catalog(&path).expect("load should work");

        let loaded = loaded.expect("payload should exist");
        assert_eq!(loaded.version, payload.version);
        assert!(loaded.products.is_empty());
    }

    #[test]
    fn given_missing_file_when_loading_then_none_is_returned() {
        let temp_dir = TempDirGuard::new("missing");
        let path = temp_dir.file_path("catalog.json");

        let loaded = load_catalog(&path).expect("missing file should be ok");

        assert!(loaded.is_none());
    }

    #[test]
    fn given_corrupted_json_when_loading_then_returns_json_error() {
        let temp_dir = TempDirGuard::new("corrupt");
        let path = temp_dir.file_path("catalog.json");
        fs::write(&path, "{not valid json")
            .expect("failed to write corrupted payload");

        let result = load_catalog(&path);

        assert!(matches!(result, Err(super::CatalogError::Json(_))));
    }

    #[test]
    fn given_missing_schema_file_when_loading_then_empty_map_is_returned() {
        let temp_dir = TempDirGuard::new("schemas-missing");
        let path = temp_dir.file_path("schemas.json");

        assert!(load_schemas(&path).is_empty());
    }

    #[test]
    fn given_corrupt_schema_file_when_loading_then_empty_map_is_returned() {
        let temp_dir = TempDirGuard::new("schemas-corrupt");
        let path = temp_dir.file_path("schemas.json");
        fs::write(&path, "[1, 2").expect("failed to write corrupted payload");

        assert!(load_schemas(&path).is_empty());
    }
}
