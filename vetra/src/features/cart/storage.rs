use std::fs;
use std::path::Path;

use vetra_catalog::Cart;

use super::errors::CartStoreError;

/// Load the persisted cart, `None` when no file exists yet.
pub(crate) fn load_cart(path: &Path) -> Result<Option<Cart>, CartStoreError> {
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

/// Save the cart to disk.
pub(crate) fn save_cart(path: &Path, cart: &Cart) -> Result<(), CartStoreError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let payload = serde_json::to_string_pretty(cart)?;
    write_atomic(path, payload.as_bytes())?;

    Ok(())
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

    use vetra_catalog::Cart;

    use super::{load_cart, save_cart};

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
                "vetra-cart-storage-{test_name}-{}-{stamp}",
                process::id(),
            ));
            fs::create_dir_all(&path).expect("failed to create temporary dir");
            Self { path }
        }

        fn file_path(&self) -> PathBuf {
            self.path.join("cart.json")
        }
    }

    impl Drop for TempDirGuard {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.path);
        }
    }

    #[test]
    fn given_saved_cart_when_loading_then_round_trip_succeeds() {
        let temp_dir = TempDirGuard::new("round-trip");
        let path = temp_dir.file_path();
        let mut cart = Cart::new();
        cart.add(7);
        cart.add(7);

        save_cart(&path, &cart).expect("save should succeed");
        let loaded = load_cart(&path)
            .expect("load should work")
            .expect("payload should exist");

        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn given_missing_file_when_loading_then_none_is_returned() {
        let temp_dir = TempDirGuard::new("missing");

        let loaded =
            load_cart(&temp_dir.file_path()).expect("missing file is fine");

        assert!(loaded.is_none());
    }

    #[test]
    fn given_corrupted_json_when_loading_then_returns_json_error() {
        let temp_dir = TempDirGuard::new("corrupt");
        let path = temp_dir.file_path();
        fs::write(&path, "[oops").expect("failed to write corrupted payload");

        let result = load_cart(&path);

        assert!(matches!(result, Err(super::CartStoreError::Json(_))));
    }
}
