/// Delay before a successful add-to-cart reverts to the idle button.
pub(crate) const CART_BUTTON_RESET_DELAY_MS: u64 = 2000;

pub(crate) const CART_BUTTON_IDLE_LABEL: &str = "Add to Cart";
pub(crate) const CART_BUTTON_LOADING_LABEL: &str = "Adding...";
pub(crate) const CART_BUTTON_SUCCESS_LABEL: &str = "Added to Cart! \u{2713}";

/// Observable phases of the add-to-cart control.
///
/// The error branch of the response transition restores Idle within the
/// same reduction, so it never persists as a phase of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum CartButtonPhase {
    #[default]
    Idle,
    Loading,
    Success,
}

/// Parse a serialized image manifest into gallery paths.
///
/// The manifest is an opaque string handed over by the catalog; absence
/// or malformed content yields an empty gallery rather than an error.
pub(crate) fn parse_image_manifest(manifest: Option<&str>) -> Vec<String> {
    let Some(raw) = manifest else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(paths) => paths,
        Err(err) => {
            log::warn!("image manifest parse failed: {err}");
            Vec::new()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::parse_image_manifest;

    #[test]
    fn given_valid_manifest_when_parsing_then_paths_are_returned() {
        let paths =
            parse_image_manifest(Some(r#"["a.jpg","b.jpg","c.jpg"]"#));

        assert_eq!(paths, vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn given_absent_manifest_when_parsing_then_gallery_is_empty() {
        assert!(parse_image_manifest(None).is_empty());
    }

    #[test]
    fn given_malformed_manifest_when_parsing_then_gallery_is_empty() {
        assert!(parse_image_manifest(Some("not json")).is_empty());
        assert!(parse_image_manifest(Some(r#"{"a": 1}"#)).is_empty());
    }
}
