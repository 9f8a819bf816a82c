const DEFAULT_MAX_CHAR_COUNT_BEFORE_ELIPSIZE: usize = 28;

/// Truncate long product names for grid cards.
pub(crate) fn ellipsize(s: &str) -> String {
    let total = s.chars().count();
    if total <= DEFAULT_MAX_CHAR_COUNT_BEFORE_ELIPSIZE {
        return s.to_owned();
    }

    let keep = DEFAULT_MAX_CHAR_COUNT_BEFORE_ELIPSIZE - 2;
    let head: String = s.chars().take(keep).collect();
    format!("{head}..")
}

/// Format integer cents as a display price.
pub(crate) fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Turn a schema feature key into a panel label.
///
/// `style_category` becomes "Style", `has_belt` becomes "Has belt".
pub(crate) fn format_label(key: &str) -> String {
    if key.is_empty() {
        return String::new();
    }

    let label = key
        .replace("_category", "")
        .replace("has_", "Has ")
        .replace("is_", "Is ")
        .replace('_', " ");
    let label = label.trim();

    let mut chars = label.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().collect::<String>() + chars.as_str()
        },
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_short_name_when_ellipsizing_then_it_is_unchanged() {
        assert_eq!(ellipsize("Wool Coat"), "Wool Coat");
    }

    #[test]
    fn given_long_name_when_ellipsizing_then_tail_is_dropped() {
        let long = "An Exceptionally Long Product Name";

        let shortened = ellipsize(long);

        assert_eq!(shortened.chars().count(), 28);
        assert!(shortened.ends_with(".."));
    }

    #[test]
    fn given_cents_when_formatting_then_two_decimals_render() {
        assert_eq!(format_price(12_999), "$129.99");
        assert_eq!(format_price(500), "$5.00");
        assert_eq!(format_price(9), "$0.09");
    }

    #[test]
    fn given_feature_keys_when_labelling_then_prefixes_expand() {
        assert_eq!(format_label("style_category"), "Style");
        assert_eq!(format_label("has_belt"), "Has belt");
        assert_eq!(format_label("is_waterproof"), "Is waterproof");
        assert_eq!(format_label("collar_type"), "Collar type");
    }
}
