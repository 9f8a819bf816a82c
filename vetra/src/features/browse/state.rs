use std::collections::{BTreeMap, BTreeSet};

use vetra_catalog::{FeatureValue, FilterQuery};

/// Grid query state: category, filter selections and search.
#[derive(Debug, Default)]
pub(crate) struct BrowseState {
    category: Option<String>,
    colors: BTreeSet<String>,
    sizes: BTreeSet<String>,
    brightness: BTreeSet<String>,
    min_price_input: String,
    max_price_input: String,
    features: BTreeMap<String, Vec<FeatureValue>>,
    search_input: String,
    search: Option<String>,
}

impl BrowseState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub(crate) fn colors(&self) -> &BTreeSet<String> {
        &self.colors
    }

    pub(crate) fn sizes(&self) -> &BTreeSet<String> {
        &self.sizes
    }

    pub(crate) fn brightness(&self) -> &BTreeSet<String> {
        &self.brightness
    }

    pub(crate) fn min_price_input(&self) -> &str {
        &self.min_price_input
    }

    pub(crate) fn max_price_input(&self) -> &str {
        &self.max_price_input
    }

    pub(crate) fn features(&self) -> &BTreeMap<String, Vec<FeatureValue>> {
        &self.features
    }

    pub(crate) fn search_input(&self) -> &str {
        &self.search_input
    }

    pub(crate) fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Switch category. Feature selections are schema-bound, so they
    /// reset; the rest of the filters carry over.
    pub(crate) fn set_category(&mut self, slug: Option<String>) {
        self.category = slug;
        self.features.clear();
    }

    pub(crate) fn toggle_color(&mut self, color: &str) {
        toggle(&mut self.colors, color.to_lowercase());
    }

    pub(crate) fn toggle_size(&mut self, size: &str) {
        toggle(&mut self.sizes, String::from(size));
    }

    pub(crate) fn toggle_brightness(&mut self, value: &str) {
        toggle(&mut self.brightness, value.to_lowercase());
    }

    pub(crate) fn set_min_price_input(&mut self, value: String) {
        self.min_price_input = value;
    }

    pub(crate) fn set_max_price_input(&mut self, value: String) {
        self.max_price_input = value;
    }

    /// Toggle a schema feature value on or off.
    pub(crate) fn toggle_feature(&mut self, key: &str, value: FeatureValue) {
        let normalized = value.normalized();
        let values = self.features.entry(String::from(key)).or_default();
        match values.iter().position(|existing| existing == &normalized) {
            Some(index) => {
                values.remove(index);
                if values.is_empty() {
                    self.features.remove(key);
                }
            },
            None => values.push(normalized),
        }
    }

    pub(crate) fn feature_selected(
        &self,
        key: &str,
        value: &FeatureValue,
    ) -> bool {
        let normalized = value.normalized();
        self.features
            .get(key)
            .is_some_and(|values| values.contains(&normalized))
    }

    pub(crate) fn set_search_input(&mut self, value: String) {
        self.search_input = value;
    }

    /// Commit the search box; a blank input clears the search.
    pub(crate) fn submit_search(&mut self) {
        let trimmed = self.search_input.trim();
        self.search = if trimmed.is_empty() {
            None
        } else {
            Some(String::from(trimmed))
        };
    }

    /// Drop every selection except the category.
    pub(crate) fn clear_filters(&mut self) {
        self.colors.clear();
        self.sizes.clear();
        self.brightness.clear();
        self.min_price_input.clear();
        self.max_price_input.clear();
        self.features.clear();
        self.search_input.clear();
        self.search = None;
    }

    /// True when any selection narrows the grid.
    pub(crate) fn has_active_filters(&self) -> bool {
        !self.query().is_unfiltered()
    }

    /// Derive the filter query from the current selections.
    ///
    /// Unparsable price inputs are ignored rather than failing.
    pub(crate) fn query(&self) -> FilterQuery {
        FilterQuery {
            category: self.category.clone(),
            colors: self.colors.clone(),
            negative_colors: BTreeSet::new(),
            sizes: self.sizes.clone(),
            brightness: self.brightness.clone(),
            min_price_cents: parse_price_input(&self.min_price_input),
            max_price_cents: parse_price_input(&self.max_price_input),
            features: self.features.clone(),
            negative_features: BTreeMap::new(),
            search: self.search.clone(),
        }
    }
}

fn toggle(set: &mut BTreeSet<String>, value: String) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

/// Parse a price text input, in whole currency units, into cents.
fn parse_price_input(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let value: f64 = trimmed.parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some((value * 100.0).round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_color_toggled_twice_when_queried_then_selection_round_trips() {
        let mut state = BrowseState::new();

        state.toggle_color("Black");
        assert!(state.query().colors.contains("black"));

        state.toggle_color("Black");
        assert!(state.query().colors.is_empty());
    }

    #[test]
    fn given_category_switch_when_applied_then_feature_selections_reset() {
        let mut state = BrowseState::new();
        state.toggle_feature("has_belt", FeatureValue::Bool(true));

        state.set_category(Some(String::from("pants")));

        assert!(state.features().is_empty());
        assert_eq!(state.category(), Some("pants"));
    }

    #[test]
    fn given_price_inputs_when_queried_then_valid_values_parse_to_cents() {
        let mut state = BrowseState::new();
        state.set_min_price_input(String::from("49.99"));
        state.set_max_price_input(String::from("not a number"));

        let query = state.query();

        assert_eq!(query.min_price_cents, Some(4_999));
        assert_eq!(query.max_price_cents, None);
    }

    #[test]
    fn given_blank_search_submission_when_queried_then_search_clears() {
        let mut state = BrowseState::new();
        state.set_search_input(String::from("wool"));
        state.submit_search();
        assert_eq!(state.search(), Some("wool"));

        state.set_search_input(String::from("   "));
        state.submit_search();

        assert_eq!(state.search(), None);
    }

    #[test]
    fn given_feature_toggle_when_repeated_then_value_is_removed() {
        let mut state = BrowseState::new();
        let value = FeatureValue::Text(String::from("Casual"));

        state.toggle_feature("style", value.clone());
        assert!(state.feature_selected("style", &value));

        state.toggle_feature("style", value.clone());
        assert!(!state.feature_selected("style", &value));
        assert!(state.features().is_empty());
    }

    #[test]
    fn given_clear_filters_when_applied_then_category_survives() {
        let mut state = BrowseState::new();
        state.set_category(Some(String::from("coats")));
        state.toggle_color("Black");
        state.set_search_input(String::from("wool"));
        state.submit_search();

        state.clear_filters();

        assert_eq!(state.category(), Some("coats"));
        assert!(!state.has_active_filters());
    }
}
