use iced::Task;
use vetra_catalog::{Catalog, Product, SchemaFile, filter};

use super::event::BrowseEvent;
use super::state::BrowseState;
use crate::app::Event as AppEvent;
use crate::features::Feature;
use crate::features::hover::HoverEvent;

/// Runtime context required by the browse reducer.
pub(crate) struct BrowseCtx<'a> {
    pub(crate) catalog: &'a Catalog,
    pub(crate) schemas: &'a SchemaFile,
}

/// Browse feature root owning grid query state.
#[derive(Debug)]
pub(crate) struct BrowseFeature {
    state: BrowseState,
}

impl BrowseFeature {
    /// Construct the browse feature with an unfiltered grid.
    pub(crate) fn new() -> Self {
        Self {
            state: BrowseState::new(),
        }
    }

    /// Return read-only access to the grid query state.
    pub(crate) fn state(&self) -> &BrowseState {
        &self.state
    }

    /// Products visible under the current query.
    pub(crate) fn visible_products<'a>(
        &self,
        catalog: &'a Catalog,
        schemas: &SchemaFile,
    ) -> Vec<&'a Product> {
        filter::apply(catalog, &self.state.query(), schemas)
    }
}

impl Feature for BrowseFeature {
    type Event = BrowseEvent;
    type Ctx<'a>
        = BrowseCtx<'a>
    where
        Self: 'a;

    fn reduce<'a>(
        &mut self,
        event: BrowseEvent,
        _ctx: &BrowseCtx<'a>,
    ) -> Task<AppEvent> {
        match event {
            // Category switches, search submissions and filter resets
            // replace the whole grid region, so the hover panels get
            // their remount signal, as after any content swap.
            BrowseEvent::CategorySelected { slug } => {
                self.state.set_category(slug);
                Task::done(AppEvent::Hover(HoverEvent::Remount))
            },
            BrowseEvent::SearchSubmitted => {
                self.state.submit_search();
                Task::done(AppEvent::Hover(HoverEvent::Remount))
            },
            BrowseEvent::FiltersCleared => {
                self.state.clear_filters();
                Task::done(AppEvent::Hover(HoverEvent::Remount))
            },
            BrowseEvent::ColorToggled { color } => {
                self.state.toggle_color(&color);
                Task::none()
            },
            BrowseEvent::SizeToggled { size } => {
                self.state.toggle_size(&size);
                Task::none()
            },
            BrowseEvent::BrightnessToggled { value } => {
                self.state.toggle_brightness(&value);
                Task::none()
            },
            BrowseEvent::MinPriceChanged { value } => {
                self.state.set_min_price_input(value);
                Task::none()
            },
            BrowseEvent::MaxPriceChanged { value } => {
                self.state.set_max_price_input(value);
                Task::none()
            },
            BrowseEvent::FeatureToggled { key, value } => {
                self.state.toggle_feature(&key, value);
                Task::none()
            },
            BrowseEvent::SearchInputChanged { value } => {
                self.state.set_search_input(value);
                Task::none()
            },
        }
    }
}
