use std::collections::BTreeMap;

use super::model::{PANELS, PanelId};

/// Hover-intent state for one mounted panel.
#[derive(Debug, Default)]
struct PanelHoverState {
    open: bool,
    pending_close: Option<u64>,
}

/// Registry of mounted panels and their hover-intent state.
///
/// A panel must be mounted before pointer events affect it; mounting is
/// idempotent so repeated content swaps never double-register. At most
/// one pending close exists per panel, identified by a token so a stale
/// timer firing after an intervening pointer enter is ignored.
#[derive(Debug, Default)]
pub(crate) struct HoverState {
    panels: BTreeMap<PanelId, PanelHoverState>,
    next_token: u64,
}

impl HoverState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Mount the fixed panel set; already-mounted panels are skipped
    /// and keep their open/pending state.
    pub(crate) fn mount_all(&mut self) {
        for panel in PANELS {
            self.panels.entry(panel).or_default();
        }
    }

    pub(crate) fn is_mounted(&self, panel: PanelId) -> bool {
        self.panels.contains_key(&panel)
    }

    pub(crate) fn mounted_count(&self) -> usize {
        self.panels.len()
    }

    pub(crate) fn is_open(&self, panel: PanelId) -> bool {
        self.panels
            .get(&panel)
            .map(|state| state.open)
            .unwrap_or(false)
    }

    /// Open the panel and cancel its pending close, if any.
    pub(crate) fn pointer_entered(&mut self, panel: PanelId) {
        let Some(state) = self.panels.get_mut(&panel) else {
            return;
        };

        state.pending_close = None;
        state.open = true;
    }

    /// Record a fresh pending close, replacing any previous one.
    ///
    /// Returns the token the scheduled close must present, or `None`
    /// for an unmounted panel.
    pub(crate) fn pointer_exited(&mut self, panel: PanelId) -> Option<u64> {
        if !self.panels.contains_key(&panel) {
            return None;
        }

        self.next_token += 1;
        let token = self.next_token;
        if let Some(state) = self.panels.get_mut(&panel) {
            state.pending_close = Some(token);
        }
        Some(token)
    }

    /// Commit a scheduled close if its token is still current.
    ///
    /// Returns whether the panel actually closed.
    pub(crate) fn close_elapsed(&mut self, panel: PanelId, token: u64) -> bool {
        let Some(state) = self.panels.get_mut(&panel) else {
            return false;
        };

        if state.pending_close != Some(token) {
            return false;
        }

        state.pending_close = None;
        state.open = false;
        true
    }
}
