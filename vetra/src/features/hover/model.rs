/// Delay before a pointer exit commits to closing a panel.
pub(crate) const HOVER_CLOSE_DELAY_MS: u64 = 300;

/// The fixed set of hover panels on a storefront page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum PanelId {
    Category,
    Filter,
}

/// Panels mounted on every content swap.
pub(crate) const PANELS: [PanelId; 2] = [PanelId::Category, PanelId::Filter];
