use super::model::PanelId;

/// Events driving the sidebar hover controller.
#[derive(Debug, Clone)]
pub(crate) enum HoverEvent {
    /// Fired on startup and after every content swap.
    Remount,
    PointerEntered { panel: PanelId },
    PointerExited { panel: PanelId },
    /// Delivered by the scheduled close timer.
    CloseElapsed { panel: PanelId, token: u64 },
}
