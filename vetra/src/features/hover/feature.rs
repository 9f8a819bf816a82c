use std::time::Duration;

use iced::Task;

use super::event::HoverEvent;
use super::model::{HOVER_CLOSE_DELAY_MS, PanelId};
use super::state::HoverState;
use crate::app::Event as AppEvent;
use crate::features::Feature;

/// Hover feature root that owns panel hover state and reduction logic.
#[derive(Debug)]
pub(crate) struct HoverFeature {
    state: HoverState,
}

impl HoverFeature {
    /// Construct the hover feature with no panels mounted yet.
    pub(crate) fn new() -> Self {
        Self {
            state: HoverState::new(),
        }
    }

    /// Return whether a panel is currently in the open state.
    pub(crate) fn is_open(&self, panel: PanelId) -> bool {
        self.state.is_open(panel)
    }
}

impl Feature for HoverFeature {
    type Event = HoverEvent;
    type Ctx<'a>
        = ()
    where
        Self: 'a;

    fn reduce<'a>(
        &mut self,
        event: HoverEvent,
        _ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent> {
        match event {
            HoverEvent::Remount => {
                self.state.mount_all();
                Task::none()
            },
            HoverEvent::PointerEntered { panel } => {
                self.state.pointer_entered(panel);
                Task::none()
            },
            HoverEvent::PointerExited { panel } => {
                match self.state.pointer_exited(panel) {
                    Some(token) => schedule_close(panel, token),
                    None => Task::none(),
                }
            },
            HoverEvent::CloseElapsed { panel, token } => {
                self.state.close_elapsed(panel, token);
                Task::none()
            },
        }
    }
}

/// Deliver the pending close back to the reducer after the hover delay.
fn schedule_close(panel: PanelId, token: u64) -> Task<AppEvent> {
    Task::perform(
        async move {
            tokio::time::sleep(Duration::from_millis(HOVER_CLOSE_DELAY_MS))
                .await;
            (panel, token)
        },
        |(panel, token)| AppEvent::Hover(HoverEvent::CloseElapsed {
            panel,
            token,
        }),
    )
}
