use iced::Size;

/// Top-level screen shown in the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Screen {
    #[default]
    Browse,
    Product,
    Cart,
}

#[derive(Default)]
pub(crate) struct State {
    pub(crate) screen_size: Size,
    pub(crate) screen: Screen,
}

impl State {
    pub(crate) fn new(screen_size: Size) -> Self {
        Self {
            screen_size,
            screen: Screen::Browse,
        }
    }

    pub(crate) fn set_screen_size(&mut self, size: Size) {
        self.screen_size = size;
    }
}
