use super::model::{
    CART_BUTTON_LOADING_LABEL, CART_BUTTON_SUCCESS_LABEL, CartButtonPhase,
    parse_image_manifest,
};

/// Ordered image list plus the cursor of the rendered image.
///
/// The cursor is only meaningful while the list is non-empty; every
/// operation on an empty gallery is a no-op.
#[derive(Debug, Default)]
pub(crate) struct GalleryState {
    images: Vec<String>,
    index: usize,
}

impl GalleryState {
    /// Build the gallery from a serialized manifest, tolerating
    /// absence and malformed content.
    pub(crate) fn from_manifest(manifest: Option<&str>) -> Self {
        Self {
            images: parse_image_manifest(manifest),
            index: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.images.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn images(&self) -> &[String] {
        &self.images
    }

    /// The render guard: the path under the cursor, or nothing.
    ///
    /// Never yields a blank source, even after an out-of-range
    /// `set_image`.
    pub(crate) fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    /// Move the cursor unconditionally; rendering bounds it.
    pub(crate) fn set_image(&mut self, index: usize) {
        self.index = index;
    }

    /// Advance with wraparound. An out-of-range cursor heals here.
    pub(crate) fn next_image(&mut self) {
        let len = self.images.len();
        if len == 0 {
            return;
        }
        self.index = (self.index % len + 1) % len;
    }

    /// Step back with wraparound, staying non-negative.
    pub(crate) fn previous_image(&mut self) {
        let len = self.images.len();
        if len == 0 {
            return;
        }
        self.index = (self.index % len + len - 1) % len;
    }
}

/// Add-to-cart control state machine.
///
/// Idle -> Loading on the request-configured signal, Loading -> Success
/// on a 200 response (reverting after a delay), Loading -> Idle on any
/// other status. The idle label is captured once, at construction, so
/// every cycle restores the true original.
#[derive(Debug)]
pub(crate) struct CartButtonState {
    phase: CartButtonPhase,
    idle_label: String,
    reset_token: u64,
}

impl CartButtonState {
    pub(crate) fn new(idle_label: &str) -> Self {
        Self {
            phase: CartButtonPhase::Idle,
            idle_label: String::from(idle_label),
            reset_token: 0,
        }
    }

    pub(crate) fn phase(&self) -> CartButtonPhase {
        self.phase
    }

    /// The label the control currently shows.
    pub(crate) fn label(&self) -> &str {
        match self.phase {
            CartButtonPhase::Idle => &self.idle_label,
            CartButtonPhase::Loading => CART_BUTTON_LOADING_LABEL,
            CartButtonPhase::Success => CART_BUTTON_SUCCESS_LABEL,
        }
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.phase == CartButtonPhase::Idle
    }

    pub(crate) fn shows_success_style(&self) -> bool {
        self.phase == CartButtonPhase::Success
    }

    /// Enter Loading from Idle. Returns false for a re-entrant press,
    /// which the reducer drops.
    pub(crate) fn begin_loading(&mut self) -> bool {
        if self.phase != CartButtonPhase::Idle {
            return false;
        }
        self.phase = CartButtonPhase::Loading;
        true
    }

    /// Branch on the response status.
    ///
    /// 200 enters Success and returns the token the delayed reset must
    /// present; anything else restores Idle immediately. A response
    /// outside Loading is ignored.
    pub(crate) fn apply_response(&mut self, status: u16) -> Option<u64> {
        if self.phase != CartButtonPhase::Loading {
            return None;
        }

        if status == 200 {
            self.phase = CartButtonPhase::Success;
            self.reset_token += 1;
            Some(self.reset_token)
        } else {
            self.phase = CartButtonPhase::Idle;
            None
        }
    }

    /// Revert Success to Idle when the delayed reset is still current.
    pub(crate) fn reset_elapsed(&mut self, token: u64) {
        if self.phase == CartButtonPhase::Success
            && self.reset_token == token
        {
            self.phase = CartButtonPhase::Idle;
        }
    }
}

/// State of the currently open product page.
#[derive(Debug)]
pub(crate) struct ProductPageState {
    slug: String,
    variant_id: Option<u64>,
    color: Option<String>,
    size: Option<String>,
    pub(crate) gallery: GalleryState,
    pub(crate) cart_button: CartButtonState,
}

impl ProductPageState {
    /// Build page state for a freshly opened product.
    ///
    /// The idle button label is captured here, before any transition.
    pub(crate) fn new(
        slug: String,
        variant_id: Option<u64>,
        color: Option<String>,
        size: Option<String>,
        manifest: Option<&str>,
        idle_label: &str,
    ) -> Self {
        Self {
            slug,
            variant_id,
            color,
            size,
            gallery: GalleryState::from_manifest(manifest),
            cart_button: CartButtonState::new(idle_label),
        }
    }

    pub(crate) fn slug(&self) -> &str {
        &self.slug
    }

    pub(crate) fn variant_id(&self) -> Option<u64> {
        self.variant_id
    }

    pub(crate) fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub(crate) fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    /// Swap to another variant, rebuilding the gallery from its
    /// manifest. The cart button keeps its cycle.
    pub(crate) fn set_variant(
        &mut self,
        variant_id: Option<u64>,
        color: Option<String>,
        size: Option<String>,
        manifest: Option<&str>,
    ) {
        self.variant_id = variant_id;
        self.color = color;
        self.size = size;
        self.gallery = GalleryState::from_manifest(manifest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_three_images_when_stepping_back_from_start_then_cursor_wraps() {
        let mut gallery = GalleryState::from_manifest(Some(
            r#"["a.jpg","b.jpg","c.jpg"]"#,
        ));

        gallery.previous_image();

        assert_eq!(gallery.index(), 2);
        assert_eq!(gallery.current(), Some("c.jpg"));

        gallery.next_image();

        assert_eq!(gallery.index(), 0);
        assert_eq!(gallery.current(), Some("a.jpg"));
    }

    #[test]
    fn given_gallery_of_length_l_when_advancing_l_times_then_cursor_returns()
    {
        let mut gallery = GalleryState::from_manifest(Some(
            r#"["a.jpg","b.jpg","c.jpg","d.jpg"]"#,
        ));
        gallery.set_image(1);

        for _ in 0..gallery.len() {
            gallery.next_image();
        }

        assert_eq!(gallery.index(), 1);
    }

    #[test]
    fn given_previous_after_next_when_stepping_then_cursor_is_unchanged() {
        let mut gallery =
            GalleryState::from_manifest(Some(r#"["a.jpg","b.jpg"]"#));

        gallery.next_image();
        gallery.previous_image();

        assert_eq!(gallery.index(), 0);
    }

    #[test]
    fn given_empty_gallery_when_navigating_then_nothing_renders_or_panics() {
        let mut gallery = GalleryState::from_manifest(None);

        gallery.next_image();
        gallery.previous_image();
        gallery.set_image(3);

        assert!(gallery.is_empty());
        assert_eq!(gallery.current(), None);
    }

    #[test]
    fn given_out_of_range_cursor_when_rendering_then_guard_blanks_nothing() {
        let mut gallery =
            GalleryState::from_manifest(Some(r#"["a.jpg","b.jpg"]"#));

        gallery.set_image(9);

        assert_eq!(gallery.current(), None);

        gallery.next_image();

        assert!(gallery.current().is_some());
    }

    #[test]
    fn given_request_configured_when_loading_begins_then_control_disables() {
        let mut button = CartButtonState::new("Add to Cart");

        assert!(button.begin_loading());

        assert_eq!(button.phase(), CartButtonPhase::Loading);
        assert!(!button.is_enabled());
        assert_eq!(button.label(), "Adding...");
    }

    #[test]
    fn given_loading_when_pressed_again_then_reentry_is_rejected() {
        let mut button = CartButtonState::new("Add to Cart");
        let _ = button.begin_loading();

        assert!(!button.begin_loading());
    }

    #[test]
    fn given_ok_response_when_reset_elapses_then_original_label_restores() {
        let mut button = CartButtonState::new("Add to Cart");
        let _ = button.begin_loading();

        let token = button
            .apply_response(200)
            .expect("success should schedule a reset");

        assert!(button.shows_success_style());
        assert_eq!(button.label(), "Added to Cart! \u{2713}");
        assert!(!button.is_enabled());

        button.reset_elapsed(token);

        assert_eq!(button.phase(), CartButtonPhase::Idle);
        assert_eq!(button.label(), "Add to Cart");
        assert!(button.is_enabled());
        assert!(!button.shows_success_style());
    }

    #[test]
    fn given_error_response_when_applied_then_idle_restores_immediately() {
        let mut button = CartButtonState::new("Add to Cart");
        let _ = button.begin_loading();

        let token = button.apply_response(500);

        assert!(token.is_none());
        assert_eq!(button.phase(), CartButtonPhase::Idle);
        assert_eq!(button.label(), "Add to Cart");
        assert!(button.is_enabled());
        assert!(!button.shows_success_style());
    }

    #[test]
    fn given_stale_reset_token_when_elapsed_then_new_cycle_is_untouched() {
        let mut button = CartButtonState::new("Add to Cart");
        let _ = button.begin_loading();
        let stale = button
            .apply_response(200)
            .expect("success should schedule a reset");
        button.reset_elapsed(stale);

        // Second cycle; the first cycle's token must not revert it.
        let _ = button.begin_loading();
        let current = button
            .apply_response(200)
            .expect("success should schedule a reset");
        button.reset_elapsed(stale);

        assert!(button.shows_success_style());

        button.reset_elapsed(current);

        assert_eq!(button.phase(), CartButtonPhase::Idle);
    }

    #[test]
    fn given_response_outside_loading_when_applied_then_it_is_ignored() {
        let mut button = CartButtonState::new("Add to Cart");

        assert!(button.apply_response(200).is_none());
        assert_eq!(button.phase(), CartButtonPhase::Idle);
    }
}
