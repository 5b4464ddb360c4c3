//! Open/close state of the navigation drawer and the per-page pinning policy.

/// Whether a page pins the drawer open on wide viewports once its intro has revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawerPolicy {
    /// The drawer only opens from the hamburger toggle.
    #[default]
    UserOnly,
    /// Wide viewports show the drawer after the reveal delay until the visitor dismisses it.
    PinOnWide,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawerState {
    pub user_open: bool,
    /// Set by any close; keeps a pinned drawer from reappearing for the rest of the page's life.
    pub pin_dismissed: bool,
}

impl DrawerState {
    pub fn open(&mut self) {
        self.user_open = true;
    }

    /// Shared by the close button, link selection, Escape, backdrop clicks and external requests.
    pub fn close(&mut self) {
        self.user_open = false;
        self.pin_dismissed = true;
    }

    pub fn toggle(&mut self) {
        if self.user_open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn visible(&self, policy: DrawerPolicy, is_wide: bool, revealed: bool) -> bool {
        let pinned = policy == DrawerPolicy::PinOnWide && is_wide && revealed && !self.pin_dismissed;
        self.user_open || pinned
    }

    /// Only a drawer the visitor opened gets a click-away backdrop; a pinned one leaves
    /// the page interactive.
    pub fn needs_backdrop(&self) -> bool {
        self.user_open
    }
}
