//! Side drawer and navigation entries around the map.

use serde::Serialize;

/// Drawer width in pixels when expanded.
pub const DRAWER_WIDTH_OPEN: u32 = 240;
/// Collapsed drawer: icon rail only.
pub const DRAWER_WIDTH_CLOSED: u32 = 65;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
}

/// Entries listed in the drawer. Labels only; nothing is stored behind them.
pub const NAV_ITEMS: [NavItem; 2] = [
    NavItem {
        label: "Saved",
        icon: "bookmark_border",
    },
    NavItem {
        label: "Recents",
        icon: "schedule",
    },
];

/// What the drawer around the map looks like right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellView {
    pub drawer_open: bool,
    pub drawer_width: u32,
    pub show_labels: bool,
    pub nav_items: &'static [NavItem],
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Shell {
    drawer_open: bool,
}

impl Shell {
    #[must_use]
    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn toggle(&mut self) -> bool {
        self.drawer_open = !self.drawer_open;
        self.drawer_open
    }

    #[must_use]
    pub fn drawer_width(&self) -> u32 {
        if self.drawer_open {
            DRAWER_WIDTH_OPEN
        } else {
            DRAWER_WIDTH_CLOSED
        }
    }

    /// Labels are hidden while the drawer is collapsed.
    #[must_use]
    pub fn show_labels(&self) -> bool {
        self.drawer_open
    }

    #[must_use]
    pub fn view(&self) -> ShellView {
        ShellView {
            drawer_open: self.drawer_open,
            drawer_width: self.drawer_width(),
            show_labels: self.show_labels(),
            nav_items: &NAV_ITEMS,
        }
    }
}
