//! Mobile menu toggle

/// Where a click landed, as far as the menu cares
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuClick {
    /// The hamburger button
    Toggle,
    /// One of the navigation links inside the menu
    NavLink,
    /// Somewhere else inside the menu
    Inside,
    /// Anywhere outside both the button and the menu
    Outside,
}

/// Open/closed state shared by the menu and its toggle button
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn handle(&mut self, click: MenuClick) {
        match click {
            MenuClick::Toggle => self.toggle(),
            MenuClick::NavLink | MenuClick::Outside => self.close(),
            MenuClick::Inside => {}
        }
    }

    /// `base` plus `active` while open
    pub fn class(&self, base: &str) -> String {
        if self.open {
            format!("{} active", base)
        } else {
            base.to_string()
        }
    }
}
