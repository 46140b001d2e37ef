//! Per-row actions dropdown.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Edit,
    Delete,
}

/// Open/closed state of one row's dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionsMenu {
    open: bool,
}

impl ActionsMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Click landed outside the menu.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Picking an entry always closes the menu.
    pub fn select(&mut self, action: MenuAction) -> MenuAction {
        self.open = false;
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_open_state() {
        let mut menu = ActionsMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn selecting_closes() {
        let mut menu = ActionsMenu::default();
        menu.toggle();
        assert_eq!(menu.select(MenuAction::Delete), MenuAction::Delete);
        assert!(!menu.is_open());
    }

    #[test]
    fn outside_click_closes() {
        let mut menu = ActionsMenu::default();
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }
}
