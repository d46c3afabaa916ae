use std::rc::Rc;

use yew::prelude::*;

/// Open/closed state of the mobile navigation overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// Tap on the burger / close button.
    Toggle,
    /// Tap on a link inside the overlay.
    Close,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::Close => false,
        };
        if open == self.open {
            self
        } else {
            Rc::new(MenuState { open })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(actions: &[MenuAction]) -> MenuState {
        let state = actions
            .iter()
            .fold(Rc::new(MenuState::default()), |state, action| state.reduce(*action));
        *state
    }

    #[test]
    fn starts_closed() {
        assert!(!MenuState::default().open);
    }

    #[test]
    fn tap_then_link_closes_again() {
        assert!(apply(&[MenuAction::Toggle]).open);
        assert!(!apply(&[MenuAction::Toggle, MenuAction::Close]).open);
    }

    #[test]
    fn second_toggle_closes() {
        assert!(!apply(&[MenuAction::Toggle, MenuAction::Toggle]).open);
    }

    #[test]
    fn closing_a_closed_menu_keeps_the_same_state() {
        let state = Rc::new(MenuState::default());
        let next = state.clone().reduce(MenuAction::Close);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
