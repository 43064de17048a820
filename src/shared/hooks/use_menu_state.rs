use dioxus::prelude::*;

use crate::shared::logging::log_menu_toggled;

/// Visibility of the slide-in panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// User interactions that can change visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Hamburger button
    Trigger,
    /// Full-screen backdrop behind the panel
    Overlay,
    /// X button in the panel header
    CloseButton,
    /// Any navigation entry
    Navigate,
    /// Sign out button
    Logout,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// Next state after `event`. Only the trigger can open the panel.
    pub fn on_event(self, event: MenuEvent) -> Self {
        match event {
            MenuEvent::Trigger => self.toggled(),
            MenuEvent::Overlay | MenuEvent::CloseButton | MenuEvent::Navigate | MenuEvent::Logout => {
                MenuState::Closed
            }
        }
    }

    /// Translate class for the panel
    pub fn panel_class(&self) -> &'static str {
        match self {
            MenuState::Open => "translate-x-0",
            MenuState::Closed => "-translate-x-full",
        }
    }
}

/// Sidebar visibility, closed on mount. Also provided as context so rows
/// and host link primitives below the menu can read or close it.
pub fn use_menu_state() -> Signal<MenuState> {
    let state = use_signal(MenuState::default);
    use_context_provider(|| state)
}

/// Apply `event` to the signal, logging only real transitions
pub fn dispatch_menu_event(mut state: Signal<MenuState>, event: MenuEvent) {
    let current = *state.peek();
    let next = current.on_event(event);
    if next != current {
        state.set(next);
        log_menu_toggled(next.is_open());
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use dioxus::dioxus_core::NoOpMutations;

    use super::*;

    const CLOSE_EVENTS: [MenuEvent; 4] = [
        MenuEvent::Overlay,
        MenuEvent::CloseButton,
        MenuEvent::Navigate,
        MenuEvent::Logout,
    ];

    thread_local! {
        static RENDERS: Cell<u32> = const { Cell::new(0) };
        static STATE: Cell<Option<Signal<MenuState>>> = const { Cell::new(None) };
    }

    fn panel() -> Element {
        let state = use_menu_state();
        RENDERS.with(|renders| renders.set(renders.get() + 1));
        STATE.with(|cell| cell.set(Some(state)));
        rsx! {
            div { class: "{state().panel_class()}" }
        }
    }

    fn mounted_panel() -> (VirtualDom, Signal<MenuState>) {
        let mut dom = VirtualDom::new(panel);
        dom.rebuild_in_place();
        let state = STATE.with(Cell::get).expect("panel mounted");
        (dom, state)
    }

    #[test]
    fn test_initial_state_is_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_trigger_parity() {
        for presses in 0..8 {
            let state = (0..presses).fold(MenuState::default(), |state, _| {
                state.on_event(MenuEvent::Trigger)
            });
            assert_eq!(state.is_open(), presses % 2 == 1, "after {presses} presses");
        }
    }

    #[test]
    fn test_close_events_from_open() {
        for event in CLOSE_EVENTS {
            assert_eq!(MenuState::Open.on_event(event), MenuState::Closed, "{event:?}");
        }
    }

    #[test]
    fn test_close_events_while_closed_are_noops() {
        for event in CLOSE_EVENTS {
            assert_eq!(MenuState::Closed.on_event(event), MenuState::Closed, "{event:?}");
        }
    }

    #[test]
    fn test_panel_class() {
        assert_eq!(MenuState::Open.panel_class(), "translate-x-0");
        assert_eq!(MenuState::Closed.panel_class(), "-translate-x-full");
    }

    #[test]
    fn test_dispatch_close_while_closed_leaves_signal_untouched() {
        let (mut dom, state) = mounted_panel();
        assert_eq!(RENDERS.with(Cell::get), 1);

        for event in CLOSE_EVENTS {
            dom.in_runtime(|| dispatch_menu_event(state, event));
            dom.render_immediate(&mut NoOpMutations);
            assert_eq!(dom.in_runtime(|| *state.peek()), MenuState::Closed, "{event:?}");
        }
        assert_eq!(RENDERS.with(Cell::get), 1);
    }

    #[test]
    fn test_dispatch_opens_then_each_close_event_closes() {
        let (mut dom, state) = mounted_panel();

        for event in CLOSE_EVENTS {
            dom.in_runtime(|| dispatch_menu_event(state, MenuEvent::Trigger));
            dom.render_immediate(&mut NoOpMutations);
            assert!(dioxus_ssr::render(&dom).contains("translate-x-0"), "{event:?}");

            dom.in_runtime(|| dispatch_menu_event(state, event));
            dom.render_immediate(&mut NoOpMutations);
            assert!(dioxus_ssr::render(&dom).contains("-translate-x-full"), "{event:?}");
        }
        assert_eq!(RENDERS.with(Cell::get), 1 + 2 * CLOSE_EVENTS.len() as u32);
    }
}
