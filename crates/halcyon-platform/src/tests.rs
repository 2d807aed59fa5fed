#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::rem_size::*;
    use crate::window::*;

    struct StubWindow {
        focused: Cell<bool>,
        maximized: Cell<bool>,
        decorated: Cell<bool>,
    }

    impl StubWindow {
        fn new() -> Self {
            Self {
                focused: Cell::new(true),
                maximized: Cell::new(false),
                decorated: Cell::new(true),
            }
        }
    }

    impl WindowHandle for StubWindow {
        fn is_focused(&self) -> bool {
            self.focused.get()
        }
        fn is_maximized(&self) -> bool {
            self.maximized.get()
        }
        fn is_decorated(&self) -> bool {
            self.decorated.get()
        }
    }

    #[test]
    fn test_sync_seeds_all_flags() {
        let win = StubWindow::new();
        let state = WindowState::new();
        assert!(!state.focused.get());

        state.sync(&win);
        assert!(state.focused.get());
        assert!(!state.maximized.get());
        assert!(state.decorated.get());
    }

    #[test]
    fn test_focus_event_updates_flag() {
        let win = StubWindow::new();
        let state = WindowState::new();
        state.sync(&win);

        state.apply(&win, WindowEvent::FocusChanged(false));
        assert!(!state.focused.get());
        state.apply(&win, WindowEvent::FocusChanged(true));
        assert!(state.focused.get());
    }

    #[test]
    fn test_resize_requeries_maximized() {
        let win = StubWindow::new();
        let state = WindowState::new();
        state.sync(&win);

        win.maximized.set(true);
        state.apply(&win, WindowEvent::Resized);
        assert!(state.maximized.get());

        win.maximized.set(false);
        state.apply(&win, WindowEvent::Resized);
        assert!(!state.maximized.get());
    }

    #[test]
    fn test_event_before_sync_converges() {
        // The platform does not order the initial query against the first
        // event; either interleaving must land on the same flags.
        let win = StubWindow::new();

        let event_first = WindowState::new();
        event_first.apply(&win, WindowEvent::FocusChanged(true));
        event_first.sync(&win);

        let sync_first = WindowState::new();
        sync_first.sync(&win);
        sync_first.apply(&win, WindowEvent::FocusChanged(true));

        assert_eq!(event_first.focused.get(), sync_first.focused.get());
        assert_eq!(event_first.maximized.get(), sync_first.maximized.get());
    }

    #[test]
    fn test_parse_rem_size() {
        assert_eq!(parse_rem_size("16px"), Ok(16));
        assert_eq!(parse_rem_size("16.5px"), Ok(16));
        assert_eq!(
            parse_rem_size("1.2em"),
            Err(RemSizeError::MissingPxSuffix("1.2em".into()))
        );
        assert_eq!(
            parse_rem_size(""),
            Err(RemSizeError::MissingPxSuffix(String::new()))
        );
        assert_eq!(
            parse_rem_size("px"),
            Err(RemSizeError::NotANumber("px".into()))
        );
    }

    #[test]
    fn test_rem_size_mirror_tracks_mutations() {
        let rem = RemSize::new("16px").unwrap();
        assert_eq!(rem.value.get(), 16);

        rem.observe("20px").unwrap();
        assert_eq!(rem.value.get(), 20);

        // Unsupported unit surfaces immediately and leaves the flag alone.
        assert!(rem.observe("1.25rem").is_err());
        assert_eq!(rem.value.get(), 20);
    }
}
