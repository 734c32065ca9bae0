use futures_signals::signal::{Mutable, Signal};

/// Something that can open or close a dropdown.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Interaction {
    Open,
    Close,
    /// The toggle button was clicked.
    Toggle,
    /// A click reached the item area.
    ItemSelected,
    /// A click anywhere in the document. `inside` is true when the click's
    /// composed path contains the dropdown.
    DocumentClick { inside: bool },
}

/// The open flag of a dropdown.
///
/// Clones share the same flag, so a clone can be held by event handlers and
/// by application code that wants to open or close the dropdown itself.
#[derive(Clone, Debug, Default)]
pub struct OpenState(Mutable<bool>);

impl OpenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.0.get()
    }

    pub fn signal(&self) -> impl Signal<Item = bool> + 'static {
        self.0.signal()
    }

    pub fn open(&self) {
        self.0.set_neq(true);
    }

    pub fn close(&self) {
        self.0.set_neq(false);
    }

    pub fn toggle(&self) {
        self.0.replace_with(|open| !*open);
    }

    /// Returns the new state.
    pub fn apply(&self, interaction: Interaction) -> bool {
        match interaction {
            Interaction::Open => self.open(),
            Interaction::Close | Interaction::ItemSelected => self.close(),
            Interaction::Toggle => self.toggle(),
            Interaction::DocumentClick { inside: false } => self.close(),
            Interaction::DocumentClick { inside: true } => (),
        }

        self.is_open()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        },
        task::{Context, Poll, Wake, Waker},
    };

    use futures_signals::signal::Signal;

    use super::{Interaction, OpenState};

    #[test]
    fn starts_closed() {
        assert!(!OpenState::new().is_open());
    }

    #[test]
    fn toggle() {
        let state = OpenState::new();

        assert!(state.apply(Interaction::Toggle));
        assert!(!state.apply(Interaction::Toggle));
        assert!(state.apply(Interaction::Toggle));
    }

    #[test]
    fn open_and_close() {
        let state = OpenState::new();

        assert!(state.apply(Interaction::Open));
        assert!(state.apply(Interaction::Open));
        assert!(!state.apply(Interaction::Close));
        assert!(!state.apply(Interaction::Close));
    }

    #[test]
    fn item_selection_closes() {
        let state = OpenState::new();
        state.open();

        assert!(!state.apply(Interaction::ItemSelected));
    }

    #[test]
    fn outside_click_closes() {
        let state = OpenState::new();
        state.open();

        assert!(!state.apply(Interaction::DocumentClick { inside: false }));
        assert!(!state.apply(Interaction::DocumentClick { inside: false }));
    }

    #[test]
    fn inside_click_is_ignored() {
        let state = OpenState::new();

        assert!(!state.apply(Interaction::DocumentClick { inside: true }));
        state.open();
        assert!(state.apply(Interaction::DocumentClick { inside: true }));
    }

    #[test]
    fn button_click_seen_by_document() {
        // The document listener sees the same click as the toggle button.
        let state = OpenState::new();

        state.apply(Interaction::Toggle);
        state.apply(Interaction::DocumentClick { inside: true });
        assert!(state.is_open());

        state.apply(Interaction::Toggle);
        state.apply(Interaction::DocumentClick { inside: true });
        assert!(!state.is_open());
    }

    #[test]
    fn clones_share_state() {
        let state = OpenState::new();
        let handle = state.clone();

        handle.open();
        assert!(state.is_open());
        state.close();
        assert!(!handle.is_open());
    }

    #[test]
    fn redundant_close_does_not_notify() {
        let state = OpenState::new();
        let wakes = Arc::new(WakeCounter::default());
        let waker = Waker::from(wakes.clone());
        let mut cx = Context::from_waker(&waker);
        let mut signal = Box::pin(state.signal());

        assert_eq!(signal.as_mut().poll_change(&mut cx), Poll::Ready(Some(false)));
        assert_eq!(signal.as_mut().poll_change(&mut cx), Poll::Pending);

        state.close();
        assert_eq!(wakes.count(), 0);

        state.open();
        assert_eq!(wakes.count(), 1);
        assert_eq!(signal.as_mut().poll_change(&mut cx), Poll::Ready(Some(true)));
    }

    #[derive(Default)]
    struct WakeCounter(AtomicUsize);

    impl WakeCounter {
        fn count(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    impl Wake for WakeCounter {
        fn wake(self: Arc<Self>) {
            self.wake_by_ref();
        }

        fn wake_by_ref(self: &Arc<Self>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}
