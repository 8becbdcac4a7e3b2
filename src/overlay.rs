//! URL-bar visibility state machine.
//!
//! Three states: settled hidden, settled visible, and an explicit
//! transitioning state that stands in for the old "animation in progress"
//! flag. While a transition is in flight, new toggle requests are dropped
//! (callers log the drop); the transition completes when the settle timer
//! fires and calls [`Overlay::settle`].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

impl Visibility {
    fn flipped(self) -> Self {
        match self {
            Visibility::Hidden => Visibility::Visible,
            Visibility::Visible => Visibility::Hidden,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Settled(Visibility),
    /// In flight toward the contained target.
    Transitioning(Visibility),
}

#[derive(Debug)]
pub struct Overlay {
    state: OverlayState,
}

impl Overlay {
    pub fn new() -> Self {
        Self {
            state: OverlayState::Settled(Visibility::Hidden),
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// Layout predicate: does the bar strip currently claim the top of the
    /// window? True while settled visible or heading there.
    pub fn bar_visible(&self) -> bool {
        matches!(
            self.state,
            OverlayState::Settled(Visibility::Visible)
                | OverlayState::Transitioning(Visibility::Visible)
        )
    }

    /// Shortcut toggle. Returns the transition target, or `None` when the
    /// request is dropped because a transition is already in flight.
    pub fn toggle(&mut self) -> Option<Visibility> {
        match self.state {
            OverlayState::Settled(v) => {
                let target = v.flipped();
                self.state = OverlayState::Transitioning(target);
                Some(target)
            }
            OverlayState::Transitioning(_) => None,
        }
    }

    /// Cancel signal from the presentation layer. Hides only when settled
    /// visible; a no-op otherwise.
    pub fn request_hide(&mut self) -> Option<Visibility> {
        match self.state {
            OverlayState::Settled(Visibility::Visible) => {
                self.state = OverlayState::Transitioning(Visibility::Hidden);
                Some(Visibility::Hidden)
            }
            _ => None,
        }
    }

    /// Successful navigation: the bar always ends hidden, whatever was in
    /// flight. Returns `None` when already hidden or hiding.
    pub fn force_hide(&mut self) -> Option<Visibility> {
        match self.state {
            OverlayState::Settled(Visibility::Hidden)
            | OverlayState::Transitioning(Visibility::Hidden) => None,
            _ => {
                self.state = OverlayState::Transitioning(Visibility::Hidden);
                Some(Visibility::Hidden)
            }
        }
    }

    /// Settle timer fired: complete the in-flight transition and report the
    /// visibility reached. A late timer from a superseded transition finds
    /// the machine already settled and does nothing.
    pub fn settle(&mut self) -> Option<Visibility> {
        match self.state {
            OverlayState::Transitioning(target) => {
                self.state = OverlayState::Settled(target);
                Some(target)
            }
            OverlayState::Settled(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled(overlay: &Overlay, v: Visibility) -> bool {
        overlay.state() == OverlayState::Settled(v)
    }

    #[test]
    fn starts_hidden() {
        let overlay = Overlay::new();
        assert!(settled(&overlay, Visibility::Hidden));
        assert!(!overlay.bar_visible());
    }

    #[test]
    fn double_toggle_returns_to_original_state() {
        let mut overlay = Overlay::new();

        assert_eq!(overlay.toggle(), Some(Visibility::Visible));
        assert!(overlay.bar_visible());
        assert_eq!(overlay.settle(), Some(Visibility::Visible));

        assert_eq!(overlay.toggle(), Some(Visibility::Hidden));
        assert!(!overlay.bar_visible());
        assert_eq!(overlay.settle(), Some(Visibility::Hidden));

        assert!(settled(&overlay, Visibility::Hidden));
    }

    #[test]
    fn toggle_during_transition_is_dropped() {
        let mut overlay = Overlay::new();
        assert_eq!(overlay.toggle(), Some(Visibility::Visible));
        assert_eq!(overlay.toggle(), None);
        assert_eq!(overlay.toggle(), None);
        // The in-flight transition is unaffected by the dropped requests.
        assert_eq!(overlay.settle(), Some(Visibility::Visible));
        assert!(settled(&overlay, Visibility::Visible));
    }

    #[test]
    fn cancel_while_hidden_is_a_noop() {
        let mut overlay = Overlay::new();
        assert_eq!(overlay.request_hide(), None);
        assert!(settled(&overlay, Visibility::Hidden));
    }

    #[test]
    fn cancel_while_visible_hides() {
        let mut overlay = Overlay::new();
        overlay.toggle();
        overlay.settle();
        assert_eq!(overlay.request_hide(), Some(Visibility::Hidden));
        assert_eq!(overlay.settle(), Some(Visibility::Hidden));
    }

    #[test]
    fn cancel_during_transition_is_a_noop() {
        let mut overlay = Overlay::new();
        overlay.toggle();
        assert_eq!(overlay.request_hide(), None);
        assert_eq!(overlay.settle(), Some(Visibility::Visible));
    }

    #[test]
    fn navigation_forces_hidden_from_any_state() {
        // From settled visible.
        let mut overlay = Overlay::new();
        overlay.toggle();
        overlay.settle();
        assert_eq!(overlay.force_hide(), Some(Visibility::Hidden));
        overlay.settle();
        assert!(settled(&overlay, Visibility::Hidden));

        // From a transition toward visible: redirected to hidden.
        let mut overlay = Overlay::new();
        overlay.toggle();
        assert_eq!(overlay.force_hide(), Some(Visibility::Hidden));
        assert_eq!(overlay.settle(), Some(Visibility::Hidden));

        // Already hidden: nothing to do.
        let mut overlay = Overlay::new();
        assert_eq!(overlay.force_hide(), None);
    }

    #[test]
    fn late_settle_after_forced_hide_is_a_noop() {
        let mut overlay = Overlay::new();
        overlay.toggle(); // toward visible, timer A armed
        overlay.force_hide(); // redirected to hidden, timer B armed
        assert_eq!(overlay.settle(), Some(Visibility::Hidden)); // timer A, completes early
        assert_eq!(overlay.settle(), None); // timer B finds it settled
        assert!(settled(&overlay, Visibility::Hidden));
    }
}
