//! Effect stage machine
//!
//! AwaitingClick → (primary click) → Scrolling → (scroll done or
//! window close) → Done. No pause/resume and no re-entry: a session
//! runs exactly once and the program exits with it.

/// Lifecycle stage of the effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    /// Showing the static prompt, waiting for a primary click
    #[default]
    AwaitingClick,
    /// The scroll session is running
    Scrolling,
    /// The session ended (scrolled off or window closed)
    Done,
}

impl Stage {
    /// Transition into Scrolling. Only valid from AwaitingClick;
    /// returns whether the transition happened.
    pub fn begin_scroll(&mut self) -> bool {
        if *self == Stage::AwaitingClick {
            tracing::info!("stage: AwaitingClick -> Scrolling");
            *self = Stage::Scrolling;
            true
        } else {
            false
        }
    }

    /// Transition into Done, from any stage
    pub fn finish(&mut self) {
        if *self != Stage::Done {
            tracing::info!("stage: {:?} -> Done", *self);
            *self = Stage::Done;
        }
    }

    pub fn is_done(&self) -> bool {
        *self == Stage::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_starts_scrolling_exactly_once() {
        let mut stage = Stage::default();
        assert!(stage.begin_scroll());
        assert_eq!(stage, Stage::Scrolling);
        // no re-entry
        assert!(!stage.begin_scroll());
        assert_eq!(stage, Stage::Scrolling);
    }

    #[test]
    fn close_during_awaiting_click_never_enters_scrolling() {
        let mut stage = Stage::default();
        stage.finish();
        assert!(stage.is_done());
        assert!(!stage.begin_scroll());
        assert!(stage.is_done());
    }

    #[test]
    fn done_is_terminal() {
        let mut stage = Stage::Scrolling;
        stage.finish();
        stage.finish();
        assert!(stage.is_done());
    }
}
