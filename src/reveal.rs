//! One-way reveal state machine.
//!
//! Models content that starts hidden and is revealed exactly once: the
//! day-of schedule stays hidden while the countdown is running and is shown
//! when it expires. There is no path back to `Hidden`, so callers can use
//! the transition itself as the trigger for one-time side effects.

/// Reveal state for a piece of gated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reveal {
    #[default]
    Hidden,
    Revealed,
}

impl Reveal {
    /// Drive the machine with a visibility event.
    ///
    /// Returns `true` only on the call that performs the Hidden → Revealed
    /// transition; later calls are no-ops.
    pub fn reveal(&mut self) -> bool {
        match self {
            Reveal::Hidden => {
                *self = Reveal::Revealed;
                true
            }
            Reveal::Revealed => false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, Reveal::Revealed)
    }
}
