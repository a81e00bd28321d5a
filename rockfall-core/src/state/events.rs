//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Entry-action state finished its one-shot work.
    Advance,
    /// Select button clicked on the splash screen.
    SelectClicked,
    /// The current state's delay gate elapsed.
    DelayElapsed,
    /// Score crossed a multiple of the wave score step.
    WaveCleared,
    /// Collision with the shield already empty.
    ShipDestroyed,
}
