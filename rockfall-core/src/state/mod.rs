//! Game state machine
//!
//! The active behavior of the game is a single enumerated state plus a
//! pure transition function. The state machine is explicit, finite,
//! and deterministic; timing lives in the controller, not here.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
