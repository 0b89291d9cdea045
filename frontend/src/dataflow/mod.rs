//! Actor+Relay primitives for the gallery's reactive state.
//!
//! - **[`Relay`]** - one-way event stream from UI handlers to an actor
//! - **[`Actor`]** - owns a single value and mutates it in response to relay events
//!
//! Relays follow the `{source}_{event}_relay` naming pattern. Actor state is
//! only read through signals.

pub mod actor;
pub mod relay;

pub use actor::Actor;
pub use relay::{Relay, relay};
