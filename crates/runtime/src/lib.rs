//! Demo simulation harness for the combat decision engine.
//!
//! Hosts the engine end to end: an in-memory [`world`], a
//! [`host`](crate::host) executing engine decisions against it, the
//! [`sim`](crate::sim) tick loop over shared static data, and two example
//! [`scripts`](crate::scripts).

pub mod host;
pub mod scripts;
pub mod sim;
pub mod world;

pub use host::HostContext;
pub use scripts::{CasterScript, MeleeScript};
pub use sim::{Simulation, StaticData};
pub use world::{Actor, World};
