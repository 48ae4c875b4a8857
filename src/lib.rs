pub mod driver;
pub mod metrics;
pub mod sampler;
pub mod time;

pub(crate) mod controller;
pub(crate) mod data;
pub(crate) mod ident;
pub(crate) mod simulation;
pub(crate) mod variants;

pub use controller::Controller;
pub use data::Record;
pub use driver::{run, Config};
pub use ident::SeqNum;
pub use simulation::{Outcome, Simulation};
pub use variants::{cubic::Cubic, Variant};
