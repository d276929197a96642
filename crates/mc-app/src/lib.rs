//! # mc-app
//!
//! Use cases and command surface for multiclip: everything between the
//! host's command bindings and the mc-core domain. The host constructs a
//! [`Controller`] with its port implementations and routes every bound
//! command through [`Controller::dispatch`].

pub mod commands;
pub mod controller;
pub mod deps;
pub mod usecases;

pub use commands::Command;
pub use controller::Controller;
pub use deps::HostDeps;
