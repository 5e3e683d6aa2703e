// src/lib.rs

pub mod host;
pub mod listeners;
pub mod notify;
pub mod plugin;
pub mod registry;
pub mod sim;
pub mod watchers;

pub use plugin::{Host, StalkerPlugin};
pub use registry::TargetRegistry;
pub use stalker_common::error::Error;
