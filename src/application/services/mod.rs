//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, Selector)
//! but are themselves concrete structs, not traits.

mod seed;
mod transfer;

pub use seed::SeedService;
pub use transfer::{transfer, Affordances, Pane, Selection, Transfer, TransferService};
