//! treexfer: two-pane transfer list over hierarchical trees
//!
//! Layers, innermost first:
//! - `domain`: arena tree, navigation, mutation, merge and lineage (no I/O)
//! - `application`: transfer controller and seed loading
//! - `infrastructure`: I/O traits, interactive picker, dependency wiring
//! - `cli`: argument parsing, actions and terminal rendering

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
