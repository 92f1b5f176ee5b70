//! Interactive dialog utilities for user input
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces independent of any UI library
//! - `dialoguer`: Concrete implementation using the dialoguer library
//! - `automatic_impl`: Table-driven implementation for unattended runs

pub mod automatic_impl;
pub mod dialoguer;
pub mod interface;

pub use automatic_impl::AutomaticPrompter;
pub use dialoguer::DialoguerPrompter;
pub use interface::*;
