// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for commitgate.
//!
//! Presentation settings only. The type list and grammar are not
//! configurable.

mod loader;
mod schema;

pub use loader::{find_config_file, find_config_file_from, load_config, load_config_from};
pub use schema::*;
