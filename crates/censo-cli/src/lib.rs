//! CLI library components for the census treatment tool.

pub mod cli;
pub mod commands;
pub mod io;
pub mod logging;
pub mod summary;
