//! Command implementations

pub mod config;
pub mod join;
pub mod run;
pub mod split;
