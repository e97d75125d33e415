// src/lib.rs
#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod csv;
pub mod errors;
pub mod feed;
pub mod progress;
pub mod specs;
pub mod view;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
