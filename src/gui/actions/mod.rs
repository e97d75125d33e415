// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,reload}.

mod copy;    // src/gui/actions/copy.rs
mod reload;  // src/gui/actions/reload.rs

pub use copy::copy;
pub use reload::reload;
