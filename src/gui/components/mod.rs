// src/gui/components/mod.rs
pub mod filter_bar;
pub mod record_table;
pub mod status_panel;
pub mod tabs;
