// src/core/mod.rs

pub mod delimiter;
pub mod fields;
pub mod headers;
pub mod net;
pub mod sanitize;

pub use delimiter::Delimiter;
pub use headers::HeaderMap;
