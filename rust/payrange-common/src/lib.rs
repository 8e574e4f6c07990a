//! Core definitions (errors and common result handling), relied upon by all payrange-* crates.

pub mod error;
pub mod result;

pub use result::Result;
