//! Derive macros shared by the calendar types.

pub use derive_more::Display;
