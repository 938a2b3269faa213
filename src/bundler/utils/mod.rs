//! Shared helpers used by the skeleton builder.

pub mod fs;
