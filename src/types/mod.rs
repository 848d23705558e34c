//! Assorted types, in particular error types.

pub mod err;
