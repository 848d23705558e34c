//! Generic structures, supporting a context without being specific to one.

pub mod minimal_pcg;
