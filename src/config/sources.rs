//! Configuration sources layered on top of the merge policy defaults.

pub mod environment;
pub mod global_file;
pub mod local_file;
