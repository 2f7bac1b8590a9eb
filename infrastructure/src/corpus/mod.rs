//! On-disk corpus loading

pub mod loader;
