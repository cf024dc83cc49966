//! Infrastructure for MindCare: the on-disk configuration file and the data
//! directory that holds it and the log file.

pub mod config;
pub mod filesystem;
