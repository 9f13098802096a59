//! numseq library: application logic for the numseq binary.

pub mod app;
pub mod config;
pub mod errors;
