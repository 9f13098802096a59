//! Workspace-level integration tests for numseq.
//!
//! The tests live in `tests/`; this crate has no code of its own.
