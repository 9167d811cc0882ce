//! Integration tests for applog-facade
//!
//! Wires the facade to recording doubles for every collaborator and
//! verifies fan-out counts, error enrichment, failure isolation, and
//! background dispatch.

mod common;

mod test_dispatch;
mod test_errors;
