//! Integration tests for Layer 1: Runtime
//!
//! Drives the REPL end to end with a scripted editor and in-memory output.

mod repl;
