//! Host-testable library interface for templog.
//!
//! Every module here is pure logic with no embedded dependency, so the
//! whole core (frame buffer, scroll engine, sampling pipeline, button
//! classifier, page controller) runs under `cargo test --lib` on the
//! host. Hardware sits behind the collaborator traits in [`hw`], which
//! the tests implement with plain mocks.
//!
//! The embedded binary (`main.rs`, `#![no_std]`/`#![no_main]`) is gated
//! behind the `embedded` cargo feature and wires these modules to the
//! Embassy HAL.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod controller;
pub mod datalog;
pub mod framebuffer;
pub mod glyphs;
pub mod hw;
pub mod input;
pub mod pages;
pub mod sampling;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
