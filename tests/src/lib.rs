//! # Dead-Drop Test Suite
//!
//! Unified test crate for flows that cross subsystem boundaries.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/integration/   # Registry + reducer flows, concurrency, replay safety
//! └── benches/           # Witness, codec, and fold benchmarks
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p dd-tests
//! cargo bench -p dd-tests
//! ```

pub mod integration;
