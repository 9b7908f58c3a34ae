//! Environment abstraction layer for dependency injection and testing
//!
//! The interpolation pipeline never reads the process environment directly.
//! It works against the [`EnvLookup`] trait so tests can supply a controlled
//! in-memory environment instead of mutating real process state.
//!
//! - **Trait**: [`EnvLookup`] defines the lookup capability
//! - **Real implementation**: [`ProcessEnv`] reads `std::env`
//! - **Mock implementation**: [`MockEnv`] is an in-memory map for tests

mod mock;
mod real;
mod traits;

pub use mock::MockEnv;
pub use real::ProcessEnv;
pub use traits::EnvLookup;
