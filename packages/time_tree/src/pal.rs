//! Platform abstraction layer for reading the monotonic clock.
//!
//! This module provides a platform abstraction that allows switching between
//! the real monotonic clock and a fake implementation for testing purposes.

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;
mod real;

pub(crate) use abstractions::Platform;
pub(crate) use facade::PlatformFacade;
#[cfg(test)]
pub(crate) use fake::FakePlatform;
