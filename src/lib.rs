//! spanfmt library
//!
//! This crate provides the core functionality for the `spanfmt` binary.
//! Keep the crate root minimal — implementation and tests live in their modules.
//!
//! ## Overview
//!
//! The library is organized into modules that handle different aspects of
//! span formatting:
//!
//! - [`duration`] - The [`duration::Duration`] value type: field-wise construction,
//!   total-second decomposition, and human-readable rendering
//! - [`rounding`] - Two-decimal rounding of floating-point values
//! - [`cli`] - Command-line interface wrapping the formatting operations
//! - [`config`] - TOML job files for running formatting in batch
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! ```
//! use spanfmt::duration::Duration;
//! use spanfmt::rounding::round_two_decimals;
//!
//! assert_eq!(Duration::from_seconds(3661).format(), "01h 01m 01s");
//! assert_eq!(round_two_decimals(2.345), 2.35);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod duration;
pub mod errors;
pub mod rounding;
