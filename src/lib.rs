//! Conveyor Core Library
//!
//! This crate provides the core functionality for Conveyor:
//! - Configuration loading and validation
//! - The lifecycle-gated processing engine
//! - The status taxonomy shared with external tooling
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Config    │────▶│   Engine    │────▶│   Records   │
//! │   (YAML)    │     │  (lifecycle)│     │   Output    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use conveyor::{Engine, EngineConfig};
//!
//! let mut engine = Engine::new(EngineConfig::new("e1"));
//! engine.start();
//! let out = engine.process("hello");
//! assert_eq!(out, vec!["hello".to_string()]);
//! engine.stop();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod engine;
pub mod error;

pub use config::EngineConfig;
pub use engine::{Engine, initialize};
pub use error::{Error, Result, Status};
