//! # Creational Design Patterns in Rust
//!
//! This crate demonstrates four classic creational patterns, one module each:
//!
//! ## Singleton ([`singleton`])
//! - Process-wide `ConfigManager` created lazily on first access
//! - One-time initialization with `std::sync::OnceLock`
//! - Mutation through any handle is visible to all holders
//!
//! ## Factory Method ([`factory_method`])
//! - Abstract creator (`LoggerFactory`) with one creation method
//! - Template method `log_message` that defers the concrete choice
//! - Two product variants: `ConsoleLogger` and `FileLogger`
//!
//! ## Abstract Factory ([`abstract_factory`])
//! - A *family* of related products (button + checkbox) per platform
//! - `Application` consumes a factory without knowing the concrete family
//! - Platform selection happens at the factory boundary only
//!
//! ## Builder ([`builder`])
//! - Three ordered construction steps behind an abstract `HouseBuilder`
//! - `HouseDirector` sequences the steps in a fixed order
//! - Fields stay explicitly unset until the corresponding step runs
//!
//! Each pattern's abstraction is a trait with a closed, enumerable set of
//! concrete variants, so "instantiating the abstract type" or "calling an
//! unimplemented operation" is rejected at compile time rather than at
//! runtime.
//!
//! Every module exposes a `demo()` that prints the pattern's example output,
//! plus a writer-injected `demo_to()` twin so tests can capture the exact
//! lines. Run all four demos with: `cargo run`

pub mod abstract_factory;
pub mod builder;
pub mod factory_method;
pub mod singleton;
