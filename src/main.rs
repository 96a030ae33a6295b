//! Demo runner: executes the four pattern demos in a fixed order, one
//! section header per demo.
//!
//! Run with: cargo run

use colored::Colorize;
use creational_patterns::{abstract_factory, builder, factory_method, singleton};

fn main() {
    println!("{}", "=== Singleton ===".bold().cyan());
    singleton::demo();

    println!();
    println!("{}", "=== Factory Method ===".bold().cyan());
    factory_method::demo();

    println!();
    println!("{}", "=== Abstract Factory ===".bold().cyan());
    abstract_factory::demo();

    println!();
    println!("{}", "=== Builder ===".bold().cyan());
    builder::demo();
}
