//! Factory Method: an abstract creator whose template method defers the
//! concrete product choice to its variants.
//!
//! `LoggerFactory::log_message` never names a concrete logger; each concrete
//! factory fixes exactly one variant through `create_logger`.

use std::io::{self, Write};

/// Product contract. Concrete variants differ only in how they format the
/// output line.
pub trait Logger {
    /// The formatted output line for `message`.
    fn line(&self, message: &str) -> String;

    /// Writes the formatted line to stdout.
    fn log(&self, message: &str) {
        println!("{}", self.line(message));
    }

    /// Writes the formatted line to an arbitrary writer.
    fn log_to(&self, w: &mut dyn Write, message: &str) -> io::Result<()> {
        writeln!(w, "{}", self.line(message))
    }
}

pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn line(&self, message: &str) -> String {
        format!("[CONSOLE] {}", message)
    }
}

pub struct FileLogger;

impl Logger for FileLogger {
    fn line(&self, message: &str) -> String {
        format!("[FILE] {}", message)
    }
}

/// Creator contract: one factory method plus a template operation built on
/// top of it.
pub trait LoggerFactory {
    /// The factory method. Each concrete factory returns exactly one
    /// product variant.
    fn create_logger(&self) -> Box<dyn Logger>;

    /// Template method: obtain a logger, then log through it. Not meant to
    /// be overridden.
    fn log_message(&self, message: &str) {
        self.create_logger().log(message);
    }

    /// Writer-injected twin of [`log_message`](Self::log_message).
    fn log_message_to(&self, w: &mut dyn Write, message: &str) -> io::Result<()> {
        self.create_logger().log_to(w, message)
    }
}

pub struct ConsoleLoggerFactory;

impl LoggerFactory for ConsoleLoggerFactory {
    fn create_logger(&self) -> Box<dyn Logger> {
        Box::new(ConsoleLogger)
    }
}

pub struct FileLoggerFactory;

impl LoggerFactory for FileLoggerFactory {
    fn create_logger(&self) -> Box<dyn Logger> {
        Box::new(FileLogger)
    }
}

/// Prints the Factory Method demo to stdout.
pub fn demo() {
    demo_to(&mut io::stdout()).expect("failed to write demo output");
}

/// Writes the Factory Method demo lines to `w`.
pub fn demo_to(w: &mut impl Write) -> io::Result<()> {
    let console_factory = ConsoleLoggerFactory;
    let file_factory = FileLoggerFactory;
    console_factory.log_message_to(w, "Сообщение в консоль")?;
    file_factory.log_message_to(w, "Сообщение в файл")?;
    Ok(())
}
