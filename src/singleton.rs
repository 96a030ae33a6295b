//! Singleton: a process-wide `ConfigManager` holding one mutable field.
//!
//! The instance is created on first access and lives for the rest of the
//! process; every caller sees the same state. The aliasing is the entire
//! point of the demo.

use std::io::{self, Write};
use std::sync::{OnceLock, RwLock};

/// Process-wide configuration holder with a single `environment` field.
pub struct ConfigManager {
    // Interior mutability: the instance is only ever handed out as
    // `&'static`, so the field has to be mutable behind a lock.
    environment: RwLock<String>,
}

impl ConfigManager {
    /// Returns the single process-wide instance, creating it with
    /// `environment = "PROD"` on the first call.
    pub fn global() -> &'static ConfigManager {
        static INSTANCE: OnceLock<ConfigManager> = OnceLock::new();
        INSTANCE.get_or_init(|| ConfigManager {
            environment: RwLock::new("PROD".to_string()),
        })
    }

    /// Current value of the `environment` field.
    pub fn environment(&self) -> String {
        self.environment.read().unwrap().clone()
    }

    /// Replaces the `environment` field; the new value is visible through
    /// every handle to the instance.
    pub fn set_environment(&self, environment: impl Into<String>) {
        *self.environment.write().unwrap() = environment.into();
    }
}

/// Prints the Singleton demo to stdout.
pub fn demo() {
    demo_to(&mut io::stdout()).expect("failed to write demo output");
}

/// Writes the Singleton demo lines to `w`.
pub fn demo_to(w: &mut impl Write) -> io::Result<()> {
    let cfg1 = ConfigManager::global();
    let cfg2 = ConfigManager::global();

    // Mutating through one handle is observed through the other.
    cfg1.set_environment("DEV");
    writeln!(w, "cfg1 env: {}", cfg1.environment())?;
    writeln!(w, "cfg2 env: {}", cfg2.environment())?;
    writeln!(w, "Это один и тот же объект: {}", std::ptr::eq(cfg1, cfg2))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global instance is shared across the whole test binary, so every
    // assertion that touches it lives in this single test and runs in a
    // fixed order.
    #[test]
    fn global_instance_is_shared_and_mutable() {
        let cfg1 = ConfigManager::global();
        let cfg2 = ConfigManager::global();

        // Identity: both accesses yield the same instance.
        assert!(std::ptr::eq(cfg1, cfg2));

        // Created with the fixed default.
        assert_eq!(cfg1.environment(), "PROD");

        // Mutation through one handle is visible through the other.
        cfg1.set_environment("DEV");
        assert_eq!(cfg2.environment(), "DEV");

        cfg2.set_environment("STAGING");
        assert_eq!(cfg1.environment(), "STAGING");

        // Demo output reflects the mutation it performs itself.
        let mut out = Vec::new();
        demo_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "cfg1 env: DEV\ncfg2 env: DEV\nЭто один и тот же объект: true\n"
        );
    }
}
