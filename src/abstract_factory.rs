//! Abstract Factory: a family of related widgets (button + checkbox) per
//! platform, produced together so the two never mix platforms.
//!
//! `Application` is the client: it asks one factory for both widgets at
//! construction time and is platform-agnostic afterwards.

use std::io::{self, Write};

pub trait Button {
    /// Platform-specific description of the rendered button.
    fn render(&self) -> String;

    /// Prints the description to stdout.
    fn paint(&self) {
        println!("{}", self.render());
    }
}

pub trait Checkbox {
    /// Platform-specific description of the rendered checkbox.
    fn render(&self) -> String;

    /// Prints the description to stdout.
    fn paint(&self) {
        println!("{}", self.render());
    }
}

pub struct WindowsButton;

impl Button for WindowsButton {
    fn render(&self) -> String {
        "Рисуем кнопку в стиле Windows".to_string()
    }
}

pub struct MacButton;

impl Button for MacButton {
    fn render(&self) -> String {
        "Рисуем кнопку в стиле Mac".to_string()
    }
}

pub struct WindowsCheckbox;

impl Checkbox for WindowsCheckbox {
    fn render(&self) -> String {
        "Рисуем чекбокс в стиле Windows".to_string()
    }
}

pub struct MacCheckbox;

impl Checkbox for MacCheckbox {
    fn render(&self) -> String {
        "Рисуем чекбокс в стиле Mac".to_string()
    }
}

/// Factory contract for one widget family. Every concrete factory returns
/// matching-platform variants from both methods; this boundary is the only
/// place platform selection happens.
pub trait GuiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

pub struct WindowsFactory;

impl GuiFactory for WindowsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WindowsCheckbox)
    }
}

pub struct MacFactory;

impl GuiFactory for MacFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacCheckbox)
    }
}

/// Client of a widget family. Both members come from the same factory, so
/// they always share a platform.
pub struct Application {
    button: Box<dyn Button>,
    checkbox: Box<dyn Checkbox>,
}

impl Application {
    pub fn new(factory: &dyn GuiFactory) -> Self {
        Application {
            button: factory.create_button(),
            checkbox: factory.create_checkbox(),
        }
    }

    /// Two lines, button first, then checkbox.
    pub fn render(&self) -> String {
        format!("{}\n{}", self.button.render(), self.checkbox.render())
    }

    /// Prints both widget lines to stdout.
    pub fn paint(&self) {
        println!("{}", self.render());
    }

    /// Writes both widget lines to an arbitrary writer.
    pub fn paint_to(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "{}", self.render())
    }
}

/// Prints the Abstract Factory demo to stdout.
pub fn demo() {
    demo_to(&mut io::stdout()).expect("failed to write demo output");
}

/// Writes the Abstract Factory demo lines to `w`.
pub fn demo_to(w: &mut impl Write) -> io::Result<()> {
    writeln!(w, "Windows UI:")?;
    let win_app = Application::new(&WindowsFactory);
    win_app.paint_to(w)?;

    writeln!(w, "Mac UI:")?;
    let mac_app = Application::new(&MacFactory);
    mac_app.paint_to(w)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_application_renders_windows_family() {
        let app = Application::new(&WindowsFactory);
        assert_eq!(
            app.render(),
            "Рисуем кнопку в стиле Windows\nРисуем чекбокс в стиле Windows"
        );
    }

    #[test]
    fn mac_application_renders_mac_family() {
        let app = Application::new(&MacFactory);
        assert_eq!(
            app.render(),
            "Рисуем кнопку в стиле Mac\nРисуем чекбокс в стиле Mac"
        );
    }

    #[test]
    fn families_never_mix_platforms() {
        let factories: Vec<Box<dyn GuiFactory>> =
            vec![Box::new(WindowsFactory), Box::new(MacFactory)];

        for factory in &factories {
            let button_line = factory.create_button().render();
            let checkbox_line = factory.create_checkbox().render();

            let button_is_windows = button_line.ends_with("Windows");
            let checkbox_is_windows = checkbox_line.ends_with("Windows");
            assert_eq!(button_is_windows, checkbox_is_windows);
        }
    }

    #[test]
    fn application_paints_button_then_checkbox() {
        let app = Application::new(&WindowsFactory);
        let mut out = Vec::new();
        app.paint_to(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("кнопку"));
        assert!(lines[1].contains("чекбокс"));
    }

    #[test]
    fn demo_output_is_exact() {
        let mut out = Vec::new();
        demo_to(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Windows UI:\n\
             Рисуем кнопку в стиле Windows\n\
             Рисуем чекбокс в стиле Windows\n\
             Mac UI:\n\
             Рисуем кнопку в стиле Mac\n\
             Рисуем чекбокс в стиле Mac\n"
        );
    }
}
