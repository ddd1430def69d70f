use crate::StoreLocation;
use owo_colors::{OwoColorize, Style};
use std::sync::OnceLock;

static STDOUT_THEME: OnceLock<Theme> = OnceLock::new();
static STDERR_THEME: OnceLock<Theme> = OnceLock::new();

/// Styles for CLI output. Colour is dropped when the target stream is not a
/// terminal or `NO_COLOR`/`CLICOLOR` disable it.
#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub success: Style,
    pub error: Style,
    pub dim: Style,
    pub value: Style,
}

impl Theme {
    pub fn new(colored: bool) -> Self {
        let pick = |style: Style| if colored { style } else { Style::new() };
        Self {
            header: pick(Style::new().cyan().bold()),
            success: pick(Style::new().green().bold()),
            error: pick(Style::new().red().bold()),
            dim: pick(Style::new().white().dimmed()),
            value: pick(Style::new().magenta()),
        }
    }
}

pub fn theme() -> &'static Theme {
    STDOUT_THEME.get_or_init(|| Theme::new(console::colors_enabled()))
}

/// Theme for messages written to stderr
pub fn error_theme() -> &'static Theme {
    STDERR_THEME.get_or_init(|| Theme::new(console::colors_enabled_stderr()))
}

pub fn header(text: &str) {
    println!("🗄️  {}", text.style(theme().header.clone()));
}

pub fn success(label: &str) {
    println!("✅ {}", label.style(theme().success.clone()));
}

pub fn error(label: &str) {
    eprintln!("❌ {}", label.style(error_theme().error.clone()));
}

pub fn field(label: &str, value: &str) {
    println!("  {} {}", format!("{:<10}", label).style(theme().dim.clone()), value.style(theme().value.clone()));
}

/// Print the kind, backend token and directory of a location
pub fn describe(location: &StoreLocation) {
    header(&location.to_locator_string());
    field("kind", location.kind().as_str());
    field("type", location.type_identifier());
    let directory = location
        .directory()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| "none".to_string());
    field("directory", &directory);
}

/// JSON form of [`describe`]
pub fn describe_json(location: &StoreLocation) -> serde_json::Value {
    serde_json::json!({
        "locator": location.to_locator_string(),
        "kind": location.kind(),
        "type": location.type_identifier(),
        "directory": location.directory().map(|dir| dir.display().to_string()),
    })
}
