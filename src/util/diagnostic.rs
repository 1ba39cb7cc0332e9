//! User-friendly diagnostic messages.
//!
//! Configuration findings carry the root cause, the offending entry, and
//! suggested fixes. Manifest parse errors are rendered through `miette` so the
//! offending line of the manifest is shown.

use std::fmt;

use crate::core::ManifestError;

/// Common suggestion messages for consistent error handling.
pub mod suggestions {
    /// Suggestion when no manifest path is configured.
    pub const NO_MANIFEST: &str =
        "help: Set `[manifest].path` in doclink.toml or pass `--manifest <path>`";

    /// Suggestion when a template needs the dependency version.
    pub const NO_DEPENDENCY: &str =
        "Set `[manifest].dependency` to the package reference that provides the version";

    /// Suggestion when a type is not in any package.
    pub const UNKNOWN_TYPE: &str = "help: Run `doclink check` to review the configured packages";
}

/// Severity level for diagnostics, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
        }
    }

    /// ANSI SGR code for the label.
    fn ansi(self) -> &'static str {
        match self {
            Severity::Error => "1;31",
            Severity::Warning => "1;33",
            Severity::Note => "1;36",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn paint(text: &str, code: &str, color: bool) -> String {
    if color {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

/// A configuration finding with optional fixes.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub message: String,
    pub severity: Severity,
    /// Lines naming the offending entry
    pub context: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            severity,
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn note(message: impl Into<String>) -> Self {
        Self::new(Severity::Note, message)
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self, color: bool) -> String {
        let mut lines = vec![format!(
            "{}: {}",
            paint(self.severity.label(), self.severity.ansi(), color),
            self.message
        )];
        lines.extend(self.context.iter().map(|ctx| format!("  → {}", ctx)));

        match self.suggestions.as_slice() {
            [] => {}
            [only] => lines.push(format!("  {}: {}", paint("help", "1;32", color), only)),
            many => {
                lines.push(format!("  {}:", paint("help", "1;32", color)));
                lines.extend(many.iter().map(|s| format!("    - {}", s)));
            }
        }

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false))
    }
}

/// Print a diagnostic to stderr.
pub fn emit(diagnostic: &Diagnostic, color: bool) {
    eprint!("{}", diagnostic.format(color));
}

/// Render a manifest error with its source snippet.
pub fn render_manifest_error(error: ManifestError, color: bool) -> String {
    let handler = miette::GraphicalReportHandler::new_themed(if color {
        miette::GraphicalTheme::unicode()
    } else {
        miette::GraphicalTheme::unicode_nocolor()
    });

    let mut out = String::new();
    if handler.render_report(&mut out, &error).is_err() {
        // Fall back to the plain message
        out = format!("error: {}\n", error);
    }
    out
}
