//! Output formatting for the CLI.
//!
//! Supports multiple output formats:
//! - `table` - Human-readable table (default)
//! - `json` - Structured JSON
//! - `yaml` - YAML format
//! - `jsonl` - JSON Lines (one object per line)

mod table;

use std::io::{self, IsTerminal};

use serde::Serialize;
pub use table::TableFormatter;

use crate::error::Result;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
    /// JSON Lines format (one object per line).
    JsonLines,
}

impl OutputFormat {
    /// Parse an output format from a string.
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            "jsonl" | "jsonlines" => Ok(Self::JsonLines),
            _ => Err(crate::error::Error::invalid_arg(format!(
                "Unknown output format '{s}'. Use: table, json, yaml, jsonl"
            ))),
        }
    }
}

/// Trait for types that can be displayed in the CLI.
pub trait Displayable {
    /// Display as a table row.
    fn table_row(&self) -> Vec<String>;

    /// Get column headers for table display.
    fn table_headers() -> Vec<&'static str>;
}

/// Output writer that handles format selection and terminal capabilities.
pub struct Output {
    format: OutputFormat,
    color: bool,
    quiet: bool,
}

impl Output {
    /// Create a new output writer.
    pub fn new(format: OutputFormat, color: bool, quiet: bool) -> Self {
        Self { format, color, quiet }
    }

    /// Create an output writer from CLI options.
    pub fn from_cli(format: &str, color: &str, quiet: bool) -> Result<Self> {
        let format = OutputFormat::parse(format)?;

        let color = match color {
            "always" => true,
            "never" => false,
            _ => io::stderr().is_terminal(),
        };

        Ok(Self::new(format, color, quiet))
    }

    /// Output a single serializable value. Table mode falls back to JSON.
    pub fn value<T: Serialize>(&self, value: &T) -> Result<()> {
        match self.format {
            OutputFormat::Json | OutputFormat::Table => self.json(value),
            OutputFormat::Yaml => self.yaml(value),
            OutputFormat::JsonLines => self.jsonl(value),
        }
    }

    /// Output a list of items as a table.
    pub fn table<T: Displayable + Serialize>(&self, items: &[T]) -> Result<()> {
        match self.format {
            OutputFormat::Table => {
                let mut formatter = TableFormatter::new();
                formatter.headers(T::table_headers());
                for item in items {
                    formatter.row(item.table_row());
                }
                formatter.print();
                Ok(())
            },
            OutputFormat::Json => self.json(items),
            OutputFormat::Yaml => self.yaml(items),
            OutputFormat::JsonLines => {
                for item in items {
                    self.jsonl(item)?;
                }
                Ok(())
            },
        }
    }

    /// Output raw JSON.
    fn json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        println!("{json}");
        Ok(())
    }

    /// Output YAML.
    fn yaml<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let yaml = serde_yaml::to_string(value)?;
        print!("{yaml}");
        Ok(())
    }

    /// Output JSON Lines (one object per line).
    fn jsonl<T: Serialize>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        println!("{json}");
        Ok(())
    }

    /// Print a message to stderr (info, warnings, progress).
    pub fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    /// Print a success message.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            if self.color {
                eprintln!("\x1b[32m✓\x1b[0m {message}");
            } else {
                eprintln!("✓ {message}");
            }
        }
    }

    /// Print a warning message.
    pub fn warn(&self, message: &str) {
        if !self.quiet {
            if self.color {
                eprintln!("\x1b[33m⚠\x1b[0m {message}");
            } else {
                eprintln!("⚠ {message}");
            }
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        if self.color {
            eprintln!("\x1b[31m✗\x1b[0m {message}");
        } else {
            eprintln!("✗ {message}");
        }
    }

    /// Print a line to stdout.
    pub fn line(&self, text: &str) {
        println!("{text}");
    }

    /// Get the current output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new(OutputFormat::Table, false, false)
    }
}
