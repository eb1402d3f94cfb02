//! Output formatting for parse results.

use crate::CommandLine;

/// Supported output formats.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
}

/// Formats a parse result in the requested output format.
pub fn format_command_line(cmd: &CommandLine, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(cmd).map_err(|e| format!("JSON serialization failed: {e}"))
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(cmd).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Table => Ok(command_line_to_table(cmd)),
    }
}

fn command_line_to_table(cmd: &CommandLine) -> String {
    let mut out = String::new();

    let names: Vec<String> = cmd.options().map(|p| p.option.to_string()).collect();
    let width = names.iter().map(String::len).max().unwrap_or(0);

    for (name, parsed) in names.iter().zip(cmd.options()) {
        if parsed.values.is_empty() {
            out.push_str(&format!("{name}\n"));
        } else {
            out.push_str(&format!("{name:<width$}  {}\n", parsed.values.join(" ")));
        }
    }

    if !cmd.args().is_empty() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str("Arguments:\n");
        for arg in cmd.args() {
            out.push_str(&format!("  {arg}\n"));
        }
    }

    out
}
