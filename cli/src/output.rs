//! Output formatting for demo reports.

use command_args_core::{ArgumentList, ArgumentParser, FlagCell, ValueCell};
use serde::Serialize;

/// Supported output formats.
#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

/// Snapshot of the demo options after a parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub a_option: bool,
    pub b_option: bool,
    pub c_value: String,
    pub arguments: Vec<String>,
    pub errors: Vec<String>,
}

impl DemoReport {
    /// Reads the demo cells and the parser's error log.
    pub fn collect(
        a: &FlagCell,
        b: &FlagCell,
        c: &ValueCell,
        arguments: &ArgumentList,
        parser: &ArgumentParser<'_>,
    ) -> Self {
        Self {
            a_option: a.get(),
            b_option: b.get(),
            c_value: c.get(),
            arguments: arguments.to_vec(),
            errors: parser.error_messages(),
        }
    }
}

/// Formats a report in the requested output format.
pub fn format_report(report: &DemoReport, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(report_to_text(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(report).map_err(|e| format!("YAML serialization failed: {e}"))
        }
    }
}

fn report_to_text(report: &DemoReport) -> String {
    let mut out = String::new();

    if !report.errors.is_empty() {
        out.push_str("ERRORS: \n");
        for error in &report.errors {
            out.push_str(&format!("    {error}\n"));
        }
        out.push('\n');
    }

    if report.a_option {
        out.push_str("A switched on.\n");
    } else {
        out.push_str("A off by default.\n");
    }

    if report.b_option {
        out.push_str("B on by default.\n");
    } else {
        out.push_str("B switched off.\n");
    }

    // A value option always leaves a string behind, possibly empty.
    if report.c_value.is_empty() {
        out.push_str("C has no value as it was not specified.\n");
    } else {
        out.push_str(&format!("C has value \"{}\".\n", report.c_value));
    }

    out.push_str("Arguments:");
    for argument in &report.arguments {
        out.push(' ');
        out.push_str(argument);
    }
    out.push('\n');
    out
}
