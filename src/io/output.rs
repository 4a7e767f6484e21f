use clap::ValueEnum;
use colored::*;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

use crate::core::{AnalysisReport, Diagnostic, Severity};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
}

pub fn create_writer(format: OutputFormat, destination: Box<dyn Write>) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(destination)),
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(destination)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        for (file, diagnostics) in group_by_file(&report.diagnostics) {
            writeln!(self.writer, "{}", file.display().to_string().bold())?;
            for diagnostic in diagnostics {
                let severity = match diagnostic.severity {
                    Severity::Warn => "warn".yellow(),
                    Severity::Error => "error".red(),
                };
                writeln!(
                    self.writer,
                    "  {}:{}  {}  {}  {}",
                    diagnostic.line,
                    diagnostic.column.unwrap_or(0),
                    severity,
                    diagnostic.rule.to_string().cyan(),
                    diagnostic.message
                )?;
            }
            writeln!(self.writer)?;
        }

        let summary = report.summary;
        if summary.total == 0 {
            writeln!(
                self.writer,
                "No issues found in {}",
                pluralize(report.files_analyzed, "file")
            )?;
        } else {
            let line = format!(
                "Found {} ({}, {}) in {}",
                pluralize(summary.total, "issue"),
                pluralize(summary.errors, "error"),
                pluralize(summary.warnings, "warning"),
                pluralize(report.files_analyzed, "file")
            );
            let styled = if summary.errors > 0 {
                line.red().bold()
            } else {
                line.yellow().bold()
            };
            writeln!(self.writer, "{styled}")?;
        }
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# quadlint report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Analyzed {} under `{}`: {}, {}.",
            pluralize(report.files_analyzed, "file"),
            report.project_path.display(),
            pluralize(report.summary.errors, "error"),
            pluralize(report.summary.warnings, "warning")
        )?;
        writeln!(self.writer)?;

        if report.diagnostics.is_empty() {
            writeln!(self.writer, "No issues found.")?;
            return Ok(());
        }

        writeln!(self.writer, "| File | Line | Severity | Rule | Message |")?;
        writeln!(self.writer, "|------|------|----------|------|---------|")?;
        for diagnostic in &report.diagnostics {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} |",
                diagnostic.file.display(),
                diagnostic.line,
                diagnostic.severity,
                diagnostic.rule,
                diagnostic.message.replace('\n', " ")
            )?;
        }
        Ok(())
    }
}

fn group_by_file(diagnostics: &[Diagnostic]) -> BTreeMap<PathBuf, Vec<&Diagnostic>> {
    let mut grouped: BTreeMap<PathBuf, Vec<&Diagnostic>> = BTreeMap::new();
    for diagnostic in diagnostics {
        grouped
            .entry(diagnostic.file.clone())
            .or_default()
            .push(diagnostic);
    }
    grouped
}

fn pluralize(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FileReport, Language, RuleId};

    fn sample_report(diagnostics: Vec<Diagnostic>) -> AnalysisReport {
        AnalysisReport::from_files(
            PathBuf::from("."),
            vec![FileReport {
                path: PathBuf::from("a.js"),
                language: Language::JavaScript,
                diagnostics,
            }],
        )
    }

    fn sample_diagnostic() -> Diagnostic {
        Diagnostic {
            id: "t".to_string(),
            rule: RuleId::NoImmutableReduce,
            severity: Severity::Warn,
            file: PathBuf::from("a.js"),
            line: 3,
            column: Some(8),
            message: "Avoid spreading accumulator in reduce".to_string(),
        }
    }

    #[test]
    fn terminal_output_lists_diagnostics_and_summary() {
        let report = sample_report(vec![sample_diagnostic()]);
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .write_report(&report)
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("a.js"));
        assert!(text.contains("3:8"));
        assert!(text.contains("Avoid spreading accumulator"));
        assert!(text.contains("Found 1 issue (0 errors, 1 warning) in 1 file"));
    }

    #[test]
    fn terminal_output_reports_clean_runs() {
        let report = sample_report(vec![]);
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .write_report(&report)
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("No issues found in 1 file"));
    }

    #[test]
    fn json_output_round_trips() {
        let report = sample_report(vec![sample_diagnostic()]);
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_report(&report).unwrap();
        let parsed: AnalysisReport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.summary.total, 1);
        assert_eq!(parsed.diagnostics[0].rule, RuleId::NoImmutableReduce);
    }

    #[test]
    fn markdown_output_tables_diagnostics() {
        let report = sample_report(vec![sample_diagnostic()]);
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_report(&report)
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("# quadlint report"));
        assert!(text.contains("| a.js | 3 | warn | no-immutable-reduce |"));
    }
}
