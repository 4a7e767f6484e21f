use anyhow::{Context, Result};
use log::{debug, warn};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::analyzers::analyze_file;
use crate::config::QuadlintConfig;
use crate::core::errors::Error;
use crate::core::{AnalysisReport, FileReport, RuleId};
use crate::io::output::{create_writer, OutputFormat};
use crate::io::walker::find_source_files;

pub struct CheckOptions {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub rules: Option<Vec<String>>,
    pub no_parallel: bool,
}

/// Runs the analysis and writes the report. Returns whether any diagnostics
/// were produced, which drives the process exit code.
pub fn run(options: CheckOptions) -> Result<bool> {
    let config_root = config_root(&options.path);
    let config = QuadlintConfig::load(options.config.as_deref(), &config_root)?;

    let mut settings = config.rule_settings()?;
    if let Some(selected) = &options.rules {
        let keep = selected
            .iter()
            .map(|name| name.parse::<RuleId>().map_err(Error::Configuration))
            .collect::<Result<Vec<_>, _>>()?;
        settings.retain(&keep);
    }

    let languages = config.enabled_languages()?;
    let files = find_source_files(&options.path, &languages, &config.ignore.patterns)?;
    debug!(
        "analyzing {} files under {}",
        files.len(),
        options.path.display()
    );

    let analyze = |path: &PathBuf| match analyze_file(path, &settings) {
        Ok(report) => Some(report),
        Err(err) => {
            warn!("skipping {}: {err:#}", path.display());
            None
        }
    };
    let mut reports: Vec<FileReport> = if options.no_parallel {
        files.iter().filter_map(analyze).collect()
    } else {
        files.par_iter().filter_map(analyze).collect()
    };
    reports.sort_by(|a, b| a.path.cmp(&b.path));

    let report = AnalysisReport::from_files(options.path.clone(), reports);

    let destination: Box<dyn Write> = match &options.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };
    let mut writer = create_writer(options.format, destination);
    writer.write_report(&report)?;

    Ok(report.summary.total > 0)
}

fn config_root(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.to_path_buf()
    } else {
        path.parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
