use rayon::prelude::*;

use crate::checker::{Checker, FileTask, InspectionResult, Inspector};
use crate::cli::Cli;
use crate::config::resolve_all;
use crate::error::Result;
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::scanner::select;
use crate::{EXIT_CONFIG_ERROR, EXIT_FINDINGS_FOUND, EXIT_SUCCESS};

use super::context::{color_choice_to_mode, load_config, normalize_extensions};

/// Run an inspection and print the report, returning the process exit code.
#[must_use]
pub fn run_inspect(cli: &Cli) -> i32 {
    match run_inspect_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_inspect_impl(cli: &Cli) -> Result<i32> {
    let result = inspect_files(cli)?;
    let output = render_result(&result, cli)?;
    print!("{output}");

    Ok(if result.is_clean() {
        EXIT_SUCCESS
    } else {
        EXIT_FINDINGS_FOUND
    })
}

/// Load configuration, select files and inspect them.
///
/// All configuration is resolved before any file is read, so a bad option
/// value aborts the run without partial output.
///
/// # Errors
/// Returns an error for configuration problems or a missing root path.
pub fn inspect_files(cli: &Cli) -> Result<InspectionResult> {
    let extensions = normalize_extensions(&cli.extensions)?;
    let loaded = load_config(cli.config.as_deref(), cli.no_config)?;
    if let Some(source) = &loaded.source {
        tracing::info!("Using configuration from {}", source.display());
    }
    let configs = resolve_all(&loaded.sections, &extensions)?;

    let selection = select(&cli.paths, &extensions, &cli.ignore)?;
    let tasks: Vec<FileTask> = selection
        .files
        .into_iter()
        .map(|file| {
            let config = configs.get(&file.extension).cloned().unwrap_or_default();
            FileTask::new(file.path, file.extension, config)
        })
        .collect();
    tracing::info!("Inspecting {} file(s)", tasks.len());

    let inspector = Inspector::new();
    let per_file: Vec<_> = tasks.par_iter().map(|task| inspector.check(task)).collect();

    let mut result: InspectionResult = per_file.into_iter().collect();
    result.record_skipped(selection.skipped);
    Ok(result)
}

/// Format an inspection result as selected on the command line.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render_result(result: &InspectionResult, cli: &Cli) -> Result<String> {
    match cli.format {
        OutputFormat::Text => TextFormatter::new(color_choice_to_mode(cli.color))
            .with_quiet(cli.quiet)
            .format(result),
        OutputFormat::Json => JsonFormatter.format(result),
    }
}

#[cfg(test)]
#[path = "inspect_tests.rs"]
mod tests;
