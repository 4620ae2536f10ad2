//! Template rendering for CLI output using outstanding

use asterlib::{Aggregation, Report, SkippedPath};
use console::Style;
use outstanding::{render_auto, render_with_output, Theme};

/// Include templates at compile time
const TOTAL_TEMPLATE: &str = include_str!("../templates/total.jinja");
const FILES_TEMPLATE: &str = include_str!("../templates/files.jinja");

/// Re-export OutputMode for callers
pub use outstanding::OutputMode;

/// Create the theme; the layouts carry no style tags
fn create_theme() -> Theme {
    Theme::new()
}

/// Map the `--output` value to an output mode
pub fn parse_output_mode(value: &str) -> OutputMode {
    match value {
        "json" => OutputMode::Json,
        "text" => OutputMode::Text,
        "term-debug" => OutputMode::TermDebug,
        "term" => OutputMode::Term,
        _ => OutputMode::Auto,
    }
}

/// Render a report, combined or one line per file, or as JSON
pub fn render(report: &Report, output_mode: OutputMode) -> anyhow::Result<String> {
    let theme = create_theme();

    let template = match report.aggregation {
        Aggregation::Total => TOTAL_TEMPLATE,
        Aggregation::ByFile => FILES_TEMPLATE,
    };

    // For JSON mode, use outstanding's render_auto for serialization
    if output_mode.is_structured() {
        let json = render_auto(template, report, &theme, output_mode)
            .map_err(|e| anyhow::anyhow!("{e}"))?;
        return Ok(format!("{}\n", json.trim_end()));
    }

    let rendered = render_with_output(template, report, &theme, output_mode)
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    let body = rendered.trim_end_matches('\n');

    // Per-file rows follow a blank line, the total block ends with one
    Ok(match report.aggregation {
        Aggregation::Total => format!("{body}\n\n"),
        Aggregation::ByFile if body.is_empty() => "\n".to_string(),
        Aggregation::ByFile => format!("\n{body}\n"),
    })
}

/// Warning line for a path that could not be processed
pub fn render_warning(skipped: &SkippedPath) -> String {
    Style::new()
        .yellow()
        .for_stderr()
        .apply_to(format!(
            "Warning, couldn't process file {} : {}",
            skipped.path.display(),
            skipped.reason
        ))
        .to_string()
}
