//! fabkit application shell.
//!
//! Reads a configuration bundle, runs the measure and render passes the way a
//! host container would, and reports the outcome as JSON.

pub mod cli;

pub use cli::{Cli, parse_constraint};

use fabkit_core::{
    CircularButton, ConfigBundle, MeasurePolicy, ResolveError, ResolverConfig, WidgetStyle,
};
use fabkit_render::{DrawList, RenderContext, render_button};
use kurbo::{Point, Rect};
use serde::Serialize;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read bundle: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid constraint {0:?}: expected exact:N, at-most:N or unconstrained")]
    InvalidConstraint(String),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Outcome of one measure and render cycle.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub width: u32,
    pub height: u32,
    pub effective_radius: u32,
    pub bounding_arc: Option<Rect>,
    pub style: WidgetStyle,
    pub draw_list: DrawList,
}

impl Report {
    pub fn to_json(&self, pretty: bool) -> AppResult<String> {
        Ok(if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        })
    }
}

/// Resolve the bundle named on the command line, measure it and render it.
pub fn run(cli: &Cli) -> AppResult<Report> {
    let json = std::fs::read_to_string(&cli.bundle)?;
    let bundle = ConfigBundle::from_json(&json)?;
    log::info!("Loaded bundle from {}", cli.bundle.display());

    let config = ResolverConfig::new(cli.density).require_overlay(cli.require_overlay);
    let policy = if cli.legacy {
        MeasurePolicy::legacy()
    } else {
        MeasurePolicy::default()
    };
    let mut button = CircularButton::new(&bundle, &config)?.with_policy(policy);

    let measured = button.measure(cli.width, cli.height);
    log::info!(
        "Measured {}x{} (radius {})",
        measured.width,
        measured.height,
        button.effective_radius()
    );

    let bounds = Rect::from_origin_size(Point::ZERO, measured.to_size());
    let ctx = RenderContext::new().with_hairline_offset(cli.hairline);
    let mut draw_list = DrawList::new();
    render_button(&mut draw_list, &button, bounds, &ctx);

    Ok(Report {
        width: measured.width,
        height: measured.height,
        effective_radius: button.effective_radius(),
        bounding_arc: button.bounding_arc(),
        style: button.style().clone(),
        draw_list,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn bundle_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    fn cli_for(file: &tempfile::NamedTempFile, extra: &[&str]) -> Cli {
        let path = file.path().to_str().unwrap().to_string();
        let mut args = vec!["fabkit".to_string(), path];
        args.extend(extra.iter().map(|s| s.to_string()));
        Cli::try_parse_from(args).unwrap()
    }

    const END_TO_END: &str = r##"{
        "radius": 0,
        "fillColor": "#FF0000FF",
        "strokeColor": "#00FF00FF",
        "strokeWidth": 4,
        "overlayGraphic": { "asset": "ic_add" }
    }"##;

    #[test]
    fn test_run_end_to_end() {
        let file = bundle_file(END_TO_END);
        let report = run(&cli_for(&file, &[])).unwrap();
        assert_eq!((report.width, report.height), (200, 200));
        assert_eq!(report.effective_radius, 100);
        assert_eq!(report.style.radius, 0);
        assert_eq!(report.bounding_arc, Some(Rect::new(2.0, 2.0, 198.0, 198.0)));
        assert_eq!(report.draw_list.len(), 3);
    }

    #[test]
    fn test_run_legacy_ignores_bound() {
        let file = bundle_file(r#"{ "radius": 90 }"#);
        let clamped = run(&cli_for(&file, &["--width", "at-most:100", "--height", "at-most:100"]))
            .unwrap();
        assert_eq!((clamped.width, clamped.height), (100, 100));

        let legacy = run(&cli_for(
            &file,
            &["--width", "at-most:100", "--height", "at-most:100", "--legacy"],
        ))
        .unwrap();
        assert_eq!((legacy.width, legacy.height), (180, 180));
    }

    #[test]
    fn test_run_require_overlay() {
        let file = bundle_file("{}");
        assert!(matches!(
            run(&cli_for(&file, &["--require-overlay"])),
            Err(AppError::Resolve(ResolveError::MissingRequiredAsset))
        ));
    }

    #[test]
    fn test_run_missing_file() {
        let cli = Cli::try_parse_from(["fabkit", "/nonexistent/fabkit/bundle.json"]).unwrap();
        assert!(matches!(run(&cli), Err(AppError::Io(_))));
    }

    #[test]
    fn test_report_json() {
        let file = bundle_file(END_TO_END);
        let report = run(&cli_for(&file, &[])).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&report.to_json(false).unwrap()).unwrap();
        assert_eq!(value["effectiveRadius"], 100);
        assert_eq!(value["style"]["strokeColor"], "#00FF00FF");
        assert_eq!(value["drawList"]["ops"][2]["asset"], "ic_add");
    }
}
