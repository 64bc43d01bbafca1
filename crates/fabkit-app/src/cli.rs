//! Command-line arguments.

use clap::Parser;
use fabkit_core::{MeasureMode, MeasureSpec};
use std::path::PathBuf;

use crate::AppError;

#[derive(Parser, Debug, Clone)]
#[command(name = "fabkit")]
#[command(about = "Resolve, measure and render a circular action button", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON configuration bundle
    pub bundle: PathBuf,
    /// Width constraint: `exact:N`, `at-most:N` or `unconstrained`
    #[arg(long, default_value = "at-most:300", value_parser = parse_constraint)]
    pub width: MeasureSpec,
    /// Height constraint: `exact:N`, `at-most:N` or `unconstrained`
    #[arg(long, default_value = "at-most:300", value_parser = parse_constraint)]
    pub height: MeasureSpec,
    /// Display density scale factor
    #[arg(long, default_value_t = 1.0)]
    pub density: f64,
    /// Use the legacy measure policy (unclamped at-most, zero when unconstrained)
    #[arg(long)]
    pub legacy: bool,
    /// Fail when the bundle has no overlay graphic
    #[arg(long)]
    pub require_overlay: bool,
    /// Translation applied before drawing
    #[arg(long, default_value_t = 1.0)]
    pub hairline: f64,
    /// Pretty-print the JSON report
    #[arg(long)]
    pub pretty: bool,
}

/// Parse `exact:N`, `at-most:N` or `unconstrained`.
pub fn parse_constraint(s: &str) -> Result<MeasureSpec, AppError> {
    let invalid = || AppError::InvalidConstraint(s.to_string());
    let (mode, size) = match s.split_once(':') {
        Some((mode, size)) => (mode, Some(size)),
        None => (s, None),
    };
    let mode = match mode.trim().to_ascii_lowercase().as_str() {
        "exact" => MeasureMode::Exact,
        "at-most" | "atmost" => MeasureMode::AtMost,
        "unconstrained" => MeasureMode::Unconstrained,
        _ => return Err(invalid()),
    };
    let size = match (mode, size) {
        (MeasureMode::Unconstrained, None) => 0,
        (MeasureMode::Unconstrained, Some(_)) | (_, None) => return Err(invalid()),
        (_, Some(size)) => size.trim().parse().map_err(|_| invalid())?,
    };
    Ok(MeasureSpec::new(mode, size))
}
