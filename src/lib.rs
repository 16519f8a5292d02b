// Copyright 2025 the Curvesketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Curvesketch: an interactive editor for polyline, Bezier and Lagrange curves

use anyhow::{Context, Result, bail};
use std::path::PathBuf;

pub mod config;
pub mod curve;
pub mod editing;
pub mod error;
pub mod model;
pub mod replay;
pub mod scene;
pub mod settings;
pub mod theme;
pub mod tools;

pub use config::Config;
pub use curve::{Curve, CurveKind, RenderGeometry};
pub use editing::SketchSession;
pub use error::CurveError;
pub use scene::Scene;

const USAGE: &str = "Usage: curvesketch <script.toml> [--config <config.toml>]";

/// Entry point for the headless Curvesketch driver
pub fn run() -> Result<()> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("curvesketch=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CommandLine::parse(std::env::args().skip(1))?;

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let script = replay::Script::load(&args.script)?;
    tracing::info!(
        "Replaying {} event(s) from {}",
        script.events.len(),
        args.script.display()
    );

    let mut session = SketchSession::new(&config);
    for frame in replay::replay(&mut session, &script) {
        print!("{frame}");
    }
    Ok(())
}

/// Parsed command-line arguments
#[derive(Debug, PartialEq)]
struct CommandLine {
    script: PathBuf,
    config: Option<PathBuf>,
}

impl CommandLine {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut script = None;
        let mut config = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args.next().context("--config needs a path")?;
                    config = Some(PathBuf::from(path));
                }
                "-h" | "--help" => bail!(USAGE),
                _ if script.is_none() => script = Some(PathBuf::from(arg)),
                _ => bail!("unexpected argument {arg:?}\n{USAGE}"),
            }
        }

        let script = script.with_context(|| USAGE.to_string())?;
        Ok(Self { script, config })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CommandLine> {
        CommandLine::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn script_only() {
        let args = parse(&["draw.toml"]).unwrap();
        assert_eq!(args.script, PathBuf::from("draw.toml"));
        assert_eq!(args.config, None);
    }

    #[test]
    fn config_before_or_after_script() {
        let expected = CommandLine {
            script: PathBuf::from("draw.toml"),
            config: Some(PathBuf::from("keys.toml")),
        };
        assert_eq!(parse(&["draw.toml", "--config", "keys.toml"]).unwrap(), expected);
        assert_eq!(parse(&["--config", "keys.toml", "draw.toml"]).unwrap(), expected);
    }

    #[test]
    fn bad_arguments() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["draw.toml", "--config"]).is_err());
        assert!(parse(&["a.toml", "b.toml"]).is_err());
    }
}
