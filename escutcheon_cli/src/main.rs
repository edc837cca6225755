// Copyright 2026 the Escutcheon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `escutcheon`: decorate PNG images with a shield and badge artwork.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use escutcheon_gravity::{Gravity, Offset};
use escutcheon_raster::{
    ComposeOptions, RasterError, ShieldOverlay, compose, read_png, write_png,
};
use escutcheon_shield::Content;
use escutcheon_text::{Font, FontError};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("an output file can only be given when there is exactly one input file")]
    OutputNeedsSingleInput,
    #[error("--shield needs a font; pass --font or set ESCUTCHEON_FONT")]
    MissingFont,
    #[error("cannot read font {}: {source}", path.display())]
    ReadFont {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot load font {}: {source}", path.display())]
    LoadFont {
        path: PathBuf,
        #[source]
        source: FontError,
    },
    #[error(transparent)]
    Raster(#[from] RasterError),
}

#[derive(Parser, Debug)]
#[command(
    name = "escutcheon",
    version,
    about = "Overlay a shields.io-style shield and badge artwork onto PNG images"
)]
struct Cli {
    /// PNG files to decorate. Each is overwritten unless --output is given.
    #[arg(required = true, value_name = "INPUT")]
    inputs: Vec<PathBuf>,

    /// Write the result here instead of overwriting the input.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Convert the image to grayscale before decorating it.
    #[arg(long)]
    grayscale: bool,

    /// Shield to draw, as `label-color` or `label-message-color`.
    #[arg(long, value_name = "SPEC")]
    shield: Option<Content>,

    /// Shield width as a fraction of the image width.
    #[arg(long, value_name = "FRACTION", default_value_t = 1.0, value_parser = parse_scale)]
    shield_scale: f64,

    /// Where the shield is anchored.
    #[arg(long, value_name = "GRAVITY", default_value_t = Gravity::North)]
    shield_gravity: Gravity,

    /// Offset from the anchor, such as `+10+5` or `-5%+0`.
    #[arg(long, value_name = "GEOMETRY", allow_hyphen_values = true)]
    shield_geometry: Option<Offset>,

    /// TrueType or OpenType font for the shield text.
    #[arg(long, env = "ESCUTCHEON_FONT", value_name = "FILE")]
    font: Option<PathBuf>,

    /// Shield font size in pixels per em.
    #[arg(long, value_name = "PX", default_value_t = 11.0)]
    font_size: f32,

    /// PNG artwork stretched over the whole image after the shield.
    #[arg(long, value_name = "FILE")]
    badge: Option<PathBuf>,

    /// Log more; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_scale(s: &str) -> Result<f64, String> {
    let scale: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(format!("scale must be a positive number, got {s}"))
    }
}

/// Pair each input with the file its result is written to.
fn plan<'a>(
    inputs: &'a [PathBuf],
    output: Option<&'a Path>,
) -> Result<Vec<(&'a Path, &'a Path)>, CliError> {
    match (inputs, output) {
        ([input], Some(output)) => Ok(vec![(input.as_path(), output)]),
        (_, Some(_)) => Err(CliError::OutputNeedsSingleInput),
        (inputs, None) => Ok(inputs
            .iter()
            .map(|input| (input.as_path(), input.as_path()))
            .collect()),
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let jobs = plan(&cli.inputs, cli.output.as_deref())?;

    let font_data = match (&cli.shield, &cli.font) {
        (Some(_), Some(path)) => Some(std::fs::read(path).map_err(|source| {
            CliError::ReadFont {
                path: path.clone(),
                source,
            }
        })?),
        (Some(_), None) => return Err(CliError::MissingFont),
        (None, _) => None,
    };
    let font = match (&font_data, &cli.font) {
        (Some(data), Some(path)) => Some(Font::new(data, cli.font_size).map_err(|source| {
            CliError::LoadFont {
                path: path.clone(),
                source,
            }
        })?),
        _ => None,
    };

    let badge = cli.badge.as_deref().map(read_png).transpose()?;

    let shield = match (&cli.shield, &font) {
        (Some(content), Some(font)) => Some(ShieldOverlay {
            content: content.clone(),
            font,
            scale: cli.shield_scale,
            gravity: cli.shield_gravity,
            offset: cli.shield_geometry,
        }),
        _ => None,
    };
    let options = ComposeOptions {
        grayscale: cli.grayscale,
        shield,
        badge: badge.as_ref(),
    };
    debug!(
        grayscale = options.grayscale,
        shield = ?cli.shield.as_ref().map(ToString::to_string),
        badge = ?cli.badge,
        "compose options"
    );

    for (input, output) in jobs {
        let image = read_png(input)?;
        let image = compose(image, &options)?;
        write_png(output, &image)?;
        info!(input = %input.display(), output = %output.display(), "decorated");
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use escutcheon_gravity::OffsetComponent;
    use escutcheon_shield::NamedColor;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("escutcheon").chain(args.iter().copied()))
    }

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = parse(&["a.png"]).unwrap();
        assert_eq!(cli.inputs, [PathBuf::from("a.png")]);
        assert_eq!(cli.shield_scale, 1.0);
        assert_eq!(cli.shield_gravity, Gravity::North);
        assert_eq!(cli.font_size, 11.0);
        assert!(cli.shield.is_none());
        assert!(cli.shield_geometry.is_none());
        assert!(!cli.grayscale);
    }

    #[test]
    fn shield_options_parse() {
        let cli = parse(&[
            "--shield",
            "build-passing-success",
            "--shield-gravity",
            "SouthEast",
            "--shield-geometry",
            "-5%+10",
            "--shield-scale",
            "0.25",
            "-vv",
            "icon.png",
        ])
        .unwrap();
        let content = cli.shield.unwrap();
        assert_eq!(content.label(), "build");
        assert_eq!(content.message(), Some("passing"));
        assert_eq!(content.color(), NamedColor::BrightGreen);
        assert_eq!(cli.shield_gravity, Gravity::SouthEast);
        assert_eq!(
            cli.shield_geometry,
            Some(Offset::new(
                OffsetComponent::Percent(-5.0),
                OffsetComponent::Pixels(10.0)
            ))
        );
        assert_eq!(cli.shield_scale, 0.25);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn bad_values_are_usage_errors() {
        assert!(parse(&["--shield", "build-purple", "a.png"]).is_err());
        assert!(parse(&["--shield-gravity", "north", "a.png"]).is_err());
        assert!(parse(&["--shield-geometry", "10+5", "a.png"]).is_err());
        assert!(parse(&["--shield-scale", "0", "a.png"]).is_err());
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn output_needs_single_input() {
        let inputs = [PathBuf::from("a.png"), PathBuf::from("b.png")];
        assert!(matches!(
            plan(&inputs, Some(Path::new("out.png"))),
            Err(CliError::OutputNeedsSingleInput)
        ));

        let jobs = plan(&inputs, None).unwrap();
        assert_eq!(
            jobs,
            [
                (Path::new("a.png"), Path::new("a.png")),
                (Path::new("b.png"), Path::new("b.png"))
            ]
        );

        let jobs = plan(&inputs[..1], Some(Path::new("out.png"))).unwrap();
        assert_eq!(jobs, [(Path::new("a.png"), Path::new("out.png"))]);
    }

    #[test]
    fn shield_without_font_fails_before_touching_files() {
        let mut cli = parse(&["--shield", "a-red", "/nonexistent/escutcheon.png"]).unwrap();
        cli.font = None;
        assert!(matches!(run(&cli), Err(CliError::MissingFont)));
    }
}
