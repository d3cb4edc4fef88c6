//! Subcommand handlers for convert and config actions.

use std::io::Write;
use std::path::{Path, PathBuf};

use super::args::{ConfigAction, RenderOptions};
use crate::ascii::{columns_for_display_width, RenderError};
use crate::config::{default_path, Config, ConfigError, DEFAULT_CONFIG_TOML};
use crate::error::ConvertError;
use crate::session::{Session, SessionSettings};

/// Errors surfaced to the user by a subcommand.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Config file already exists: {}", .0.display())]
    ConfigExists(PathBuf),
}

/// Pick the output column count.
///
/// CLI --width > config `columns` > display width / char width, where each
/// of those two also comes from the CLI first, then the config.
pub fn resolve_columns(opts: &RenderOptions, config: &Config) -> Result<u32, RenderError> {
    if let Some(width) = opts.width.or(config.render.columns) {
        if width == 0 {
            return Err(RenderError::InvalidArgument(
                "target width must be at least 1".to_string(),
            ));
        }
        return Ok(width);
    }
    let display = opts.display_width.unwrap_or(config.render.display_width);
    let char_px = opts.char_width.unwrap_or(config.render.char_pixel_width);
    columns_for_display_width(display, char_px)
}

/// Merge CLI overrides onto the config's session settings.
pub fn resolve_settings(opts: &RenderOptions, config: &Config) -> Result<SessionSettings, ConfigError> {
    let mut settings = config.session_settings()?;
    if let Some(sampling) = opts.sampling {
        settings.sampling = sampling.into();
    }
    if let Some(line_ending) = opts.line_ending {
        settings.line_ending = line_ending.into();
    }
    Ok(settings)
}

/// Convert one image: print it to `out` unless `quiet`, save it if asked.
pub fn run_convert<W: Write>(
    input: &Path,
    output: Option<&Path>,
    quiet: bool,
    opts: &RenderOptions,
    config: &Config,
    out: &mut W,
) -> Result<(), CommandError> {
    let columns = resolve_columns(opts, config)?;
    let mut session = Session::new(resolve_settings(opts, config)?);

    session.load(input, columns)?;
    if !quiet {
        out.write_all(session.text().as_bytes())?;
        out.flush()?;
    }

    if let Some(path) = output {
        session.save(path)?;
    }
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action<W: Write>(
    action: ConfigAction,
    config_path: Option<&Path>,
    out: &mut W,
) -> Result<(), CommandError> {
    let config_path = config_path.map(Path::to_path_buf).unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            let config = if config_path.exists() {
                Config::load(Some(config_path.as_path()))?
            } else {
                Config::default()
            };
            let settings = config.session_settings()?;
            let columns = resolve_columns(&RenderOptions::default(), &config)?;

            writeln!(out, "Current configuration:")?;
            match config.render.columns {
                Some(c) => writeln!(out, "  Columns: {}", c)?,
                None => writeln!(
                    out,
                    "  Columns: {} (display width {}px / {}px per char)",
                    columns, config.render.display_width, config.render.char_pixel_width
                )?,
            }
            writeln!(out, "  Sampling: {}", settings.sampling.name())?;
            writeln!(out, "  Line ending: {}", settings.line_ending.name())?;
            writeln!(out)?;

            if config_path.exists() {
                writeln!(out, "Config file: {} (exists)", config_path.display())?;
            } else {
                writeln!(out, "Config file: {} (not found)", config_path.display())?;
            }
        }
        ConfigAction::Init => {
            if config_path.exists() {
                return Err(CommandError::ConfigExists(config_path));
            }

            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&config_path, DEFAULT_CONFIG_TOML)?;

            writeln!(out, "Created config file: {}", config_path.display())?;
        }
    }
    Ok(())
}
