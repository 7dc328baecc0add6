//! Command-line surface: `parse-date` and `validate-config`.

use std::{io, path::PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use crate::{ConfigError, DateOrder, DateResolver, ParseError, load_config};

/// Process exit status for a successful command.
pub const EXIT_OK: u8 = 0;
/// Process exit status when a command fails.
pub const EXIT_FAILURE: u8 = 1;
/// Process exit status for usage errors (clap's convention).
pub const EXIT_USAGE: u8 = 2;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Date(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Parse ambiguous dates and validate service configuration files.
#[derive(Debug, Parser)]
#[command(name = "date-resolver", version, about, long_about = None)]
#[command(arg_required_else_help = true, subcommand_required = true)]
pub struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn", value_name = "LEVEL")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a date string into ISO-8601 (YYYY-MM-DD)
    ParseDate {
        /// Date string like "01/31/2026" or "31/01/2026"
        date_str: String,

        /// Reading used when both leading components are 12 or less
        #[arg(long, value_enum, default_value_t = AmbiguousOrder::Us)]
        ambiguous_order: AmbiguousOrder,
    },

    /// Load a YAML config and print normalized JSON
    ValidateConfig {
        /// Path to YAML config file
        path: PathBuf,

        /// Validate without printing the contents; print 'OK' on success or the error on failure
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AmbiguousOrder {
    /// Month first (MM/DD/YYYY)
    Us,
    /// Day first (DD/MM/YYYY)
    Eu,
}

impl From<AmbiguousOrder> for DateOrder {
    fn from(order: AmbiguousOrder) -> Self {
        match order {
            AmbiguousOrder::Us => Self::MonthFirst,
            AmbiguousOrder::Eu => Self::DayFirst,
        }
    }
}

impl Cli {
    /// Runs the selected command, writing its output to `out`.
    ///
    /// Returns the exit status for failures the command reports itself
    /// (`validate-config --dry-run`).
    ///
    /// # Errors
    /// Date and config failures outside dry-run, and write errors on `out`.
    pub fn run(self, out: &mut impl io::Write) -> Result<u8, CliError> {
        match self.command {
            Command::ParseDate {
                date_str,
                ambiguous_order,
            } => {
                let resolver = DateResolver::new(ambiguous_order.into());
                let resolution = resolver.resolve(date_str.as_str())?;
                if resolution.ambiguous {
                    tracing::info!(
                        input = %date_str,
                        order = %resolution.order,
                        "ambiguous date, applied preferred order"
                    );
                }
                writeln!(out, "{}", resolution.date)?;
                Ok(EXIT_OK)
            }
            Command::ValidateConfig { path, dry_run: true } => match load_config(&path) {
                Ok(_) => {
                    writeln!(out, "OK")?;
                    Ok(EXIT_OK)
                }
                Err(e) => {
                    tracing::debug!(error = ?e, "config validation failed");
                    writeln!(out, "Error: {e}")?;
                    Ok(EXIT_FAILURE)
                }
            },
            Command::ValidateConfig {
                path,
                dry_run: false,
            } => {
                let config = load_config(&path)?;
                writeln!(out, "{}", config.to_json_pretty()?)?;
                Ok(EXIT_OK)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_ambiguous_order_conversion() {
        assert_eq!(DateOrder::from(AmbiguousOrder::Us), DateOrder::MonthFirst);
        assert_eq!(DateOrder::from(AmbiguousOrder::Eu), DateOrder::DayFirst);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["date-resolver", "parse-date", "01/02/2026"]).unwrap();
        assert_eq!(cli.log_level, "warn");
        assert!(matches!(
            cli.command,
            Command::ParseDate {
                ambiguous_order: AmbiguousOrder::Us,
                ..
            }
        ));
    }
}
