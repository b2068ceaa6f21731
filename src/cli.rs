//! Command-line interface for chatline.
//!
//! Subcommands measure text, center it on the chat line, and inspect the glyph
//! table. Results go to stdout; logs go to stderr.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chatline_config::Config;
use chatline_font::FontMetrics;
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use crate::color::ChatColor;
use crate::legacy::{strip_color, translate_alternate_codes};
use crate::recipient::{OutputFormat, WriterRecipient};
use crate::text::Text;

/// chatline - measure and center chat messages for the game's bitmap font
#[derive(Parser, Debug)]
#[command(name = "chatline")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: chatline/config.yaml in the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace (overrides CHATLINE_LOG)
    #[arg(long, global = true, value_name = "LEVEL", value_parser = parse_log_level)]
    pub log_level: Option<LevelFilter>,

    /// Treat this character as an alternate color-code prefix (e.g. '&' for "&cRed")
    #[arg(long, global = true, value_name = "CHAR")]
    pub alt_char: Option<char>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the rendered pixel width of TEXT
    Width {
        text: String,

        /// Measure as bold
        #[arg(long)]
        bold: bool,

        /// Measure as strikethrough (takes precedence over --bold)
        #[arg(long)]
        strikethrough: bool,
    },
    /// Print TEXT centered on the chat line
    Center {
        text: String,

        /// Padding character (default from config, '=' if unset)
        #[arg(short, long)]
        padding: Option<char>,

        /// Separator placed between the padding and the text on both sides
        #[arg(short, long, default_value = " ")]
        separator: String,

        /// Color or format applied to the padding; repeatable
        #[arg(long = "style", value_name = "COLOR")]
        styles: Vec<ChatColor>,

        /// Color or format applied to the text itself; repeatable
        #[arg(long = "text-style", value_name = "COLOR")]
        text_styles: Vec<ChatColor>,

        /// Output encoding
        #[arg(long, value_enum, default_value_t = FormatArg::Legacy)]
        format: FormatArg,
    },
    /// Print the normal and bold width of each character in CHARS
    Glyph { chars: String },
}

/// Output encoding selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Legacy,
    Plain,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Legacy => OutputFormat::Legacy,
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn parse_log_level(value: &str) -> Result<LevelFilter, String> {
    crate::debug::parse_level(value).ok_or_else(|| format!("invalid log level '{value}'"))
}

/// Load the config named on the command line, or the default one.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Config::load().context("failed to load default config"),
    }
}

/// Run the parsed command, writing results to stdout.
pub fn run(cli: Cli) -> Result<()> {
    run_with_output(cli, std::io::stdout().lock())
}

/// Run the parsed command, writing results to `out`.
pub fn run_with_output<W: Write>(cli: Cli, mut out: W) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let metrics = FontMetrics::from_config(&config);
    let decode = |s: &str| match cli.alt_char {
        Some(alt) => translate_alternate_codes(alt, s),
        None => s.to_string(),
    };

    match cli.command {
        Commands::Width {
            text,
            bold,
            strikethrough,
        } => {
            let text = decode(&text);
            let width = metrics.rendered_length(&strip_color(&text), bold, strikethrough);
            writeln!(out, "{width}")?;
        }
        Commands::Center {
            text,
            padding,
            separator,
            styles,
            text_styles,
            format,
        } => {
            let padding = padding.unwrap_or(config.padding);
            let line = Text::of(decode(&text)).color(&text_styles).center_with(
                &metrics,
                padding,
                &Text::of(decode(&separator)),
                &styles,
            );
            let recipient = WriterRecipient::new(out, format.into());
            line.send(&recipient)?;
        }
        Commands::Glyph { chars } => {
            let table = metrics.table();
            for c in chars.chars() {
                let glyph = table.width_of(c);
                let source = if table.lookup(c).is_some() {
                    "table"
                } else {
                    table.missing_glyph().display_name()
                };
                writeln!(
                    out,
                    "{:?}\tnormal={}\tbold={}\t({})",
                    c, glyph.normal, glyph.bold, source
                )?;
            }
        }
    }
    Ok(())
}
