//! Application configuration from CLI flags.

use clap::{ArgAction, Parser, Subcommand};

/// jo: stringify values, inspect byte-string copies, and tokenize source text.
#[derive(Parser, Debug)]
#[command(name = "jo", version, about)]
pub struct AppConfig {
    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print a signed 64-bit integer in minimal decimal form.
    Int {
        /// Value to render.
        #[arg(allow_hyphen_values = true)]
        value: i64,
    },

    /// Print a float in shortest round-trip form.
    Float {
        /// Value to render (accepts `inf`, `-inf`, `NaN`).
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },

    /// Print `true` or `false`.
    Bool {
        /// Value to render.
        #[arg(action = ArgAction::Set)]
        value: bool,
    },

    /// Copy TEXT into an owned string and describe the copy.
    Copy {
        /// Bytes to copy.
        text: String,

        /// Treat the source as NUL-terminated.
        #[arg(long)]
        nul: bool,
    },

    /// Split TEXT into tokens, one per line as `line:col<TAB>kind<TAB>text`.
    Tokenize {
        /// Source text to split.
        text: String,
    },

    /// Generate a shell completion script.
    Completion {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
