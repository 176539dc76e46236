//! Application entry point and dispatch.

use std::ffi::CString;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::CommandFactory;
use tracing::debug;

use jo_core::{
    stringify_bool, stringify_float, stringify_int, AllocError, JoStr, Tokenizer, BOOL_BUF_LEN,
    FLOAT_BUF_LEN, INT_BUF_LEN,
};

use crate::config::{AppConfig, Command};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    debug!(command = ?config.command, "dispatching");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&config.command, &mut out)
}

/// Execute one command, writing its output to `out`.
pub fn execute(command: &Command, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Int { value } => {
            let mut buf = [0u8; INT_BUF_LEN];
            let n = stringify_int(*value, &mut buf);
            write_line(out, &buf[..n])
        }
        Command::Float { value } => {
            let mut buf = [0u8; FLOAT_BUF_LEN];
            let n = stringify_float(*value, &mut buf);
            write_line(out, &buf[..n])
        }
        Command::Bool { value } => {
            let mut buf = [0u8; BOOL_BUF_LEN];
            let n = stringify_bool(*value, &mut buf);
            write_line(out, &buf[..n])
        }
        Command::Copy { text, nul } => copy_text(text, *nul, out),
        Command::Tokenize { text } => tokenize_text(text, out),
        Command::Completion { shell } => {
            let mut cmd = AppConfig::command();
            clap_complete::generate(*shell, &mut cmd, "jo", out);
            Ok(())
        }
    }
}

fn copy_text(text: &str, nul: bool, out: &mut dyn Write) -> Result<()> {
    let terminated;
    let src = if nul {
        terminated = CString::new(text).context("text contains an interior NUL byte")?;
        JoStr::from_literal(&terminated)
    } else {
        JoStr::from_bytes(text.as_bytes())
    };

    let copy = JoStr::copy_of(&src).map_err(copy_failed)?;
    debug!(len = copy.len(), flags = copy.flags().bits(), "copied string");
    writeln!(
        out,
        "{} (len {}, {:?}, nul-terminated: {})",
        copy.as_bytes().escape_ascii(),
        copy.len(),
        copy.ownership(),
        copy.is_nul_terminated()
    )?;
    copy.release();
    Ok(())
}

fn copy_failed(err: AllocError) -> anyhow::Error {
    let size = err.size();
    anyhow::Error::new(err).context(format!("copying {size} bytes into an owned string"))
}

fn tokenize_text(text: &str, out: &mut dyn Write) -> Result<()> {
    let mut count = 0usize;
    for token in Tokenizer::new(text) {
        writeln!(
            out,
            "{}:{}\t{}\t{}",
            token.line,
            token.col,
            token.kind,
            token.text.escape_default()
        )?;
        count += 1;
    }
    debug!(count, "tokenized");
    Ok(())
}

fn write_line(out: &mut dyn Write, text: &[u8]) -> Result<()> {
    out.write_all(text)?;
    out.write_all(b"\n")?;
    Ok(())
}
