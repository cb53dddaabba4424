//! Interactive conversion session
//!
//! A single session is a linear pipeline: ask for a path, read the file, ask
//! for a mode, transform, write back. Every failure is reported on the console
//! and ends the session; nothing is retried and no failure propagates as a
//! process error. The session is generic over its reader and writer so the
//! console contract can be tested without a terminal.

use crate::converter::Mode;
use anyhow::{Context, Result};
use std::fs;
use std::io::{BufRead, Write};

const PATH_PROMPT: &str = "Enter the path to the text file: ";
const MODE_PROMPT: &str =
    "Choose an option (1 for replace '\\n' with newlines, 2 for replace newlines with '\\n'): ";

/// Answers supplied ahead of the session (CLI arguments or config defaults).
/// A pre-supplied answer skips the corresponding prompt.
#[derive(Debug, Default, Clone)]
pub struct SessionOptions {
    pub file: Option<String>,
    pub mode: Option<Mode>,
}

/// Run one conversion session against the given console.
///
/// The returned `Result` only covers console I/O itself (a broken pipe while
/// prompting); user-facing failures are printed and end the session with
/// `Ok(())`.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    options: &SessionOptions,
) -> Result<()> {
    // AwaitingPath
    let file_path = match &options.file {
        Some(path) => path.clone(),
        None => prompt_line(input, output, PATH_PROMPT)?,
    };

    let text = match fs::read_to_string(&file_path) {
        Ok(text) => text,
        Err(e) => {
            tracing::info!("read failed for {}: {}", file_path, e);
            writeln!(output, "File not found.")?;
            return Ok(());
        }
    };
    tracing::debug!("read {} bytes from {}", text.len(), file_path);

    // AwaitingMode
    let mode = match options.mode {
        Some(mode) => mode,
        None => {
            let selector = prompt_line(input, output, MODE_PROMPT)?;
            match Mode::from_selector(&selector) {
                Some(mode) => mode,
                None => {
                    tracing::info!("invalid mode selector: {:?}", selector);
                    writeln!(output, "Invalid choice.")?;
                    return Ok(());
                }
            }
        }
    };

    // Transforming
    tracing::info!("converting {} with {:?}", file_path, mode);
    let result = mode.apply(&text);

    // Writing. Plain truncating overwrite: a failure mid-write can destroy
    // the original content. Accepted destructive-failure behavior.
    match fs::write(&file_path, &result) {
        Ok(()) => {
            tracing::info!("wrote {} bytes to {}", result.len(), file_path);
            writeln!(output, "Output saved to {}", file_path)?;
        }
        Err(e) => {
            tracing::info!("write failed for {}: {}", file_path, e);
            writeln!(output, "Error occurred while writing to file: {}", e)?;
        }
    }

    Ok(())
}

/// Print a prompt without a trailing newline, flush, and read one answer line.
/// The trailing newline (and any CR) is stripped; interior whitespace is kept.
fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt).context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read input")?;

    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}
