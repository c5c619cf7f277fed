use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use is_terminal::IsTerminal;

use enconv::error::Result;

#[derive(Debug, Clone)]
pub enum OutputDest {
    Stdout,
    File(PathBuf),
}

impl OutputDest {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => OutputDest::Stdout,
            s if s.starts_with('@') => OutputDest::File(PathBuf::from(&s[1..])),
            s => OutputDest::File(PathBuf::from(s)),
        }
    }
}

pub struct OutputConfig {
    pub dest: OutputDest,
    pub force: bool,
}

pub fn write_text(text: &str, config: &OutputConfig) -> Result<()> {
    match &config.dest {
        OutputDest::File(path) => {
            let mut file = File::create(path)?;
            file.write_all(text.as_bytes())?;
            Ok(())
        }
        OutputDest::Stdout => {
            let stdout = io::stdout();
            if stdout.is_terminal() && !config.force && !is_safe_for_terminal(text) {
                print_escaped_preview(text);
            } else {
                let mut handle = stdout.lock();
                handle.write_all(text.as_bytes())?;
            }
            Ok(())
        }
    }
}

// Successfully decoded text can still be the product of the wrong candidate,
// in which case it tends to be full of stray control characters
fn is_safe_for_terminal(text: &str) -> bool {
    !text
        .chars()
        .any(|c| c.is_control() && c != '\n' && c != '\r' && c != '\t')
}

fn print_escaped_preview(text: &str) {
    const MAX_LINES: usize = 16;

    let total_lines = text.lines().count();
    let lines_to_show = total_lines.min(MAX_LINES);

    eprintln!(
        "Output contains control characters ({} chars). Showing escaped preview (use --force to output raw or --out @file):\n",
        text.chars().count()
    );

    for line in text.lines().take(lines_to_show) {
        println!("{}", line.escape_debug());
    }

    if total_lines > MAX_LINES {
        eprintln!("\n... ({} more lines)", total_lines - MAX_LINES);
    }
}
