mod candidates;
mod convert;
mod detect;
mod info;
mod preview;

pub use candidates::{run_candidates, CandidatesReport};
pub use convert::{run_convert, to_data_uri, Conversion};
pub use detect::{run_detect, DetectReport};
pub use info::{run_info, EncodingInfo};
pub use preview::{run_preview, PreviewReport};

use crate::io::{write_text, InputSource, OutputConfig, OutputDest};
use enconv::error::Result;
use enconv::Locale;

pub trait CommandHandler {
    fn execute(&self) -> Result<()>;
}

pub struct DetectCommand {
    pub input: InputSource,
    pub locale: Locale,
    pub json: bool,
}

impl CommandHandler for DetectCommand {
    fn execute(&self) -> Result<()> {
        let report = run_detect(&self.input, self.locale)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report).unwrap());
            return Ok(());
        }

        match report.detection.encoding {
            Some(encoding) => println!(
                "Detected encoding: {} (confidence: {:.2}%)",
                encoding,
                report.detection.confidence * 100.0
            ),
            None => println!("Detected encoding: unknown (confidence: 0.00%)"),
        }
        if report.detection.is_ambiguous() {
            println!("Detection is ambiguous; pick from the candidates below.");
        }
        println!();
        println!("{:<6} ENCODING", "RANK");
        println!("{}", "-".repeat(40));
        for (rank, name) in report.candidates.iter().enumerate() {
            let marker = if rank == report.default_index { "  (default)" } else { "" };
            println!("{:<6} {}{}", rank, name, marker);
        }
        Ok(())
    }
}

pub struct CandidatesCommand {
    pub locale: Locale,
    pub detected: Option<String>,
    pub input: Option<InputSource>,
    pub json: bool,
}

impl CommandHandler for CandidatesCommand {
    fn execute(&self) -> Result<()> {
        let report = run_candidates(self.locale, self.detected.as_deref(), self.input.as_ref())?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report).unwrap());
            return Ok(());
        }

        for (rank, name) in report.candidates.iter().enumerate() {
            let marker = if rank == report.default_index { "  (default)" } else { "" };
            println!("{}{}", name, marker);
        }
        Ok(())
    }
}

pub struct ConvertCommand {
    pub input: InputSource,
    pub output: OutputDest,
    pub encoding: Option<String>,
    pub locale: Locale,
    pub data_uri: bool,
    pub force: bool,
}

impl CommandHandler for ConvertCommand {
    fn execute(&self) -> Result<()> {
        let conversion = run_convert(&self.input, self.encoding.as_deref(), self.locale)?;

        if self.data_uri {
            let uri = to_data_uri(&conversion.text);
            let config = OutputConfig {
                dest: self.output.clone(),
                force: true,
            };
            write_text(&uri, &config)?;
            if matches!(self.output, OutputDest::Stdout) {
                println!();
            }
            return Ok(());
        }

        let config = OutputConfig {
            dest: self.output.clone(),
            force: self.force,
        };
        write_text(&conversion.text, &config)?;
        Ok(())
    }
}

pub struct PreviewCommand {
    pub input: InputSource,
    pub encoding: Option<String>,
    pub locale: Locale,
    pub lines: usize,
}

impl CommandHandler for PreviewCommand {
    fn execute(&self) -> Result<()> {
        let report = run_preview(&self.input, self.encoding.as_deref(), self.locale, self.lines)?;

        println!("Preview (first {} lines):", self.lines);
        for line in &report.lines {
            println!("{}", line);
        }
        if report.truncated {
            println!("...");
        }
        Ok(())
    }
}

pub struct InfoCommand {
    pub name: String,
    pub json: bool,
}

impl CommandHandler for InfoCommand {
    fn execute(&self) -> Result<()> {
        let info = run_info(&self.name)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&info).unwrap());
            return Ok(());
        }

        println!("Label:            {}", info.label);
        println!("Canonical name:   {}", info.name);
        println!("Output encoding:  {}", info.output_encoding);
        println!("ASCII compatible: {}", info.ascii_compatible);
        println!("Single byte:      {}", info.single_byte);
        if info.replacement {
            println!("Note:             label maps to the replacement encoding; decoding always fails");
        }
        Ok(())
    }
}
