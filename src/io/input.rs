use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use enconv::error::Result;

#[derive(Debug, Clone)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    Literal(Vec<u8>),
}

impl InputSource {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => InputSource::Stdin,
            s if s.starts_with('@') => InputSource::File(PathBuf::from(&s[1..])),
            s => {
                // Warn if input looks like a path
                if Self::looks_like_path(s) {
                    eprintln!("Warning: treating '{}' as literal data. Use @{} to read from file.", s, s);
                }
                InputSource::Literal(s.as_bytes().to_vec())
            }
        }
    }

    fn looks_like_path(s: &str) -> bool {
        // Check for path separators
        if s.contains('/') || s.contains('\\') {
            return true;
        }
        // Check for extensions common on text files people recode
        let extensions = [".txt", ".csv", ".tsv", ".log", ".srt", ".md", ".html", ".xml", ".json"];
        extensions.iter().any(|ext| s.ends_with(ext))
    }
}

pub fn read_input(source: &InputSource) -> Result<Vec<u8>> {
    match source {
        InputSource::Stdin => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
        InputSource::File(path) => {
            let mut file = File::open(path)?;
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)?;
            Ok(buf)
        }
        InputSource::Literal(data) => Ok(data.clone()),
    }
}
