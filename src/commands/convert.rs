use base64::prelude::*;
use log::debug;
use serde::Serialize;

use enconv::detect::Detection;
use enconv::error::{EnconvError, Result};
use enconv::{build_candidates, decode, detect, DecodeOutcome, Locale};

use crate::io::{read_input, InputSource};

#[derive(Debug, Serialize)]
pub struct Conversion {
    pub schema_version: u32,
    pub encoding_used: String,
    pub detection: Detection,
    pub text: String,
}

pub fn run_convert(
    input: &InputSource,
    encoding: Option<&str>,
    locale: Locale,
) -> Result<Conversion> {
    let data = read_input(input)?;
    let detection = detect(&data);

    let encoding_used = match encoding {
        Some(name) => name.to_string(),
        None => {
            let candidates = build_candidates(detection.encoding, locale);
            candidates.default_label(detection.encoding).to_string()
        }
    };
    debug!(
        "decoding {} bytes as {} (detected {:?})",
        data.len(),
        encoding_used,
        detection.encoding
    );

    match decode(&data, &encoding_used) {
        DecodeOutcome::Decoded { text } => Ok(Conversion {
            schema_version: 1,
            encoding_used,
            detection,
            text,
        }),
        DecodeOutcome::Failed {
            encoding_tried,
            message,
        } => Err(EnconvError::decode(encoding_tried, message)),
    }
}

pub fn to_data_uri(text: &str) -> String {
    format!(
        "data:text/plain;charset=utf-8;base64,{}",
        BASE64_STANDARD.encode(text.as_bytes())
    )
}
