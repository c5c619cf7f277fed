use encoding_rs::{DecoderResult, Encoding, EUC_KR};
use log::debug;
use serde::Serialize;

// Label lookup with a fallback for the Windows Korean spellings, which are
// not WHATWG labels. EUC-KR's decoder covers the full 949 repertoire.
pub fn resolve_label(name: &str) -> Option<&'static Encoding> {
    if let Some(encoding) = Encoding::for_label(name.as_bytes()) {
        return Some(encoding);
    }
    match name.trim().to_ascii_lowercase().as_str() {
        "cp949" | "ms949" | "uhc" => Some(EUC_KR),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DecodeOutcome {
    Decoded { text: String },
    Failed { encoding_tried: String, message: String },
}

impl DecodeOutcome {
    pub fn is_decoded(&self) -> bool {
        matches!(self, DecodeOutcome::Decoded { .. })
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            DecodeOutcome::Decoded { text } => Some(text),
            DecodeOutcome::Failed { .. } => None,
        }
    }

    fn failed(encoding_tried: &str, message: String) -> Self {
        DecodeOutcome::Failed {
            encoding_tried: encoding_tried.to_string(),
            message,
        }
    }
}

pub fn decode(bytes: &[u8], encoding_name: &str) -> DecodeOutcome {
    let Some(encoding) = resolve_label(encoding_name) else {
        return DecodeOutcome::failed(
            encoding_name,
            format!("unknown encoding label '{}'", encoding_name),
        );
    };

    match decode_strict(encoding, bytes) {
        Ok(text) => DecodeOutcome::Decoded { text },
        Err(message) => {
            debug!("{} rejected input: {}", encoding.name(), message);
            DecodeOutcome::failed(encoding_name, message)
        }
    }
}

// Whole-buffer strict decode: no replacement characters, no BOM stripping,
// no partial output. Failure reports the offending bytes and their offset.
fn decode_strict(encoding: &'static Encoding, bytes: &[u8]) -> Result<String, String> {
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let mut text = String::new();
    let mut pos = 0usize;

    loop {
        match decoder.max_utf8_buffer_length_without_replacement(bytes.len() - pos) {
            Some(needed) => text.reserve(needed),
            // Worst case overflowed usize; decode in large slabs instead
            None => text.reserve(1 << 20),
        }
        let (result, read) =
            decoder.decode_to_string_without_replacement(&bytes[pos..], &mut text, true);
        pos += read;
        match result {
            DecoderResult::InputEmpty => return Ok(text),
            DecoderResult::OutputFull => continue,
            DecoderResult::Malformed(bad, extra) => {
                let bad = bad as usize;
                let extra = extra as usize;
                // The malformed sequence sits `extra` bytes before the
                // current position and is `bad` bytes long
                let start = pos - extra - bad;
                let hex = bytes[start..start + bad]
                    .iter()
                    .map(|b| format!("{:02x}", b))
                    .collect::<Vec<_>>()
                    .join(" ");
                return Err(format!("malformed byte sequence [{}] at offset {}", hex, start));
            }
        }
    }
}
