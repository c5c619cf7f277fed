use serde::Serialize;

use enconv::decode::resolve_label;
use enconv::error::{EnconvError, Result};

#[derive(Debug, Serialize)]
pub struct EncodingInfo {
    pub label: String,
    pub name: &'static str,
    pub output_encoding: &'static str,
    pub ascii_compatible: bool,
    pub single_byte: bool,
    pub replacement: bool,
}

pub fn run_info(label: &str) -> Result<EncodingInfo> {
    let Some(encoding) = resolve_label(label) else {
        return Err(EnconvError::unsupported_encoding(label));
    };

    Ok(EncodingInfo {
        label: label.to_string(),
        name: encoding.name(),
        output_encoding: encoding.output_encoding().name(),
        ascii_compatible: encoding.is_ascii_compatible(),
        single_byte: encoding.is_single_byte(),
        replacement: encoding == encoding_rs::REPLACEMENT,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_utf8() {
        let info = run_info("utf-8").unwrap();
        assert_eq!(info.name, "UTF-8");
        assert!(info.ascii_compatible);
        assert!(!info.single_byte);
        assert!(!info.replacement);
    }

    #[test]
    fn test_info_resolves_aliases() {
        assert_eq!(run_info("latin1").unwrap().name, "windows-1252");
        assert_eq!(run_info("cp949").unwrap().name, "EUC-KR");
        assert_eq!(run_info("sjis").unwrap().name, "Shift_JIS");
    }

    #[test]
    fn test_info_iso_2022_kr_is_replacement() {
        let info = run_info("iso-2022-kr").unwrap();
        assert_eq!(info.name, "replacement");
        assert!(info.replacement);
    }

    #[test]
    fn test_info_unknown_label() {
        let err = run_info("martian-9").unwrap_err();
        assert!(matches!(err, EnconvError::UnsupportedEncoding { .. }));
    }
}
