use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use log::debug;
use serde::Serialize;

const BOM_CONFIDENCE: f64 = 1.0;
const ASCII_CONFIDENCE: f64 = 1.0;
const UTF16_PATTERN_CONFIDENCE: f64 = 0.7;
const UTF8_BASE_CONFIDENCE: f64 = 0.75;
const UTF8_MAX_CONFIDENCE: f64 = 0.95;
const LEGACY_BASE_CONFIDENCE: f64 = 0.5;
const LEGACY_MAX_CONFIDENCE: f64 = 0.8;
// Non-ASCII volume at which the derived confidence saturates
const SATURATION_BYTES: usize = 64;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection {
    pub encoding: Option<&'static str>,
    pub confidence: f64,
}

impl Detection {
    fn none() -> Self {
        Detection {
            encoding: None,
            confidence: 0.0,
        }
    }

    fn guessed(encoding: &'static str, confidence: f64) -> Self {
        Detection {
            encoding: Some(encoding),
            confidence,
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        self.encoding.is_none() || self.confidence < 0.5
    }
}

#[derive(Debug, Default)]
struct ByteStats {
    non_ascii: usize,
    nul: usize,
    even_nul: usize,
    odd_nul: usize,
    esc: bool,
}

impl ByteStats {
    fn scan(bytes: &[u8]) -> Self {
        let mut stats = ByteStats::default();
        for (i, &b) in bytes.iter().enumerate() {
            if b >= 0x80 {
                stats.non_ascii += 1;
            } else if b == 0x00 {
                stats.nul += 1;
                if i % 2 == 0 {
                    stats.even_nul += 1;
                } else {
                    stats.odd_nul += 1;
                }
            } else if b == 0x1b {
                stats.esc = true;
            }
        }
        stats
    }
}

pub fn detect(bytes: &[u8]) -> Detection {
    if bytes.is_empty() {
        return Detection::none();
    }

    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        debug!("byte order mark ({} bytes) for {}", bom_len, encoding.name());
        return Detection::guessed(canonical_label(encoding), BOM_CONFIDENCE);
    }

    let stats = ByteStats::scan(bytes);

    // A buffer of nothing but NULs carries no statistical signal
    if stats.nul == bytes.len() {
        return Detection::none();
    }

    if stats.non_ascii == 0 && stats.nul == 0 && !stats.esc {
        return Detection::guessed("ascii", ASCII_CONFIDENCE);
    }

    if let Some(detection) = detect_unmarked_utf16(bytes, &stats) {
        return detection;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    let label = canonical_label(encoding);
    let confidence = if encoding == encoding_rs::UTF_8 {
        scaled_confidence(UTF8_BASE_CONFIDENCE, UTF8_MAX_CONFIDENCE, stats.non_ascii)
    } else {
        scaled_confidence(LEGACY_BASE_CONFIDENCE, LEGACY_MAX_CONFIDENCE, stats.non_ascii)
    };
    debug!(
        "statistical guess {} ({} of {} bytes non-ASCII)",
        label,
        stats.non_ascii,
        bytes.len()
    );
    Detection::guessed(label, confidence)
}

// BOM-less UTF-16 text in the Latin range shows up as every other byte NUL.
// The statistical detector has no UTF-16 model, so catch the pattern first.
fn detect_unmarked_utf16(bytes: &[u8], stats: &ByteStats) -> Option<Detection> {
    if bytes.len() < 8 || bytes.len() % 2 != 0 {
        return None;
    }
    let odd_total = bytes.len() / 2;
    let even_total = bytes.len() - odd_total;

    let le = stats.odd_nul * 10 >= odd_total * 9 && stats.even_nul * 10 <= even_total;
    let be = stats.even_nul * 10 >= even_total * 9 && stats.odd_nul * 10 <= odd_total;

    if le {
        Some(Detection::guessed("utf-16le", UTF16_PATTERN_CONFIDENCE))
    } else if be {
        Some(Detection::guessed("utf-16be", UTF16_PATTERN_CONFIDENCE))
    } else {
        None
    }
}

fn scaled_confidence(base: f64, max: f64, non_ascii: usize) -> f64 {
    let volume = (non_ascii as f64 / SATURATION_BYTES as f64).min(1.0);
    base + (max - base) * volume
}

// chardetng and for_bom hand back registry canonical names like Shift_JIS;
// the candidate tables spell labels lowercase with hyphens.
fn canonical_label(encoding: &'static Encoding) -> &'static str {
    match encoding.name() {
        "UTF-8" => "utf-8",
        "UTF-16LE" => "utf-16le",
        "UTF-16BE" => "utf-16be",
        "Shift_JIS" => "shift-jis",
        "EUC-JP" => "euc-jp",
        "ISO-2022-JP" => "iso-2022-jp",
        "Big5" => "big5",
        "GBK" => "gbk",
        "EUC-KR" => "euc-kr",
        "KOI8-R" => "koi8-r",
        "KOI8-U" => "koi8-u",
        "IBM866" => "ibm866",
        "ISO-8859-2" => "iso-8859-2",
        "ISO-8859-4" => "iso-8859-4",
        "ISO-8859-5" => "iso-8859-5",
        "ISO-8859-6" => "iso-8859-6",
        "ISO-8859-7" => "iso-8859-7",
        "ISO-8859-8" => "iso-8859-8",
        "ISO-8859-8-I" => "iso-8859-8-i",
        "ISO-8859-13" => "iso-8859-13",
        // windows-125x, windows-874 and gb18030 are already lowercase
        name => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect_encoded(text: &str, encoding: &'static Encoding) -> Detection {
        let (bytes, _, _) = encoding.encode(text);
        detect(&bytes)
    }

    #[test]
    fn test_empty_input() {
        let detection = detect(b"");
        assert_eq!(detection.encoding, None);
        assert_eq!(detection.confidence, 0.0);
        assert!(detection.is_ambiguous());
    }

    #[test]
    fn test_all_zero_bytes() {
        let detection = detect(&[0u8; 32]);
        assert_eq!(detection.encoding, None);
        assert_eq!(detection.confidence, 0.0);
    }

    #[test]
    fn test_pure_ascii() {
        let detection = detect(b"The quick brown fox jumps over the lazy dog");
        assert_eq!(detection.encoding, Some("ascii"));
        assert_eq!(detection.confidence, 1.0);
        assert!(!detection.is_ambiguous());
    }

    #[test]
    fn test_utf8_chinese() {
        let detection = detect("你好".as_bytes());
        assert_eq!(detection.encoding, Some("utf-8"));
        assert!(detection.confidence > 0.5);
    }

    #[test]
    fn test_utf8_bom() {
        let detection = detect(b"\xef\xbb\xbfhello");
        assert_eq!(detection.encoding, Some("utf-8"));
        assert_eq!(detection.confidence, 1.0);
    }

    #[test]
    fn test_utf16le_bom() {
        let detection = detect(&[0xff, 0xfe, 0x41, 0x00]);
        assert_eq!(detection.encoding, Some("utf-16le"));
        assert_eq!(detection.confidence, 1.0);
    }

    #[test]
    fn test_utf16be_bom() {
        let detection = detect(&[0xfe, 0xff, 0x00, 0x41]);
        assert_eq!(detection.encoding, Some("utf-16be"));
        assert_eq!(detection.confidence, 1.0);
    }

    #[test]
    fn test_unmarked_utf16le() {
        let bytes: Vec<u8> = "Stainless steel rat"
            .encode_utf16()
            .flat_map(u16::to_le_bytes)
            .collect();
        let detection = detect(&bytes);
        assert_eq!(detection.encoding, Some("utf-16le"));
        assert!(detection.confidence > 0.5);
    }

    #[test]
    fn test_unmarked_utf16be() {
        let bytes: Vec<u8> = "Stainless steel rat"
            .encode_utf16()
            .flat_map(u16::to_be_bytes)
            .collect();
        let detection = detect(&bytes);
        assert_eq!(detection.encoding, Some("utf-16be"));
    }

    #[test]
    fn test_shift_jis() {
        let detection = detect_encoded("日本語のテキストです。", encoding_rs::SHIFT_JIS);
        assert_eq!(detection.encoding, Some("shift-jis"));
        assert!(detection.confidence >= 0.5);
    }

    #[test]
    fn test_euc_kr() {
        let detection = detect_encoded("한국어 텍스트입니다", encoding_rs::EUC_KR);
        assert_eq!(detection.encoding, Some("euc-kr"));
    }

    #[test]
    fn test_gbk() {
        let detection = detect_encoded("简体中文的测试文本内容", encoding_rs::GBK);
        assert_eq!(detection.encoding, Some("gbk"));
    }

    #[test]
    fn test_big5() {
        let detection = detect_encoded("繁體中文的測試文字內容", encoding_rs::BIG5);
        assert_eq!(detection.encoding, Some("big5"));
    }

    #[test]
    fn test_windows_1251() {
        let detection = detect_encoded("Русский текст", encoding_rs::WINDOWS_1251);
        assert_eq!(detection.encoding, Some("windows-1251"));
        assert!(detection.confidence >= 0.5 && detection.confidence <= 0.8);
    }

    #[test]
    fn test_iso_2022_jp_escape_sequences() {
        let detection = detect_encoded("日本語", encoding_rs::ISO_2022_JP);
        assert_eq!(detection.encoding, Some("iso-2022-jp"));
    }

    #[test]
    fn test_deterministic() {
        let bytes = "Ääni ja kuva".as_bytes();
        assert_eq!(detect(bytes), detect(bytes));
    }

    #[test]
    fn test_utf8_confidence_scales_with_volume() {
        let short = detect("é".as_bytes());
        let long = detect("éèêëàâäçîïôùûüÿœæ éèêëàâäçîïôùûüÿœæ".as_bytes());
        assert_eq!(short.encoding, Some("utf-8"));
        assert_eq!(long.encoding, Some("utf-8"));
        assert!(long.confidence > short.confidence);
        assert!(long.confidence <= 0.95);
    }
}
