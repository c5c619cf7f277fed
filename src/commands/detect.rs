use serde::Serialize;

use enconv::candidates::CandidateList;
use enconv::detect::Detection;
use enconv::error::Result;
use enconv::{build_candidates, detect, Locale};

use crate::io::{read_input, InputSource};

#[derive(Debug, Serialize)]
pub struct DetectReport {
    pub schema_version: u32,
    pub locale: Locale,
    pub detection: Detection,
    pub candidates: CandidateList,
    pub default_index: usize,
}

pub fn run_detect(input: &InputSource, locale: Locale) -> Result<DetectReport> {
    let data = read_input(input)?;
    let detection = detect(&data);
    let candidates = build_candidates(detection.encoding, locale);
    let default_index = candidates.default_index(detection.encoding);

    Ok(DetectReport {
        schema_version: 1,
        locale,
        detection,
        candidates,
        default_index,
    })
}
