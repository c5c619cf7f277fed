use serde::Serialize;

use enconv::candidates::CandidateList;
use enconv::error::Result;
use enconv::{build_candidates, detect, Locale};

use crate::io::{read_input, InputSource};

#[derive(Debug, Serialize)]
pub struct CandidatesReport {
    pub schema_version: u32,
    pub locale: Locale,
    pub detected: Option<String>,
    pub candidates: CandidateList,
    pub default_index: usize,
}

pub fn run_candidates(
    locale: Locale,
    detected: Option<&str>,
    input: Option<&InputSource>,
) -> Result<CandidatesReport> {
    // --in takes precedence over --detected
    let detected: Option<String> = match input {
        Some(source) => {
            let data = read_input(source)?;
            detect(&data).encoding.map(str::to_string)
        }
        None => detected.map(str::to_string),
    };

    let candidates = build_candidates(detected.as_deref(), locale);
    let default_index = candidates.default_index(detected.as_deref());

    Ok(CandidatesReport {
        schema_version: 1,
        locale,
        detected,
        candidates,
        default_index,
    })
}
