use serde::Serialize;

use enconv::error::{EnconvError, Result};
use enconv::Locale;

use super::convert::run_convert;
use crate::io::InputSource;

#[derive(Debug, Serialize)]
pub struct PreviewReport {
    pub schema_version: u32,
    pub encoding_used: String,
    pub lines: Vec<String>,
    pub truncated: bool,
}

pub fn run_preview(
    input: &InputSource,
    encoding: Option<&str>,
    locale: Locale,
    lines: usize,
) -> Result<PreviewReport> {
    if lines == 0 {
        return Err(EnconvError::invalid_input("line count must be at least 1"));
    }

    let conversion = run_convert(input, encoding, locale)?;
    let total = conversion.text.lines().count();
    let shown: Vec<String> = conversion
        .text
        .lines()
        .take(lines)
        .map(str::to_string)
        .collect();

    Ok(PreviewReport {
        schema_version: 1,
        encoding_used: conversion.encoding_used,
        truncated: total > shown.len(),
        lines: shown,
    })
}
