//! Report types and writers for `envcfg-keys`.

use std::io::Write;

use envcfg::{derive_key, split_words};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::KeysError;

/// Word segmentation of one identifier.
#[derive(Debug, Serialize)]
pub struct SplitReport {
    pub identifier: String,
    pub words: Vec<String>,
}

impl SplitReport {
    pub fn new(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_owned(),
            words: split_words(identifier),
        }
    }
}

/// Environment keys derived for one field path.
#[derive(Debug, Serialize)]
pub struct KeyReport {
    pub path: String,
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_key: Option<String>,
}

impl KeyReport {
    pub fn new(path: &str, prefix: &str) -> Self {
        let unprefixed = derive_key(path);
        Self {
            path: path.to_owned(),
            key: format!("{prefix}{unprefixed}"),
            fallback_key: (!prefix.is_empty()).then_some(unprefixed),
        }
    }
}

pub fn write_splits(
    out: &mut impl Write,
    reports: &[SplitReport],
    format: OutputFormat,
) -> Result<(), KeysError> {
    match format {
        OutputFormat::Json => write_json(out, reports),
        OutputFormat::Text => {
            for report in reports {
                writeln!(out, "{}\t{}", report.identifier, report.words.join(" "))?;
            }
            Ok(())
        }
    }
}

pub fn write_keys(
    out: &mut impl Write,
    reports: &[KeyReport],
    format: OutputFormat,
) -> Result<(), KeysError> {
    match format {
        OutputFormat::Json => write_json(out, reports),
        OutputFormat::Text => {
            for report in reports {
                write!(out, "{}\t{}", report.path, report.key)?;
                if let Some(fallback) = &report.fallback_key {
                    write!(out, "\t{fallback}")?;
                }
                writeln!(out)?;
            }
            Ok(())
        }
    }
}

fn write_json<T: Serialize>(out: &mut impl Write, reports: &[T]) -> Result<(), KeysError> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out)?;
    Ok(())
}
