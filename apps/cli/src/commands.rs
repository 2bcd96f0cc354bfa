use anyhow::{Context, Result};
use csc_models::registry::{self, MODELS};
use serde_json::Value;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

/// Prints every registered shape with its wire keys, one per line.
pub fn list_models(out: &mut impl Write) -> Result<()> {
    for descriptor in MODELS {
        if descriptor.fields.is_empty() {
            writeln!(out, "{}: <map of records>", descriptor.name)?;
        } else {
            writeln!(out, "{}: {}", descriptor.name, descriptor.fields.join(", "))?;
        }
    }
    Ok(())
}

/// Reads a payload, runs it through the shape and prints the result.
pub fn decode(model: &str, file: Option<&Path>, pretty: bool, out: &mut impl Write) -> Result<()> {
    let descriptor = registry::find(model)
        .with_context(|| format!("Unknown model '{model}'; run `csc models` to list them"))?;

    let text = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("Failed to read stdin")?;
            buf
        },
    };

    let json: Value = serde_json::from_str(&text)
        .with_context(|| format!("Input is not valid JSON for {}", descriptor.name))?;
    let normalized = descriptor.normalize(&json);
    info!(model = descriptor.name, "Normalized payload");

    if pretty {
        serde_json::to_writer_pretty(&mut *out, &normalized)?;
    } else {
        serde_json::to_writer(&mut *out, &normalized)?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn lists_records_and_maps() {
        let mut out = Vec::new();
        list_models(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.lines().any(|l| l == "ApiFeature: accessible, enabled"));
        assert!(text.lines().any(|l| l == "ApiUpload: href, sha256, uuid"));
        assert!(text.lines().any(|l| l == "ApiFeatureSet: <map of records>"));
    }

    #[test]
    fn decodes_file_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"uuid":"abc-123","extra":true}}"#).unwrap();

        let mut out = Vec::new();
        decode("api-upload", Some(file.path()), false, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"href\":null,\"sha256\":null,\"uuid\":\"abc-123\"}\n"
        );
    }

    #[test]
    fn unknown_model_is_an_error() {
        let err = decode("ApiNothing", None, false, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("Unknown model 'ApiNothing'"));
    }
}
