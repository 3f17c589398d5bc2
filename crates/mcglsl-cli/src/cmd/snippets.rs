//! Uniform snippet command
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use mcglsl_core::uniforms::{self, UniformRecord};

/// Print a snippet block for each distinct uniform in `input`.
pub fn snippets(input: &Path, json: bool) -> Result<()> {
    let records = uniforms::format_uniforms(input)?;
    let mut stdout = io::stdout().lock();

    if json {
        let records = records.collect::<Result<Vec<_>, _>>()?;
        write_json(&mut stdout, &records)?;
    } else {
        for record in records {
            writeln!(stdout, "{}", record?)?;
        }
    }

    stdout.flush().context("Failed to flush output")
}

fn write_json(out: &mut impl Write, records: &[UniformRecord]) -> Result<()> {
    let snippets: Vec<_> = records.iter().map(UniformRecord::to_snippet).collect();
    serde_json::to_writer_pretty(&mut *out, &snippets).context("Failed to encode snippets")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_json_uses_snippet_detail() {
        let records: Vec<_> = uniforms::parse_source("uniform <vec2> resolution; 2\nuniform <float> time;")
            .collect::<Result<_, _>>()
            .unwrap();

        let mut buf = Vec::new();
        write_json(&mut buf, &records).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["label"], "resolution");
        assert_eq!(value[0]["detail"], "<vec2> 2");
        assert_eq!(value[1]["detail"], "<float>");
    }

    #[test]
    fn test_write_json_empty_listing() {
        let mut buf = Vec::new();
        write_json(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[]\n");
    }
}
