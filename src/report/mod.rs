use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the coauthor report, one "{name}, {year}" row per line, in map
/// order (lexicographic ascending by formatted name). Overwrites any
/// existing file. Names are written verbatim; embedded commas are not
/// escaped.
pub fn write_coauthors<P: AsRef<Path>>(path: P, coauthors: &BTreeMap<String, i32>) -> Result<()> {
    let file = File::create(path.as_ref())
        .with_context(|| format!("Failed to create {}", path.as_ref().display()))?;
    let mut writer = BufWriter::new(file);

    for (name, year) in coauthors {
        writeln!(writer, "{}, {}", name, year)?;
    }

    writer.flush().context("Failed to flush report")?;
    Ok(())
}

/// Reduced projection of the report: one formatted name per line, no year.
pub fn write_names<P: AsRef<Path>>(path: P, coauthors: &BTreeMap<String, i32>) -> Result<()> {
    let file = File::create(path.as_ref())
        .with_context(|| format!("Failed to create {}", path.as_ref().display()))?;
    let mut writer = BufWriter::new(file);

    for name in coauthors.keys() {
        writeln!(writer, "{}", name)?;
    }

    writer.flush().context("Failed to flush report")?;
    Ok(())
}
