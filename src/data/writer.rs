use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use super::model::Dataset;
use super::reader::HEADER_LINES;

// ---------------------------------------------------------------------------
// Fixed-header text
// ---------------------------------------------------------------------------

/// Write `dataset` in the format the reader expects: 30 placeholder header
/// lines, then one `time value color` line per record.
///
/// Floats use the shortest representation that parses back to the same
/// bits, so a write/read cycle is lossless.
pub fn write<W: Write>(mut sink: W, dataset: &Dataset) -> Result<()> {
    for i in 1..=HEADER_LINES {
        writeln!(sink, "# header line {i}")?;
    }
    for record in dataset.records() {
        writeln!(sink, "{record}")?;
    }
    sink.flush()?;
    Ok(())
}

pub fn write_file(path: &Path, dataset: &Dataset) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write(BufWriter::new(file), dataset).with_context(|| format!("writing {}", path.display()))
}

// ---------------------------------------------------------------------------
// CSV export
// ---------------------------------------------------------------------------

/// Export as CSV with a `time,value,color` header row.
pub fn write_csv<W: Write>(sink: W, dataset: &Dataset) -> Result<()> {
    let mut writer = csv::Writer::from_writer(sink);
    writer
        .write_record(["time", "value", "color"])
        .context("writing CSV header")?;
    for (i, record) in dataset.records().enumerate() {
        writer
            .write_record([
                record.time.to_string(),
                record.value.to_string(),
                record.color.to_string(),
            ])
            .with_context(|| format!("writing CSV row {i}"))?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

pub fn write_csv_file(path: &Path, dataset: &Dataset) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_csv(BufWriter::new(file), dataset)
}
