//! Export helpers for JSON reports and CSV trajectory profiles.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

/// Errors raised while writing export artifacts.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod report {
    use std::io::Write;
    use std::path::Path;

    use serde::Serialize;
    use serde_json::to_writer_pretty;

    use super::{ExportError, writer_for_path};

    /// Pretty-print any serializable report as JSON followed by a newline.
    pub fn write_json<T: Serialize>(writer: &mut dyn Write, report: &T) -> Result<(), ExportError> {
        to_writer_pretty(&mut *writer, report)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a JSON report to `path` (`-` for stdout).
    pub fn write_json_file<T: Serialize>(path: &Path, report: &T) -> Result<(), ExportError> {
        let mut writer = writer_for_path(path)?;
        write_json(writer.as_mut(), report)
    }
}

pub mod profile {
    use std::io::Write;
    use std::path::Path;

    use accel_flight::ProfileSample;
    use serde::Serialize;

    use super::{ExportError, writer_for_path};

    /// Column order of the profile CSV.
    pub const HEADER: [&str; 4] = ["time_s", "distance_m", "velocity_m_s", "mass_kg"];

    /// Flat CSV row; mass is written in scientific notation since it may exceed `f64`.
    #[derive(Debug, Serialize)]
    struct Row {
        time_s: f64,
        distance_m: f64,
        velocity_m_s: f64,
        mass_kg: String,
    }

    impl From<&ProfileSample> for Row {
        fn from(sample: &ProfileSample) -> Self {
            Self {
                time_s: sample.time_s,
                distance_m: sample.distance_m,
                velocity_m_s: sample.velocity_m_s,
                mass_kg: format!("{:.9e}", sample.mass_kg),
            }
        }
    }

    /// Write profile samples as CSV with a header row.
    pub fn write_csv(writer: &mut dyn Write, samples: &[ProfileSample]) -> Result<(), ExportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        if samples.is_empty() {
            csv_writer.write_record(HEADER)?;
        }
        for sample in samples {
            csv_writer.serialize(Row::from(sample))?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Write profile samples to `path` (`-` for stdout).
    pub fn write_csv_file(path: &Path, samples: &[ProfileSample]) -> Result<(), ExportError> {
        let mut writer = writer_for_path(path)?;
        write_csv(writer.as_mut(), samples)
    }
}
