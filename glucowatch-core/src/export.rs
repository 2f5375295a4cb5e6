//! Flat CSV export of the sliding window.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use glucowatch_types::Reading;

use crate::error::{MonitorError, Result};

/// Header row of the exported file.
pub const CSV_HEADER: &str = "Time,Blood Sugar Level (mg/dL)";

/// Default export file name.
pub const DEFAULT_EXPORT_FILE: &str = "blood_sugar_data.csv";

/// Write readings as CSV, one row per reading in the given order.
///
/// Values always carry a decimal point, so `142` is written as `142.0`.
pub fn write_csv<W: Write>(readings: &[Reading], mut writer: W) -> io::Result<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for reading in readings {
        writeln!(writer, "{},{:?}", reading.time_label(), reading.value)?;
    }
    writer.flush()
}

/// Write readings to `path`, replacing any existing file.
pub fn export_csv(path: &Path, readings: &[Reading]) -> Result<()> {
    let to_export_failure = |source: io::Error| MonitorError::ExportFailure {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_export_failure)?;
    write_csv(readings, BufWriter::new(file)).map_err(to_export_failure)
}
