//! JSON summary output writer.
//!
//! Writes RaceSummaryDocument structs to JSON files with proper formatting.

use super::document::RaceSummaryDocument;
use super::text::prepare_output_path;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a race summary to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_summary(
    summary: &RaceSummaryDocument,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing JSON summary to: {}", output_path.display());

    prepare_output_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, summary).map_err(OutputError::SerializationFailed)?;

    info!(
        "JSON summary written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Serialize a race summary to a pretty JSON string
pub fn summary_to_string(summary: &RaceSummaryDocument) -> Result<String, OutputError> {
    serde_json::to_string_pretty(summary).map_err(OutputError::SerializationFailed)
}

/// Read a race summary from a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_summary(input_path: impl AsRef<Path>) -> Result<RaceSummaryDocument, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading summary from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let summary: RaceSummaryDocument =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Summary loaded: version {}, {} ranked pilots",
        summary.version,
        summary.ranking.len()
    );

    Ok(summary)
}

fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::RaceAggregator;
    use crate::parser::{LineParser, RaceOptions};
    use tempfile::NamedTempFile;

    fn create_test_summary() -> RaceSummaryDocument {
        let mut race = RaceAggregator::new(LineParser::new());
        race.start(RaceOptions::with_laps(1));
        race.ingest(
            "23:49:08.277\t038 – F.MASSA\t1\t1:02.852\t44,275\n\
             23:49:10.858\t033 – R.BARRICHELLO\t1\t1:04.352\t43,243\n",
        )
        .unwrap();
        RaceSummaryDocument::from_race(&race)
    }

    #[test]
    fn test_write_and_read_summary() {
        let summary = create_test_summary();
        let temp_file = NamedTempFile::new().unwrap();

        write_summary(&summary, temp_file.path()).unwrap();
        let loaded = read_summary(temp_file.path()).unwrap();

        assert_eq!(loaded, summary);
    }

    #[test]
    fn test_summary_to_string_uses_canonical_times() {
        let json = summary_to_string(&create_test_summary()).unwrap();

        assert!(json.contains("\"race_time\": \"1:02.852\""));
        assert!(json.contains("\"finished_at\": \"23:49:08.277\""));
        assert!(json.contains("\"gap\": \"0:02.581\""));
    }

    #[test]
    fn test_averaged_speeds_survive_round_trip() {
        let mut race = RaceAggregator::new(LineParser::new());
        race.start(RaceOptions::default());
        race.ingest(
            "23:52:01.796\t011 – S.VETTEL\t1\t3:31.315\t13,169\n\
             23:53:39.660\t011 – S.VETTEL\t2\t1:37.864\t17,274\n\
             23:54:57.757\t011 – S.VETTEL\t3\t1:18.097\t34,982\n",
        )
        .unwrap();
        let summary = RaceSummaryDocument::from_race(&race);
        let temp_file = NamedTempFile::new().unwrap();

        write_summary(&summary, temp_file.path()).unwrap();
        let loaded = read_summary(temp_file.path()).unwrap();

        assert_eq!(loaded.average_speeds[0].avg_speed, race.average_speed("011").unwrap());
    }
}
