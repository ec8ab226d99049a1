use pretty_assertions::assert_eq;
use race_summary::aggregator::RaceAggregator;
use race_summary::output::{read_summary, write_lines, write_summary, RaceSummaryDocument};
use race_summary::parser::{LineParser, RaceOptions};
use race_summary::utils::config::SUMMARY_SCHEMA_VERSION;
use race_summary::utils::OutputError;

const SAMPLE_LOG: &str = include_str!("../samples/racelogs.txt");

fn sample_document() -> RaceSummaryDocument {
    let mut race = RaceAggregator::new(LineParser::new());
    race.start(RaceOptions::default());
    race.ingest(SAMPLE_LOG).unwrap();
    RaceSummaryDocument::from_race(&race)
}

#[test]
fn test_document_mirrors_report_sections() {
    let doc = sample_document();

    assert_eq!(doc.version, SUMMARY_SCHEMA_VERSION);
    assert_eq!(doc.laps_to_finish, 4);
    assert!(doc.finished);

    assert_eq!(doc.ranking.len(), 5);
    assert_eq!(doc.ranking[0].pilot_id, "038");
    assert_eq!(doc.ranking[0].race_time.as_deref(), Some("4:11.578"));

    let best = doc.best_lap.as_ref().unwrap();
    assert_eq!(best.lap_time, "1:02.769");

    let best_lap_order: Vec<_> = doc.pilot_best_laps.iter().map(|l| l.pilot_id.as_str()).collect();
    assert_eq!(best_lap_order, vec!["038", "002", "033", "023", "011", "015"]);

    assert_eq!(doc.average_speeds[0].pilot_id, "038");
    assert_eq!(doc.average_speeds.last().unwrap().pilot_id, "011");

    let gaps: Vec<_> = doc.gaps_to_leader.iter().map(|g| g.gap.as_str()).collect();
    assert_eq!(gaps, vec!["0:02.091", "0:07.208", "0:07.674", "0:51.829", "2:42.845"]);
}

#[test]
fn test_write_and_read_summary() {
    let doc = sample_document();
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("out/summary.json");

    write_summary(&doc, &path).unwrap();
    let loaded = read_summary(&path).unwrap();

    assert_eq!(loaded, doc);
}

#[test]
fn test_read_summary_rejects_garbage() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        read_summary(&path),
        Err(OutputError::SerializationFailed(_))
    ));
}

#[test]
fn test_write_lines_to_directory_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    let result = write_lines(&["line".to_string()], temp_dir.path());

    assert!(matches!(result, Err(OutputError::InvalidPath(_))));
}
