use race_summary::parser::{
    parse_duration, parse_number, parse_time, serialize_duration, serialize_number,
    serialize_time, LineParser, Pilot, RankingEntry,
};
use race_summary::utils::ParseError;

const SAMPLE_LOG: &str = include_str!("../samples/racelogs.txt");

#[test]
fn test_parse_individual_data_types() {
    let time = parse_time("23:49:08.277").unwrap();
    let duration = parse_duration("1:02.999").unwrap();
    let speed = parse_number("44,275").unwrap();

    assert_eq!(duration.num_minutes(), 1);
    assert_eq!(duration.num_seconds() % 60, 2);
    assert_eq!(duration.num_milliseconds() % 1000, 999);
    assert_eq!(speed, 44.275);

    assert_eq!(serialize_time(&time), "23:49:08.277");
    assert_eq!(serialize_duration(&duration), "1:02.999");
    assert_eq!(serialize_number(speed), "44,275");
}

#[test]
fn test_header_line_is_discarded() {
    let header = SAMPLE_LOG.lines().next().unwrap();
    assert!(LineParser::new().parse(header).unwrap().is_empty());
}

#[test]
fn test_every_sample_line_parses() {
    let parser = LineParser::new();

    for line in SAMPLE_LOG.lines().skip(1).filter(|l| !l.is_empty()) {
        assert_eq!(parser.parse(line).unwrap().len(), 1, "line: {}", line);
    }
}

#[test]
fn test_whole_log_parses_in_text_order() {
    let events = LineParser::new().parse(SAMPLE_LOG).unwrap();

    assert_eq!(events.len(), 23);
    // Webber's fourth lap is logged before Raikkonen's despite finishing later
    assert_eq!(events[18].pilot.id, "023");
    assert_eq!(events[19].pilot.id, "002");
}

#[test]
fn test_parse_single_log() {
    let events = LineParser::new()
        .parse("23:49:08.277  038 – F.MASSA  1  1:02.852  44,275")
        .unwrap();

    let event = &events[0];
    assert_eq!(event.pilot.id, "038");
    assert_eq!(event.pilot.name, "F.MASSA");
    assert_eq!(event.lap_number, 1);
    assert_eq!(event.lap_duration.num_milliseconds(), 62_852);
}

#[test]
fn test_serialize_single_log_round_trip() {
    let original = "23:49:08.277\t038 – F.MASSA\t1\t1:02.852\t44,275";
    let parser = LineParser::new();

    let events = parser.parse(original).unwrap();

    assert_eq!(parser.serialize_lap(&events[0]), original);
}

#[test]
fn test_pilot_code_is_padded() {
    let events = LineParser::new()
        .parse("23:49:08.277\t38 – F.MASSA\t1\t1:02.852\t44,275")
        .unwrap();

    assert_eq!(events[0].pilot.id, "038");
}

#[test]
fn test_serialize_single_ranking() {
    let entry = RankingEntry {
        position: 1,
        pilot: Pilot::new("022", "pilot name"),
        last_lap: 1,
        finish_timestamp: parse_time("23:49:12.667").unwrap(),
        race_time: Some(parse_duration("1:50.55").unwrap()),
    };

    assert_eq!(
        LineParser::new().serialize_ranking(&entry),
        "1\t022 – pilot name\t1\t1:50.550"
    );
}

#[test]
fn test_conversion_failure_is_reported() {
    let result = LineParser::new().parse("23:49:08.277\t038 – F.MASSA\t1\t1:02.852\t44,2,75");

    assert_eq!(result, Err(ParseError::InvalidNumber("44,2,75".to_string())));
}
