//! Race report rendering.
//!
//! Turns a folded [`RaceState`] into the printable summary: ranking table,
//! overall best lap, best lap per pilot, average speeds and gaps to the
//! leader.

use super::race::RaceState;
use crate::parser::{serialize_duration, serialize_number_fixed, LineParser, Pilot};
use crate::utils::config::ReportLabels;

/// Build the summary lines for a race state
///
/// **Public** - used by `RaceAggregator::report_with`
pub fn build_report(state: &RaceState, parser: &LineParser, labels: &ReportLabels) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(labels.ranking_header.to_string());
    lines.extend(state.ranking.iter().map(|r| parser.serialize_ranking(r)));

    if let Some(best) = &state.best_lap {
        lines.push(labels.best_lap.to_string());
        lines.push(parser.serialize_lap(best));
    }

    lines.push(labels.pilot_best_laps.to_string());
    let mut by_best_lap: Vec<_> = state
        .pilots
        .iter()
        .filter_map(|p| state.pilot_best_laps.get(&p.id))
        .collect();
    by_best_lap.sort_by_key(|lap| lap.lap_duration.num_milliseconds());
    lines.extend(by_best_lap.into_iter().map(|lap| parser.serialize_lap(lap)));

    lines.push(labels.average_speeds.to_string());
    let mut by_speed: Vec<(&Pilot, f64)> = state
        .pilots
        .iter()
        .filter_map(|p| state.average_speeds.get(&p.id).map(|s| (p, *s)))
        .collect();
    by_speed.sort_by(|a, b| b.1.total_cmp(&a.1));
    lines.extend(
        by_speed
            .into_iter()
            .map(|(p, speed)| pilot_line(p, &serialize_number_fixed(speed, 3))),
    );

    lines.push(labels.gaps_to_leader.to_string());
    let mut by_gap: Vec<_> = state
        .pilots
        .iter()
        .filter_map(|p| state.gaps_to_leader.get(&p.id).map(|g| (p, *g)))
        .collect();
    by_gap.sort_by_key(|(_, gap)| gap.num_milliseconds());
    lines.extend(
        by_gap
            .into_iter()
            .map(|(p, gap)| pilot_line(p, &serialize_duration(&gap))),
    );

    lines
}

fn pilot_line(pilot: &Pilot, value: &str) -> String {
    format!("{} - {}: {}", pilot.id, pilot.name, value)
}
