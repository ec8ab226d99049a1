//! JSON summary schema definitions.
//!
//! This module defines the structure of summary files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::aggregator::RaceAggregator;
use crate::parser::{serialize_duration, LapEvent, Pilot};
use crate::utils::config::SUMMARY_SCHEMA_VERSION;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Top-level race summary written to JSON
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RaceSummaryDocument {
    /// Schema version for compatibility checking
    pub version: String,

    /// Lap number that finishes the race
    pub laps_to_finish: u32,

    /// Whether any pilot completed the final lap
    pub finished: bool,

    /// Finishing order
    pub ranking: Vec<RankingRow>,

    /// Fastest lap of the race
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_lap: Option<LapRow>,

    /// Fastest lap per pilot, fastest first
    pub pilot_best_laps: Vec<LapRow>,

    /// Mean speed per pilot, fastest first
    pub average_speeds: Vec<SpeedRow>,

    /// Time behind the winner, smallest first
    pub gaps_to_leader: Vec<GapRow>,

    /// Timestamp when the summary was generated
    pub generated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankingRow {
    pub position: usize,
    pub pilot_id: String,
    pub pilot_name: String,
    pub last_lap: u32,
    pub finished_at: NaiveTime,
    /// `M:SS.mmm`, absent when no proof time could be computed
    pub race_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LapRow {
    pub pilot_id: String,
    pub pilot_name: String,
    pub lap_number: u32,
    pub recorded_at: NaiveTime,
    pub lap_time: String,
    pub avg_speed: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeedRow {
    pub pilot_id: String,
    pub pilot_name: String,
    pub avg_speed: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GapRow {
    pub pilot_id: String,
    pub pilot_name: String,
    pub gap: String,
}

impl From<&LapEvent> for LapRow {
    fn from(lap: &LapEvent) -> Self {
        Self {
            pilot_id: lap.pilot.id.clone(),
            pilot_name: lap.pilot.name.clone(),
            lap_number: lap.lap_number,
            recorded_at: lap.timestamp,
            lap_time: serialize_duration(&lap.lap_duration),
            avg_speed: lap.avg_speed,
        }
    }
}

impl RaceSummaryDocument {
    /// Snapshot a race into the JSON summary layout
    ///
    /// Sections use the same ordering as the text report.
    pub fn from_race(race: &RaceAggregator) -> Self {
        use chrono::Utc;

        let pilots = race.pilots();

        let ranking = race
            .ranking()
            .iter()
            .map(|r| RankingRow {
                position: r.position,
                pilot_id: r.pilot.id.clone(),
                pilot_name: r.pilot.name.clone(),
                last_lap: r.last_lap,
                finished_at: r.finish_timestamp,
                race_time: r.race_time.as_ref().map(serialize_duration),
            })
            .collect();

        let mut best_laps: Vec<&LapEvent> = pilots
            .iter()
            .filter_map(|p| race.pilot_best_lap(&p.id))
            .collect();
        best_laps.sort_by_key(|lap| lap.lap_duration.num_milliseconds());

        let mut speeds: Vec<(&Pilot, f64)> = pilots
            .iter()
            .filter_map(|p| race.average_speed(&p.id).map(|s| (p, s)))
            .collect();
        speeds.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut gaps: Vec<_> = pilots
            .iter()
            .filter_map(|p| race.gap_to_leader(&p.id).map(|g| (p, g)))
            .collect();
        gaps.sort_by_key(|(_, gap)| gap.num_milliseconds());

        Self {
            version: SUMMARY_SCHEMA_VERSION.to_string(),
            laps_to_finish: race.options().laps_to_finish,
            finished: race.is_finished(),
            ranking,
            best_lap: race.best_lap().map(LapRow::from),
            pilot_best_laps: best_laps.into_iter().map(LapRow::from).collect(),
            average_speeds: speeds
                .into_iter()
                .map(|(p, avg_speed)| SpeedRow {
                    pilot_id: p.id.clone(),
                    pilot_name: p.name.clone(),
                    avg_speed,
                })
                .collect(),
            gaps_to_leader: gaps
                .into_iter()
                .map(|(p, gap)| GapRow {
                    pilot_id: p.id.clone(),
                    pilot_name: p.name.clone(),
                    gap: serialize_duration(&gap),
                })
                .collect(),
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}
