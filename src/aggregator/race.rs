//! Race state and the fold that turns lap events into standings.
//!
//! Every batch is time-sorted and then applied one event at a time:
//! pilot registration, ranking, overall best lap and per-pilot best lap.
//! Average speeds are recomputed from the full lap history afterwards.

use super::report::build_report;
use crate::parser::{elapsed, serialize_duration, serialize_time, LapEvent, LineParser};
use crate::parser::{Pilot, RaceOptions, RankingEntry};
use crate::utils::config::ReportLabels;
use crate::utils::error::ParseError;
use chrono::Duration;
use log::{debug, warn};
use std::collections::HashMap;

/// Mutable race model, keyed by padded pilot id
#[derive(Debug, Clone, Default)]
pub struct RaceState {
    /// Pilots in first-seen order
    pub pilots: Vec<Pilot>,

    /// Accumulated lap time per pilot
    pub race_times: HashMap<String, Duration>,

    /// Laps per pilot in fold order
    pub lap_history: HashMap<String, Vec<LapEvent>>,

    /// Fastest lap per pilot
    pub pilot_best_laps: HashMap<String, LapEvent>,

    /// Mean average speed per pilot
    pub average_speeds: HashMap<String, f64>,

    /// Fastest lap overall
    pub best_lap: Option<LapEvent>,

    /// Finishing order, append-only
    pub ranking: Vec<RankingEntry>,

    /// Time after the leader's finish, for laps recorded once the race ended
    pub gaps_to_leader: HashMap<String, Duration>,

    /// Every folded event in fold order
    pub events: Vec<LapEvent>,

    pub finished: bool,
}

impl RaceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one lap event to the state
    pub fn apply(&mut self, event: &LapEvent, options: &RaceOptions) {
        self.register_lap(event);
        self.update_ranking(event, options);
        self.update_best_lap(event);
        self.update_pilot_best_lap(event);
        self.events.push(event.clone());
    }

    /// Register a pilot on first sight, then accumulate race time and history
    pub fn register_lap(&mut self, event: &LapEvent) {
        let id = &event.pilot.id;

        if let Some(total) = self.race_times.get_mut(id) {
            *total = *total + event.lap_duration;
        } else {
            self.pilots.push(event.pilot.clone());
            self.race_times.insert(id.clone(), event.lap_duration);
        }

        self.lap_history
            .entry(id.clone())
            .or_default()
            .push(event.clone());
    }

    /// Record latecomer gaps and append finishing entries
    pub fn update_ranking(&mut self, event: &LapEvent, options: &RaceOptions) {
        if self.finished {
            if let Some(leader) = self.ranking.first() {
                let gap = elapsed(&leader.finish_timestamp, &event.timestamp);
                debug!(
                    "Latecomer {} at {}: {}",
                    event.pilot.name,
                    serialize_time(&event.timestamp),
                    serialize_duration(&gap)
                );
                self.gaps_to_leader.insert(event.pilot.id.clone(), gap);
            }
        }

        if event.lap_number >= options.laps_to_finish {
            self.finished = true;

            if self.ranking.is_empty() {
                debug!(
                    "First place {} at {}",
                    event.pilot.name,
                    serialize_time(&event.timestamp)
                );
            }

            self.ranking.push(RankingEntry {
                position: self.ranking.len() + 1,
                pilot: event.pilot.clone(),
                last_lap: event.lap_number,
                finish_timestamp: event.timestamp,
                race_time: self.race_times.get(&event.pilot.id).copied(),
            });
        }
    }

    /// Replace the overall best lap only with a strictly faster one
    pub fn update_best_lap(&mut self, event: &LapEvent) {
        if is_faster(event, self.best_lap.as_ref()) {
            self.best_lap = Some(event.clone());
        }
    }

    /// Replace the pilot's best lap only with a strictly faster one
    pub fn update_pilot_best_lap(&mut self, event: &LapEvent) {
        if is_faster(event, self.pilot_best_laps.get(&event.pilot.id)) {
            self.pilot_best_laps
                .insert(event.pilot.id.clone(), event.clone());
        }
    }

    /// Recompute every pilot's mean speed from the complete lap history
    pub fn recompute_average_speeds(&mut self) {
        self.average_speeds.clear();

        for pilot in &self.pilots {
            let laps = self.lap_history.get(&pilot.id).map(Vec::as_slice).unwrap_or(&[]);
            match mean_speed(laps) {
                Some(speed) => {
                    self.average_speeds.insert(pilot.id.clone(), speed);
                }
                None => warn!("Pilot {} has no laps, skipping average speed", pilot.id),
            }
        }
    }
}

fn is_faster(event: &LapEvent, current: Option<&LapEvent>) -> bool {
    match current {
        Some(best) => event.lap_duration.num_milliseconds() < best.lap_duration.num_milliseconds(),
        None => true,
    }
}

fn mean_speed(laps: &[LapEvent]) -> Option<f64> {
    if laps.is_empty() {
        return None;
    }
    let total: f64 = laps.iter().map(|l| l.avg_speed).sum();
    Some(total / laps.len() as f64)
}

/// Folds timing logs into a race and answers report queries
#[derive(Debug, Clone, Default)]
pub struct RaceAggregator {
    parser: LineParser,
    options: RaceOptions,
    state: RaceState,
}

impl RaceAggregator {
    pub fn new(parser: LineParser) -> Self {
        Self {
            parser,
            options: RaceOptions::default(),
            state: RaceState::new(),
        }
    }

    /// Discard all state and begin a new race
    pub fn start(&mut self, options: RaceOptions) {
        debug!("Starting race to {} laps", options.laps_to_finish);
        self.options = options;
        self.state = RaceState::new();
    }

    /// Parse a raw log and fold its events into the race.
    ///
    /// May be called repeatedly; state accumulates across calls. The batch
    /// is fully parsed before anything is applied, so a conversion error
    /// leaves the race untouched.
    ///
    /// # Errors
    /// Any [`ParseError`] raised while converting a matched line
    pub fn ingest(&mut self, raw: &str) -> Result<usize, ParseError> {
        let mut events = self.parser.parse(raw)?;

        if events.is_empty() {
            warn!("No lap events found in log input");
        }

        // Stable: equal timestamps keep text order
        events.sort_by_key(|e| e.timestamp);

        for event in &events {
            self.state.apply(event, &self.options);
        }

        self.state.recompute_average_speeds();

        Ok(events.len())
    }

    /// Summary lines with English section headers
    pub fn report(&self) -> Vec<String> {
        self.report_with(&ReportLabels::default())
    }

    /// Summary lines with the given section headers
    pub fn report_with(&self, labels: &ReportLabels) -> Vec<String> {
        build_report(&self.state, &self.parser, labels)
    }

    /// Every ingested event, in fold order, as canonical lines
    pub fn raw_event_log(&self) -> Vec<String> {
        self.state
            .events
            .iter()
            .map(|e| self.parser.serialize_lap(e))
            .collect()
    }

    pub fn options(&self) -> &RaceOptions {
        &self.options
    }

    pub fn state(&self) -> &RaceState {
        &self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.finished
    }

    pub fn pilots(&self) -> &[Pilot] {
        &self.state.pilots
    }

    pub fn ranking(&self) -> &[RankingEntry] {
        &self.state.ranking
    }

    pub fn best_lap(&self) -> Option<&LapEvent> {
        self.state.best_lap.as_ref()
    }

    pub fn pilot_best_lap(&self, pilot_id: &str) -> Option<&LapEvent> {
        self.state.pilot_best_laps.get(pilot_id)
    }

    pub fn average_speed(&self, pilot_id: &str) -> Option<f64> {
        self.state.average_speeds.get(pilot_id).copied()
    }

    pub fn gap_to_leader(&self, pilot_id: &str) -> Option<Duration> {
        self.state.gaps_to_leader.get(pilot_id).copied()
    }

    pub fn race_time(&self, pilot_id: &str) -> Option<Duration> {
        self.state.race_times.get(pilot_id).copied()
    }

    pub fn laps(&self, pilot_id: &str) -> &[LapEvent] {
        self.state
            .lap_history
            .get(pilot_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
