//! Configuration and constants for the CLI.

/// Laps a pilot must complete before the race is considered finished
pub const DEFAULT_LAPS_TO_FINISH: u32 = 4;

/// Current JSON summary schema version
pub const SUMMARY_SCHEMA_VERSION: &str = "1.0.0";

/// Time-of-day layout used when rendering log timestamps (`HH:mm:ss.SSS`)
pub const TIME_FORMAT: &str = "%H:%M:%S%.3f";

// Parsing accepts any fraction width; rendering always uses three digits.
pub const TIME_PARSE_FORMAT: &str = "%H:%M:%S%.f";

/// Rendered in place of a proof time when none could be computed
pub const NOT_ESTIMATED_TEXT: &str = "time not estimated";

/// Separator between a pilot code and name in canonical lines
pub const PILOT_SEPARATOR: &str = " – ";

/// Language used for report section headers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Language {
    #[default]
    #[value(name = "en")]
    English,
    #[value(name = "pt-br")]
    Portuguese,
}

/// Section headers printed by the race report.
///
/// Presentation only: nothing in here influences parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLabels {
    pub ranking_header: &'static str,
    pub best_lap: &'static str,
    pub pilot_best_laps: &'static str,
    pub average_speeds: &'static str,
    pub gaps_to_leader: &'static str,
}

impl ReportLabels {
    pub const fn english() -> Self {
        Self {
            ranking_header: "Position\tPilot Code\tPilot Name\tCompleted Laps\tTotal Race Time",
            best_lap: "Best lap of the race",
            pilot_best_laps: "Best lap of each pilot",
            average_speeds: "Average speed of each pilot over the whole race",
            gaps_to_leader: "Time each pilot arrived after the winner",
        }
    }

    pub const fn portuguese() -> Self {
        Self {
            ranking_header: "Posição Chegada\tCódigo Piloto\tNome Piloto\tQtde Voltas Completadas\tTempo Total de Prova",
            best_lap: "Melhor volta da corrida",
            pilot_best_laps: "Melhor volta de cada piloto",
            average_speeds: "Velocidade média de cada piloto durante toda corrida",
            gaps_to_leader: "Quanto tempo cada piloto chegou após o vencedor",
        }
    }

    pub const fn for_language(language: Language) -> Self {
        match language {
            Language::English => Self::english(),
            Language::Portuguese => Self::portuguese(),
        }
    }
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self::english()
    }
}
