//! The fourteen table descriptors, in foreign-key dependency order.

use super::FieldType::{Integer, Real, Text};
use super::{Field, ForeignKey, IndexDef, TableSchema};
use crate::constants::{self, FIRST_SEASON};

/// Entity types of the dataset, one per table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Circuit,
    Constructor,
    Driver,
    Season,
    Race,
    Status,
    ConstructorResult,
    ConstructorStanding,
    DriverStanding,
    LapTime,
    PitStop,
    QualifyingSession,
    RaceResult,
    SprintResult,
}

impl Entity {
    /// Every entity, parents before children. Used for both table creation and loading.
    pub const ALL: [Entity; 14] = [
        Entity::Circuit,
        Entity::Constructor,
        Entity::Driver,
        Entity::Season,
        Entity::Race,
        Entity::Status,
        Entity::ConstructorResult,
        Entity::ConstructorStanding,
        Entity::DriverStanding,
        Entity::LapTime,
        Entity::PitStop,
        Entity::QualifyingSession,
        Entity::RaceResult,
        Entity::SprintResult,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Entity::Circuit => "Circuit",
            Entity::Constructor => "Constructor",
            Entity::Driver => "Driver",
            Entity::Season => "Season",
            Entity::Race => "Race",
            Entity::Status => "Status",
            Entity::ConstructorResult => "ConstructorResult",
            Entity::ConstructorStanding => "ConstructorStanding",
            Entity::DriverStanding => "DriverStanding",
            Entity::LapTime => "LapTime",
            Entity::PitStop => "PitStop",
            Entity::QualifyingSession => "QualifyingSession",
            Entity::RaceResult => "RaceResult",
            Entity::SprintResult => "SprintResult",
        }
    }

    pub fn schema(self) -> &'static TableSchema {
        match self {
            Entity::Circuit => &CIRCUITS,
            Entity::Constructor => &CONSTRUCTORS,
            Entity::Driver => &DRIVERS,
            Entity::Season => &SEASONS,
            Entity::Race => &RACES,
            Entity::Status => &STATUS,
            Entity::ConstructorResult => &CONSTRUCTOR_RESULTS,
            Entity::ConstructorStanding => &CONSTRUCTOR_STANDINGS,
            Entity::DriverStanding => &DRIVER_STANDINGS,
            Entity::LapTime => &LAP_TIMES,
            Entity::PitStop => &PIT_STOPS,
            Entity::QualifyingSession => &QUALIFYING_SESSIONS,
            Entity::RaceResult => &RACE_RESULTS,
            Entity::SprintResult => &SPRINT_RESULTS,
        }
    }

    /// Position in the dependency order
    pub fn ordinal(self) -> usize {
        Self::ALL
            .iter()
            .position(|e| *e == self)
            .unwrap_or(Self::ALL.len())
    }

    pub fn next(self) -> Option<Entity> {
        Self::ALL.get(self.ordinal() + 1).copied()
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// All table descriptors in dependency order
pub static TABLES: [&TableSchema; 14] = [
    &CIRCUITS,
    &CONSTRUCTORS,
    &DRIVERS,
    &SEASONS,
    &RACES,
    &STATUS,
    &CONSTRUCTOR_RESULTS,
    &CONSTRUCTOR_STANDINGS,
    &DRIVER_STANDINGS,
    &LAP_TIMES,
    &PIT_STOPS,
    &QUALIFYING_SESSIONS,
    &RACE_RESULTS,
    &SPRINT_RESULTS,
];

// =============================================================================
// Independent tables
// =============================================================================

pub static CIRCUITS: TableSchema = TableSchema {
    entity: Entity::Circuit,
    table: "circuits",
    source_file: constants::CIRCUITS_CSV,
    fields: &[
        Field::required("circuitId", "id", Integer),
        Field::required("circuitRef", "ref", Text),
        Field::required("name", "name", Text),
        Field::required("location", "location", Text),
        Field::required("country", "country", Text),
        Field::required("lat", "lat", Real),
        Field::required("lng", "lng", Real),
        Field::nullable("alt", "alt", Integer),
        Field::required("url", "url", Text),
    ],
    primary_key: &["id"],
    foreign_keys: &[],
    indexes: &[IndexDef::new("circuit_ref", "ref")],
};

pub static CONSTRUCTORS: TableSchema = TableSchema {
    entity: Entity::Constructor,
    table: "constructors",
    source_file: constants::CONSTRUCTORS_CSV,
    fields: &[
        Field::required("constructorId", "id", Integer),
        Field::required("constructorRef", "ref", Text),
        Field::required("name", "name", Text),
        Field::required("nationality", "nationality", Text),
        Field::required("url", "url", Text),
    ],
    primary_key: &["id"],
    foreign_keys: &[],
    indexes: &[IndexDef::new("constructor_ref", "ref")],
};

pub static DRIVERS: TableSchema = TableSchema {
    entity: Entity::Driver,
    table: "drivers",
    source_file: constants::DRIVERS_CSV,
    fields: &[
        Field::required("driverId", "id", Integer),
        Field::required("driverRef", "ref", Text),
        Field::nullable("number", "number", Integer),
        Field::nullable("code", "code", Text),
        Field::required("forename", "forename", Text),
        Field::required("surname", "surname", Text),
        Field::required("dob", "dob", Text),
        Field::required("nationality", "nationality", Text),
        Field::required("url", "url", Text),
    ],
    primary_key: &["id"],
    foreign_keys: &[],
    indexes: &[IndexDef::new("driver_ref", "ref")],
};

pub static SEASONS: TableSchema = TableSchema {
    entity: Entity::Season,
    table: "seasons",
    source_file: constants::SEASONS_CSV,
    fields: &[
        Field::required("year", "year", Integer).at_least(FIRST_SEASON),
        Field::required("url", "url", Text),
    ],
    primary_key: &["year"],
    foreign_keys: &[],
    indexes: &[],
};

pub static RACES: TableSchema = TableSchema {
    entity: Entity::Race,
    table: "races",
    source_file: constants::RACES_CSV,
    fields: &[
        Field::required("raceId", "id", Integer),
        Field::required("year", "year", Integer).at_least(FIRST_SEASON),
        Field::required("round", "round", Integer).at_least(1),
        Field::required("circuitId", "circuit", Integer),
        Field::required("name", "name", Text),
        Field::required("date", "date", Text),
        Field::nullable("time", "time", Text),
        Field::required("url", "url", Text),
        Field::nullable("fp1_date", "fp1_date", Text),
        Field::nullable("fp1_time", "fp1_time", Text),
        Field::nullable("fp2_date", "fp2_date", Text),
        Field::nullable("fp2_time", "fp2_time", Text),
        Field::nullable("fp3_date", "fp3_date", Text),
        Field::nullable("fp3_time", "fp3_time", Text),
        Field::nullable("quali_date", "quali_date", Text),
        Field::nullable("quali_time", "quali_time", Text),
        Field::nullable("sprint_date", "sprint_date", Text),
        Field::nullable("sprint_time", "sprint_time", Text),
    ],
    primary_key: &["id"],
    foreign_keys: &[
        ForeignKey::new("year", "seasons", "year"),
        ForeignKey::new("circuit", "circuits", "id"),
    ],
    indexes: &[
        IndexDef::new("races_by_year", "year"),
        IndexDef::new("races_by_circuit", "circuit"),
    ],
};

pub static STATUS: TableSchema = TableSchema {
    entity: Entity::Status,
    table: "status",
    source_file: constants::STATUS_CSV,
    fields: &[
        Field::required("statusId", "id", Integer),
        Field::required("status", "status", Text),
    ],
    primary_key: &["id"],
    foreign_keys: &[],
    indexes: &[],
};

// =============================================================================
// Dependent tables
// =============================================================================

pub static CONSTRUCTOR_RESULTS: TableSchema = TableSchema {
    entity: Entity::ConstructorResult,
    table: "constructor_results",
    source_file: constants::CONSTRUCTOR_RESULTS_CSV,
    fields: &[
        Field::required("constructorResultsId", "id", Integer),
        Field::required("raceId", "race", Integer),
        Field::required("constructorId", "constructor", Integer),
        Field::required("points", "points", Real),
        // Free-text result code ("D" for disqualified), not a status id
        Field::nullable("status", "status", Text),
    ],
    primary_key: &["id"],
    foreign_keys: &[
        ForeignKey::new("race", "races", "id"),
        ForeignKey::new("constructor", "constructors", "id"),
    ],
    indexes: &[
        IndexDef::new("constructor_results_by_race", "race"),
        IndexDef::new("constructor_results_by_constructor", "constructor"),
    ],
};

pub static CONSTRUCTOR_STANDINGS: TableSchema = TableSchema {
    entity: Entity::ConstructorStanding,
    table: "constructor_standings",
    source_file: constants::CONSTRUCTOR_STANDINGS_CSV,
    fields: &[
        Field::required("constructorStandingsId", "id", Integer),
        Field::required("raceId", "race", Integer),
        Field::required("constructorId", "constructor", Integer),
        Field::required("points", "points", Real),
        Field::required("position", "position", Integer),
        Field::required("positionText", "position_text", Text),
        Field::required("wins", "wins", Integer),
    ],
    primary_key: &["id"],
    foreign_keys: &[
        ForeignKey::new("race", "races", "id"),
        ForeignKey::new("constructor", "constructors", "id"),
    ],
    indexes: &[
        IndexDef::new("constructor_standings_by_race", "race"),
        IndexDef::new("constructor_standings_by_constructor", "constructor"),
    ],
};

pub static DRIVER_STANDINGS: TableSchema = TableSchema {
    entity: Entity::DriverStanding,
    table: "driver_standings",
    source_file: constants::DRIVER_STANDINGS_CSV,
    fields: &[
        Field::required("driverStandingsId", "id", Integer),
        Field::required("raceId", "race", Integer),
        Field::required("driverId", "driver", Integer),
        Field::required("points", "points", Real),
        Field::required("position", "position", Integer),
        Field::required("positionText", "position_text", Text),
        Field::required("wins", "wins", Integer),
    ],
    primary_key: &["id"],
    foreign_keys: &[
        ForeignKey::new("race", "races", "id"),
        ForeignKey::new("driver", "drivers", "id"),
    ],
    indexes: &[
        IndexDef::new("driver_standings_by_race", "race"),
        IndexDef::new("driver_standings_by_driver", "driver"),
    ],
};

pub static LAP_TIMES: TableSchema = TableSchema {
    entity: Entity::LapTime,
    table: "lap_times",
    source_file: constants::LAP_TIMES_CSV,
    fields: &[
        Field::required("raceId", "race", Integer),
        Field::required("driverId", "driver", Integer),
        Field::required("lap", "lap", Integer),
        Field::required("position", "position", Integer),
        Field::required("time", "time", Text),
        Field::required("milliseconds", "milliseconds", Integer),
    ],
    primary_key: &["race", "driver", "lap"],
    foreign_keys: &[
        ForeignKey::new("race", "races", "id"),
        ForeignKey::new("driver", "drivers", "id"),
    ],
    indexes: &[
        IndexDef::new("lap_times_by_race", "race"),
        IndexDef::new("lap_times_by_driver", "driver"),
    ],
};

pub static PIT_STOPS: TableSchema = TableSchema {
    entity: Entity::PitStop,
    table: "pit_stops",
    source_file: constants::PIT_STOPS_CSV,
    fields: &[
        Field::required("raceId", "race", Integer),
        Field::required("driverId", "driver", Integer),
        Field::required("stop", "stop", Integer),
        Field::required("lap", "lap", Integer),
        Field::required("time", "time", Text),
        Field::required("duration", "duration", Text),
        Field::required("milliseconds", "milliseconds", Integer),
    ],
    primary_key: &["race", "driver", "stop"],
    foreign_keys: &[
        ForeignKey::new("race", "races", "id"),
        ForeignKey::new("driver", "drivers", "id"),
    ],
    indexes: &[
        IndexDef::new("pit_stops_by_race", "race"),
        IndexDef::new("pit_stops_by_driver", "driver"),
    ],
};

pub static QUALIFYING_SESSIONS: TableSchema = TableSchema {
    entity: Entity::QualifyingSession,
    table: "qualifying_sessions",
    source_file: constants::QUALIFYING_CSV,
    fields: &[
        Field::required("qualifyId", "id", Integer),
        Field::required("raceId", "race", Integer),
        Field::required("driverId", "driver", Integer),
        Field::required("constructorId", "constructor", Integer),
        Field::required("number", "number", Integer),
        Field::required("position", "position", Integer),
        Field::nullable("q1", "q1", Text),
        Field::nullable("q2", "q2", Text),
        Field::nullable("q3", "q3", Text),
    ],
    primary_key: &["id"],
    foreign_keys: &[
        ForeignKey::new("race", "races", "id"),
        ForeignKey::new("driver", "drivers", "id"),
        ForeignKey::new("constructor", "constructors", "id"),
    ],
    indexes: &[
        IndexDef::new("qualifying_sessions_by_race", "race"),
        IndexDef::new("qualifying_sessions_by_driver", "driver"),
        IndexDef::new("qualifying_sessions_by_constructor", "constructor"),
    ],
};

pub static RACE_RESULTS: TableSchema = TableSchema {
    entity: Entity::RaceResult,
    table: "race_results",
    source_file: constants::RESULTS_CSV,
    fields: &[
        Field::required("resultId", "id", Integer),
        Field::required("raceId", "race", Integer),
        Field::required("driverId", "driver", Integer),
        Field::required("constructorId", "constructor", Integer),
        Field::nullable("number", "number", Integer),
        Field::required("grid", "grid", Integer),
        Field::nullable("position", "position", Integer),
        Field::required("positionText", "position_text", Text),
        Field::required("positionOrder", "position_order", Integer),
        Field::required("points", "points", Real),
        Field::required("laps", "laps", Integer),
        Field::nullable("time", "time", Text),
        Field::nullable("milliseconds", "milliseconds", Integer),
        Field::nullable("fastestLap", "fastest_lap", Integer),
        Field::nullable("rank", "rank", Integer),
        Field::nullable("fastestLapTime", "fastest_lap_time", Text),
        Field::nullable("fastestLapSpeed", "fastest_lap_speed", Real),
        Field::required("statusId", "status", Integer),
    ],
    primary_key: &["id"],
    foreign_keys: &[
        ForeignKey::new("race", "races", "id"),
        ForeignKey::new("driver", "drivers", "id"),
        ForeignKey::new("constructor", "constructors", "id"),
    ],
    indexes: &[
        IndexDef::new("race_results_by_race", "race"),
        IndexDef::new("race_results_by_driver", "driver"),
        IndexDef::new("race_results_by_constructor", "constructor"),
    ],
};

pub static SPRINT_RESULTS: TableSchema = TableSchema {
    entity: Entity::SprintResult,
    table: "sprint_results",
    source_file: constants::SPRINT_RESULTS_CSV,
    fields: &[
        Field::required("resultId", "id", Integer),
        Field::required("raceId", "race", Integer),
        Field::required("driverId", "driver", Integer),
        Field::required("constructorId", "constructor", Integer),
        Field::required("number", "number", Integer),
        Field::required("grid", "grid", Integer),
        Field::nullable("position", "position", Integer),
        Field::required("positionText", "position_text", Text),
        Field::required("positionOrder", "position_order", Integer),
        Field::required("points", "points", Real),
        Field::required("laps", "laps", Integer),
        Field::nullable("time", "time", Text),
        Field::nullable("milliseconds", "milliseconds", Integer),
        Field::nullable("fastestLap", "fastest_lap", Integer),
        Field::nullable("fastestLapTime", "fastest_lap_time", Text),
        Field::required("statusId", "status", Integer),
    ],
    primary_key: &["id"],
    foreign_keys: &[
        ForeignKey::new("race", "races", "id"),
        ForeignKey::new("driver", "drivers", "id"),
        ForeignKey::new("constructor", "constructors", "id"),
    ],
    indexes: &[
        IndexDef::new("sprint_results_by_race", "race"),
        IndexDef::new("sprint_results_by_driver", "driver"),
        IndexDef::new("sprint_results_by_constructor", "constructor"),
    ],
};
