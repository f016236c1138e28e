//! Dataset-wide constants shared by the loader, the CLI and the tests.

/// Literal token the source CSVs use for "no value".
pub const NULL_SENTINEL: &str = "\\N";

// Default locations, relative to the working directory
pub const DEFAULT_CSV_DIR: &str = "csv";
pub const DEFAULT_OUTPUT_PATH: &str = "out/f1.sqlite";
pub const DEFAULT_CONFIG_PATH: &str = "f1flat.toml";

/// Rows between two progress notifications during a table load.
pub const DEFAULT_PROGRESS_EVERY: u64 = 10_000;

/// Earliest championship season in the dataset.
pub const FIRST_SEASON: i64 = 1950;

// Source file names
pub const CIRCUITS_CSV: &str = "circuits.csv";
pub const CONSTRUCTORS_CSV: &str = "constructors.csv";
pub const DRIVERS_CSV: &str = "drivers.csv";
pub const SEASONS_CSV: &str = "seasons.csv";
pub const RACES_CSV: &str = "races.csv";
pub const STATUS_CSV: &str = "status.csv";
pub const CONSTRUCTOR_RESULTS_CSV: &str = "constructor_results.csv";
pub const CONSTRUCTOR_STANDINGS_CSV: &str = "constructor_standings.csv";
pub const DRIVER_STANDINGS_CSV: &str = "driver_standings.csv";
pub const LAP_TIMES_CSV: &str = "lap_times.csv";
pub const PIT_STOPS_CSV: &str = "pit_stops.csv";
pub const QUALIFYING_CSV: &str = "qualifying.csv";
pub const RESULTS_CSV: &str = "results.csv";
pub const SPRINT_RESULTS_CSV: &str = "sprint_results.csv";

/// Every file the preflight check expects to find in the CSV directory
pub fn get_source_files() -> Vec<&'static str> {
    vec![
        CIRCUITS_CSV,
        CONSTRUCTORS_CSV,
        DRIVERS_CSV,
        SEASONS_CSV,
        RACES_CSV,
        STATUS_CSV,
        CONSTRUCTOR_RESULTS_CSV,
        CONSTRUCTOR_STANDINGS_CSV,
        DRIVER_STANDINGS_CSV,
        LAP_TIMES_CSV,
        PIT_STOPS_CSV,
        QUALIFYING_CSV,
        RESULTS_CSV,
        SPRINT_RESULTS_CSV,
    ]
}
