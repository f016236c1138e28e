//! Load pipeline driver.
//!
//! A run walks `Preflight → Initializing → Loading(entity) … → Indexing → Done`.
//! Each state has its own entry point so every failure point can be driven on
//! its own; any error moves the pipeline to `Failed`, which is terminal. Once
//! the output store has been touched, failing always deletes it again so an
//! invalid database is never left at the output path.

pub mod ingestion;
pub mod processing;

use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info, instrument, warn};

use crate::config::Config;
use crate::constants;
use crate::error::{PipelineError, PreflightError, Result, StoreError};
use crate::report::{LoadReport, TableReport};
use crate::schema::{Entity, TableSchema};
use crate::storage::{remove_store_files, Store};

use self::ingestion::CsvDecoder;
use self::processing::{load_table, LoadObserver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Preflight,
    Initializing,
    Loading(Entity),
    Indexing,
    Done,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOptions {
    pub csv_dir: PathBuf,
    pub output: PathBuf,
    /// Rows between progress notifications; 0 disables them
    pub progress_every: u64,
}

impl PipelineOptions {
    pub fn new(csv_dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            csv_dir: csv_dir.into(),
            output: output.into(),
            progress_every: constants::DEFAULT_PROGRESS_EVERY,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            csv_dir: config.csv_dir(),
            output: config.output(),
            progress_every: config.progress_every(),
        }
    }
}

pub struct Pipeline {
    options: PipelineOptions,
    state: PipelineState,
    store: Option<Store>,
    report: LoadReport,
    started: Instant,
}

impl Pipeline {
    pub fn new(options: PipelineOptions) -> Self {
        let report = LoadReport::new(&options.csv_dir, &options.output);
        Self {
            options,
            state: PipelineState::Preflight,
            store: None,
            report,
            started: Instant::now(),
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Drive every state in order and return the report of a successful run
    pub fn run(mut self, observer: &mut dyn LoadObserver) -> Result<LoadReport> {
        info!(
            "🚀 Loading {} into {}",
            self.options.csv_dir.display(),
            self.options.output.display()
        );

        self.preflight()?;
        self.initialize()?;
        for entity in Entity::ALL {
            self.load(entity, observer)?;
        }
        self.index()?;

        info!(
            "✅ Loaded {} rows into {} in {:.2}s",
            self.report.total_rows(),
            self.options.output.display(),
            self.started.elapsed().as_secs_f64()
        );
        Ok(self.report)
    }

    /// Check the CSV directory and all source files exist. Touches nothing.
    pub fn preflight(&mut self) -> Result<()> {
        self.require_state(PipelineState::Preflight)?;
        match check_sources(&self.options.csv_dir) {
            Ok(()) => {
                self.state = PipelineState::Initializing;
                Ok(())
            }
            Err(e) => Err(self.fail(e.into())),
        }
    }

    /// Replace the output store with a fresh one and create every table
    pub fn initialize(&mut self) -> Result<()> {
        self.require_state(PipelineState::Initializing)?;
        let result = Store::create(&self.options.output).and_then(|store| {
            store.create_tables()?;
            Ok(store)
        });

        match result {
            Ok(store) => {
                self.store = Some(store);
                self.state = PipelineState::Loading(Entity::ALL[0]);
                Ok(())
            }
            Err(e) => Err(self.fail(e.into())),
        }
    }

    /// Load one entity's CSV. Entities must be loaded in dependency order.
    pub fn load(&mut self, entity: Entity, observer: &mut dyn LoadObserver) -> Result<u64> {
        self.require_state(PipelineState::Loading(entity))?;
        let schema = entity.schema();

        match self.load_entity(schema, observer) {
            Ok(table) => {
                let rows = table.rows;
                self.report.tables.push(table);
                self.state = match entity.next() {
                    Some(next) => PipelineState::Loading(next),
                    None => PipelineState::Indexing,
                };
                Ok(rows)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    #[instrument(skip_all, fields(table = %schema.table))]
    fn load_entity(
        &mut self,
        schema: &'static TableSchema,
        observer: &mut dyn LoadObserver,
    ) -> Result<TableReport> {
        let path = self.options.csv_dir.join(schema.source_file);
        info!("Reading {} data from {}", schema.table, path.display());

        let started = Instant::now();
        let mut decoder = CsvDecoder::open(&path, schema)?;
        let store = self.store.as_mut().ok_or(StoreError::Closed)?;
        let rows = load_table(store, schema, &mut decoder, observer, self.options.progress_every)?;

        Ok(TableReport {
            table: schema.table,
            source_file: schema.source_file,
            sha256: decoder.sha256(),
            rows,
            duration_ms: started.elapsed().as_millis() as u64,
        })
    }

    /// Create every index, verify integrity and close the store
    pub fn index(&mut self) -> Result<()> {
        self.require_state(PipelineState::Indexing)?;
        match self.build_indexes() {
            Ok(count) => {
                self.report.indexes = count;
                self.report.duration_ms = self.started.elapsed().as_millis() as u64;
                self.state = PipelineState::Done;
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    fn build_indexes(&mut self) -> Result<usize> {
        let store = self.store.take().ok_or(StoreError::Closed)?;
        info!("Creating ref key and foreign key indexes");
        let count = store.create_indexes()?;
        store.finalize()?;
        Ok(count)
    }

    fn require_state(&self, expected: PipelineState) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(PipelineError::InvalidTransition {
                from: self.state,
                to: expected,
            })
        }
    }

    /// Move to `Failed`. Past preflight, the work-in-progress store is deleted.
    fn fail(&mut self, err: PipelineError) -> PipelineError {
        let during = self.state;
        self.state = PipelineState::Failed;
        error!("Pipeline failed during {:?}: {}", during, err);

        if during != PipelineState::Preflight {
            // Close before deleting so no handle keeps the file alive
            drop(self.store.take());
            warn!("Deleting WIP database {}", self.options.output.display());
            if let Err(e) = remove_store_files(&self.options.output) {
                error!("Failed to delete WIP database: {}", e);
            }
        }
        err
    }
}

/// The CSV directory and every expected source file must exist
pub fn check_sources(csv_dir: &Path) -> std::result::Result<(), PreflightError> {
    if !csv_dir.is_dir() {
        return Err(PreflightError::MissingDirectory(csv_dir.to_path_buf()));
    }
    info!("`{}` directory exists", csv_dir.display());

    for file in constants::get_source_files() {
        let path = csv_dir.join(file);
        if !path.is_file() {
            return Err(PreflightError::MissingFile(path));
        }
        info!("{} exists", file);
    }
    Ok(())
}
