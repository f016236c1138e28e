use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

use super::null_normalizer::normalize;
use crate::error::{Result, SourceError};
use crate::schema::TableSchema;
use crate::storage::Store;
use crate::types::RawRecord;

/// Receives progress notifications while a table is loading. Purely cosmetic.
pub trait LoadObserver {
    fn on_progress(&mut self, _schema: &TableSchema, _rows: u64) {}
    fn on_table_loaded(&mut self, _schema: &TableSchema, _rows: u64, _elapsed: Duration) {}
}

/// Default observer: progress lines through `tracing`
#[derive(Debug, Default)]
pub struct TracingObserver;

impl LoadObserver for TracingObserver {
    fn on_progress(&mut self, schema: &TableSchema, rows: u64) {
        info!("   {} rows inserted into {}", rows, schema.table);
    }

    fn on_table_loaded(&mut self, schema: &TableSchema, rows: u64, elapsed: Duration) {
        info!(
            "✅ {} rows inserted into {} in {:.2}s",
            rows,
            schema.table,
            elapsed.as_secs_f64()
        );
    }
}

/// Loads one table: normalize, validate and insert every record of `source` in order.
///
/// The whole file goes in as one transaction. The first decode, validation or
/// insert failure aborts the load and leaves the table without any of this
/// file's rows.
#[instrument(skip(store, source, observer), fields(table = %schema.table))]
pub fn load_table<I>(
    store: &mut Store,
    schema: &'static TableSchema,
    source: I,
    observer: &mut dyn LoadObserver,
    progress_every: u64,
) -> Result<u64>
where
    I: IntoIterator<Item = std::result::Result<RawRecord, SourceError>>,
{
    let started = Instant::now();
    let mut writer = store.writer(schema)?;

    for raw in source {
        let record = normalize(raw?);
        let typed = schema.validate(&record)?;
        writer.insert(&typed)?;

        let rows = writer.rows();
        if progress_every > 0 && rows % progress_every == 0 {
            observer.on_progress(schema, rows);
        }
    }

    let rows = writer.commit()?;
    debug!("Committed {} rows", rows);
    observer.on_table_loaded(schema, rows, started.elapsed());
    Ok(rows)
}
