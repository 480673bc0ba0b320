//! Read-only access to a navigation dataset file.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags, Row};

use super::navpoint::{NavPoint, SourceTable};
use super::schema;
use super::{AirportRecord, DatasetError, DatasetHeader};

/// An open dataset file.
///
/// The connection is read-only and is closed when the reader is dropped, so
/// a reader should live only for the duration of one load operation.
#[derive(Debug)]
pub struct DatasetReader {
    conn: Connection,
    path: PathBuf,
}

impl DatasetReader {
    /// Open a dataset file read-only.
    ///
    /// Fails if the file does not exist or cannot be opened. A file that
    /// exists but is not a SQLite database opens successfully and fails on
    /// the first query instead.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref().to_path_buf();
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(&path, flags).map_err(|source| {
            DatasetError::Open {
                path: path.clone(),
                source,
            }
        })?;
        Ok(Self { conn, path })
    }

    /// Path of the open file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the first row of the header table.
    pub fn read_header(&self) -> Result<DatasetHeader, DatasetError> {
        let sql = format!(
            "{} LIMIT 1",
            schema::select(schema::HEADER_TABLE, schema::HEADER_COLUMNS)
        );
        let mut headers = self.collect_rows(schema::HEADER_TABLE, &sql, DatasetHeader::from_row)?;
        if headers.is_empty() {
            return Err(DatasetError::MissingHeader(self.path.clone()));
        }
        Ok(headers.swap_remove(0))
    }

    /// Read every airport, sorted ascending by identifier.
    ///
    /// The sort is stable: airports sharing an identifier keep table order.
    pub fn read_airports(&self) -> Result<Vec<AirportRecord>, DatasetError> {
        let sql = schema::select(schema::AIRPORTS_TABLE, schema::AIRPORT_COLUMNS);
        let mut airports =
            self.collect_rows(schema::AIRPORTS_TABLE, &sql, AirportRecord::from_row)?;
        airports.sort_by(|a, b| a.identifier.cmp(&b.identifier));

        tracing::debug!(count = airports.len(), "Read airport table");
        Ok(airports)
    }

    /// Read the unified projection of a single source table, in table order.
    pub fn read_table(&self, table: SourceTable) -> Result<Vec<NavPoint>, DatasetError> {
        self.collect_rows(table.table_name(), &table.query(), |row| table.map_row(row))
    }

    /// Read all five source tables into one sequence sorted by identifier.
    ///
    /// Tables are concatenated in [`SourceTable::ALL`] order before a stable
    /// sort, so duplicate identifiers resolve VHF, NDB, enroute, terminal,
    /// airport. A table that cannot be queried contributes no rows; the
    /// remaining tables are still read.
    pub fn read_nav_points(&self) -> Vec<NavPoint> {
        let mut points = Vec::new();

        for table in SourceTable::ALL {
            match self.read_table(table) {
                Ok(rows) => {
                    tracing::debug!(table = %table, count = rows.len(), "Read navigation table");
                    points.extend(rows);
                }
                Err(e) => {
                    tracing::warn!(
                        table = %table,
                        error = %e,
                        "Skipping unreadable navigation table"
                    );
                }
            }
        }

        points.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        points
    }

    /// Run `sql` and map every row.
    ///
    /// Prepare failures are returned as errors. A failure while stepping
    /// through rows ends the scan and keeps the rows read so far.
    fn collect_rows<T, F>(&self, table: &str, sql: &str, map: F) -> Result<Vec<T>, DatasetError>
    where
        F: Fn(&Row<'_>) -> T,
    {
        let query_error = |source| DatasetError::Query {
            table: table.to_string(),
            source,
        };

        let mut stmt = self.conn.prepare(sql).map_err(query_error)?;
        let mut rows = stmt.query([]).map_err(query_error)?;

        let mut out = Vec::new();
        loop {
            match rows.next() {
                Ok(Some(row)) => out.push(map(row)),
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(table, error = %e, rows = out.len(), "Row scan aborted");
                    break;
                }
            }
        }
        Ok(out)
    }
}
