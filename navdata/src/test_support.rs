//! Fixture datasets for unit tests.

use std::path::{Path, PathBuf};

use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};

use crate::dataset::schema;
use crate::dataset::SourceTable;

/// Airport row with the attributes tests care about; the rest are filled in.
#[derive(Debug, Clone)]
pub(crate) struct TestAirport {
    ident: String,
    name: String,
    lat: f64,
    lon: f64,
    elevation: f64,
    city: String,
}

impl TestAirport {
    pub(crate) fn new(ident: &str, name: &str, lat: f64, lon: f64, elevation: f64) -> Self {
        Self {
            ident: ident.to_string(),
            name: name.to_string(),
            lat,
            lon,
            elevation,
            city: String::new(),
        }
    }

    pub(crate) fn city(mut self, city: &str) -> Self {
        self.city = city.to_string();
        self
    }

    fn values(&self) -> Vec<Value> {
        let text = |s: &str| Value::Text(s.to_string());
        vec![
            text("USA"),
            text("K6"),
            text(&self.ident),
            Value::Null,
            text(&self.name),
            Value::Real(self.lat),
            Value::Real(self.lon),
            text("Y"),
            text("H"),
            Value::Real(self.elevation),
            Value::Integer(18000),
            Value::Integer(18000),
            Value::Integer(250),
            Value::Integer(10000),
            text("JFK"),
            text("C"),
            text("NORTH AMERICA"),
            text("UNITED STATES"),
            text("USA"),
            text("NEW YORK"),
            text("NY"),
            text(&self.city),
            Value::Real(-13.0),
            Value::Null,
        ]
    }
}

/// Navaid or waypoint row.
#[derive(Debug, Clone)]
pub(crate) struct TestPoint {
    ident: String,
    name: String,
    lat: f64,
    lon: f64,
    elevation: f64,
}

impl TestPoint {
    pub(crate) fn new(ident: &str, name: &str) -> Self {
        Self {
            ident: ident.to_string(),
            name: name.to_string(),
            lat: 40.0,
            lon: -73.0,
            elevation: 0.0,
        }
    }

    pub(crate) fn elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    fn values(&self, table: SourceTable) -> Vec<Value> {
        let mut values = vec![
            Value::Text(self.ident.clone()),
            Value::Text(self.name.clone()),
            Value::Text("NORTH AMERICA".to_string()),
            Value::Text("UNITED STATES".to_string()),
            Value::Real(self.lat),
            Value::Real(self.lon),
        ];
        if table == SourceTable::VhfNavaids {
            values.push(Value::Real(self.elevation));
        }
        values
    }
}

/// Writes a SQLite file shaped like a navigation dataset.
#[derive(Debug, Default)]
pub(crate) struct DatasetBuilder {
    header_cycle: Option<String>,
    airports: Vec<TestAirport>,
    points: Vec<(SourceTable, TestPoint)>,
    skipped: Vec<SourceTable>,
}

impl DatasetBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_header(mut self, cycle: &str) -> Self {
        self.header_cycle = Some(cycle.to_string());
        self
    }

    pub(crate) fn with_airport(mut self, airport: TestAirport) -> Self {
        self.airports.push(airport);
        self
    }

    pub(crate) fn with_point(mut self, table: SourceTable, point: TestPoint) -> Self {
        self.points.push((table, point));
        self
    }

    /// Leave a source table out of the file entirely.
    pub(crate) fn without_table(mut self, table: SourceTable) -> Self {
        self.skipped.push(table);
        self
    }

    pub(crate) fn write(&self, dir: &Path, file_name: &str) -> PathBuf {
        let path = dir.join(file_name);
        let conn = Connection::open(&path).unwrap();

        create_table(&conn, schema::HEADER_TABLE, schema::HEADER_COLUMNS);
        if let Some(cycle) = &self.header_cycle {
            let values = vec![
                Value::Text("Navigraph".to_string()),
                Value::Text(cycle.clone()),
                Value::Text("Jeppesen".to_string()),
                Value::Text("1.0".to_string()),
                Value::Text("FWDFD".to_string()),
                Value::Text("281223251223".to_string()),
                Value::Text("2023-12-20T10:00:00".to_string()),
                Value::Integer(1),
            ];
            insert(&conn, schema::HEADER_TABLE, schema::HEADER_COLUMNS, values);
        }

        for table in SourceTable::ALL {
            if self.skipped.contains(&table) {
                continue;
            }
            let columns = if table == SourceTable::Airports {
                schema::AIRPORT_COLUMNS
            } else {
                table.columns()
            };
            create_table(&conn, table.table_name(), columns);
        }

        if !self.skipped.contains(&SourceTable::Airports) {
            for airport in &self.airports {
                insert(
                    &conn,
                    schema::AIRPORTS_TABLE,
                    schema::AIRPORT_COLUMNS,
                    airport.values(),
                );
            }
        }

        for (table, point) in &self.points {
            insert(&conn, table.table_name(), table.columns(), point.values(*table));
        }

        path
    }
}

fn create_table(conn: &Connection, table: &str, columns: &[&str]) {
    let sql = format!("CREATE TABLE {} ({})", table, columns.join(", "));
    conn.execute(&sql, []).unwrap();
}

fn insert(conn: &Connection, table: &str, columns: &[&str], values: Vec<Value>) {
    let placeholders = vec!["?"; columns.len()].join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        columns.join(", "),
        placeholders
    );
    conn.execute(&sql, params_from_iter(values)).unwrap();
}
