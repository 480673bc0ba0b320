//! Column value coercion.
//!
//! Source files are not strict about column affinity: a numeric column may
//! hold INTEGER, REAL or numeric TEXT, and any column may be NULL. Text reads
//! never fail (NULL becomes an empty string) and numeric reads fall back to
//! `0.0`.

use rusqlite::types::ValueRef;
use rusqlite::Row;

/// Read column `idx` as text.
pub(crate) fn text(row: &Row<'_>, idx: usize) -> String {
    match row.get_ref(idx) {
        Ok(ValueRef::Text(bytes)) => String::from_utf8_lossy(bytes).into_owned(),
        Ok(ValueRef::Integer(i)) => i.to_string(),
        Ok(ValueRef::Real(f)) => f.to_string(),
        Ok(ValueRef::Null) | Ok(ValueRef::Blob(_)) | Err(_) => String::new(),
    }
}

/// Read column `idx` as a floating point number.
pub(crate) fn number(row: &Row<'_>, idx: usize) -> f64 {
    match row.get_ref(idx) {
        Ok(ValueRef::Real(f)) => f,
        Ok(ValueRef::Integer(i)) => i as f64,
        Ok(ValueRef::Text(bytes)) => std::str::from_utf8(bytes)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0.0),
        Ok(ValueRef::Null) | Ok(ValueRef::Blob(_)) | Err(_) => 0.0,
    }
}
