//! Row-level reads and writes on the interactions table.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, params_from_iter, Connection};

use plateguard_core::errors::PlateguardResult;
use plateguard_core::models::{InteractionKind, InteractionRecord, LedgerFilter, Plate, UserId};

use crate::{to_corruption_err, to_storage_err};

/// Fixed-width RFC 3339 with nanoseconds so text order matches time order
/// and stored timestamps compare exactly like the in-memory ones.
fn encode_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub fn insert_record(conn: &Connection, record: &InteractionRecord) -> PlateguardResult<()> {
    conn.execute(
        "INSERT INTO interactions (id, plate, user_id, kind, timestamp)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            record.id,
            record.plate.as_str(),
            record.user_id.as_str(),
            record.kind.as_str(),
            encode_timestamp(&record.timestamp),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Records matching `filter`, oldest first.
pub fn select_records(
    conn: &Connection,
    filter: &LedgerFilter,
) -> PlateguardResult<Vec<InteractionRecord>> {
    let mut sql = String::from("SELECT id, plate, user_id, kind, timestamp FROM interactions");
    let mut clauses: Vec<&str> = Vec::new();
    let mut values: Vec<String> = Vec::new();

    if let Some(plate) = &filter.plate {
        clauses.push("plate = ?");
        values.push(plate.as_str().to_string());
    }
    if let Some(user_id) = &filter.user_id {
        clauses.push("user_id = ?");
        values.push(user_id.as_str().to_string());
    }
    if let Some(kind) = filter.kind {
        clauses.push("kind = ?");
        values.push(kind.as_str().to_string());
    }
    if let Some(since) = &filter.since {
        clauses.push("timestamp > ?");
        values.push(encode_timestamp(since));
    }
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY timestamp ASC, seq ASC");

    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params_from_iter(values.iter()), |row| {
            Ok(RawRow {
                id: row.get(0)?,
                plate: row.get(1)?,
                user_id: row.get(2)?,
                kind: row.get(3)?,
                timestamp: row.get(4)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut records = Vec::new();
    for row in rows {
        let raw = row.map_err(|e| to_storage_err(e.to_string()))?;
        records.push(raw.decode()?);
    }
    Ok(records)
}

pub fn count_records(conn: &Connection) -> PlateguardResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM interactions", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(usize::try_from(count).unwrap_or(0))
}

struct RawRow {
    id: String,
    plate: String,
    user_id: String,
    kind: String,
    timestamp: String,
}

impl RawRow {
    fn decode(self) -> PlateguardResult<InteractionRecord> {
        let plate = Plate::parse(&self.plate)
            .map_err(|e| to_corruption_err(format!("row {}: {e}", self.id)))?;
        let kind: InteractionKind = self
            .kind
            .parse()
            .map_err(|e| to_corruption_err(format!("row {}: {e}", self.id)))?;
        let timestamp = DateTime::parse_from_rfc3339(&self.timestamp)
            .map_err(|e| {
                to_corruption_err(format!(
                    "row {}: bad timestamp '{}': {e}",
                    self.id, self.timestamp
                ))
            })?
            .with_timezone(&Utc);
        Ok(InteractionRecord {
            id: self.id,
            plate,
            user_id: UserId(self.user_id),
            kind,
            timestamp,
        })
    }
}
