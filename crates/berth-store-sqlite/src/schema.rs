//! SQL schema for the Berth SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Schema
//! changes are breaking: there is no migration mechanism, a changed record
//! shape requires a fresh store.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// Two independently-keyed maps. Keys are the injective, order-preserving
/// text encoding from `berth_core::store::MapKey`; values are the JSON
/// serialisation of the record. `ORDER BY k` over the encoded keys agrees
/// with the key type's ordering.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS users (
    k TEXT PRIMARY KEY,
    v TEXT NOT NULL     -- JSON-serialised User
);

CREATE TABLE IF NOT EXISTS jobs (
    k TEXT PRIMARY KEY,
    v TEXT NOT NULL     -- JSON-serialised Job
);

PRAGMA user_version = 1;
";
