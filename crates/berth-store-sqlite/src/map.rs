//! [`SqliteMap`] — one table rendered as a [`StableMap`].

use std::marker::PhantomData;

use berth_core::store::{MapKey, StableMap};
use rusqlite::OptionalExtension as _;
use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result};

/// A handle onto one `(k TEXT PRIMARY KEY, v TEXT)` table.
///
/// Cloning is cheap — the inner connection is reference-counted. Keys are
/// encoded with [`MapKey::encode`] at the boundary; values are JSON text,
/// encoded before entering the connection thread and decoded after leaving
/// it, so the database closure never touches serde.
pub struct SqliteMap<K, V> {
  conn:    tokio_rusqlite::Connection,
  table:   &'static str,
  _marker: PhantomData<fn() -> (K, V)>,
}

impl<K, V> Clone for SqliteMap<K, V> {
  fn clone(&self) -> Self {
    Self {
      conn:    self.conn.clone(),
      table:   self.table,
      _marker: PhantomData,
    }
  }
}

impl<K, V> SqliteMap<K, V> {
  /// `table` must exist in the schema; see [`crate::SqliteStore`].
  pub(crate) fn new(
    conn: tokio_rusqlite::Connection,
    table: &'static str,
  ) -> Self {
    Self {
      conn,
      table,
      _marker: PhantomData,
    }
  }

  fn decode(raw: Option<String>) -> Result<Option<V>>
  where
    V: DeserializeOwned,
  {
    raw
      .as_deref()
      .map(serde_json::from_str)
      .transpose()
      .map_err(Error::from)
  }
}

impl<K, V> StableMap<K, V> for SqliteMap<K, V>
where
  K: MapKey,
  V: Serialize + DeserializeOwned + Send + Sync + 'static,
{
  type Error = Error;

  async fn get(&self, key: K) -> Result<Option<V>> {
    let sql = format!("SELECT v FROM {} WHERE k = ?1", self.table);
    let k = key.encode();

    let raw: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![k], |row| row.get(0))
            .optional()?,
        )
      })
      .await?;

    Self::decode(raw)
  }

  async fn insert(&self, key: K, value: V) -> Result<Option<V>> {
    let select = format!("SELECT v FROM {} WHERE k = ?1", self.table);
    let upsert = format!(
      "INSERT INTO {} (k, v) VALUES (?1, ?2)
       ON CONFLICT (k) DO UPDATE SET v = excluded.v",
      self.table
    );
    let k = key.encode();
    let v = serde_json::to_string(&value)?;

    // Read-previous then upsert in one call; the connection's dedicated
    // thread serialises it against other calls.
    let previous: Option<String> = self
      .conn
      .call(move |conn| {
        let previous = conn
          .query_row(&select, rusqlite::params![k], |row| row.get(0))
          .optional()?;
        conn.execute(&upsert, rusqlite::params![k, v])?;
        Ok(previous)
      })
      .await?;

    Self::decode(previous)
  }

  async fn remove(&self, key: K) -> Result<Option<V>> {
    let select = format!("SELECT v FROM {} WHERE k = ?1", self.table);
    let delete = format!("DELETE FROM {} WHERE k = ?1", self.table);
    let k = key.encode();

    let removed: Option<String> = self
      .conn
      .call(move |conn| {
        let removed = conn
          .query_row(&select, rusqlite::params![k], |row| row.get(0))
          .optional()?;
        conn.execute(&delete, rusqlite::params![k])?;
        Ok(removed)
      })
      .await?;

    Self::decode(removed)
  }

  async fn values(&self) -> Result<Vec<V>> {
    let sql = format!("SELECT v FROM {} ORDER BY k", self.table);

    let raws: Vec<String> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws
      .iter()
      .map(|raw| serde_json::from_str(raw).map_err(Error::from))
      .collect()
  }
}
