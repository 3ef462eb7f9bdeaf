//! The `StableMap` trait — the ordered key-value store contract.
//!
//! The trait is implemented by storage backends (e.g. `berth-store-sqlite`)
//! and by in-memory doubles in tests. Higher layers depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

// ─── Keys ────────────────────────────────────────────────────────────────────

/// A key usable in a [`StableMap`].
///
/// `encode` must be injective and order-preserving: lexicographic order over
/// encoded strings must agree with the key type's `Ord`, so a backend may
/// sort the encoded form and still satisfy the `values()` contract.
pub trait MapKey: Clone + Ord + Send + Sync + 'static {
  fn encode(&self) -> String;
}

/// Hyphenated lowercase form — fixed width, so lexicographic order over the
/// hex digits agrees with `Uuid`'s byte order.
impl MapKey for Uuid {
  fn encode(&self) -> String { self.hyphenated().to_string() }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a durable ordered map from `K` to fixed-shape records.
///
/// No transactions and no secondary indices: callers needing uniqueness or
/// ownership checks scan [`values`](StableMap::values) themselves. Committed
/// writes survive process restarts.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait StableMap<K: MapKey, V>: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Retrieve the record under `key`. Returns `None` if absent.
  fn get(
    &self,
    key: K,
  ) -> impl Future<Output = Result<Option<V>, Self::Error>> + Send + '_;

  /// Upsert: store `value` under `key` and return the previous record.
  /// An existing record is overwritten silently.
  fn insert(
    &self,
    key: K,
    value: V,
  ) -> impl Future<Output = Result<Option<V>, Self::Error>> + Send + '_;

  /// Remove and return the record under `key`. Returns `None` if absent.
  fn remove(
    &self,
    key: K,
  ) -> impl Future<Output = Result<Option<V>, Self::Error>> + Send + '_;

  /// All records in ascending key order.
  fn values(
    &self,
  ) -> impl Future<Output = Result<Vec<V>, Self::Error>> + Send + '_;
}
