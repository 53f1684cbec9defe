//! NoCache - zero overhead no-op cache
//! NoCache - 零开销空操作缓存
//!
//! Used when previews should always be recomputed.
//! 用于总是重新生成预览的场景。

use std::{borrow::Borrow, hash::Hash};

use crate::Cache;

/// No-op cache, all operations do nothing
/// 空操作缓存，所有操作都不做任何事
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCache;

impl<K, V> Cache<K, V> for NoCache {
  #[inline(always)]
  fn get<Q>(&self, _: &Q) -> Option<V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    None
  }

  #[inline(always)]
  fn set(&self, _: K, _: V) -> bool {
    false
  }

  #[inline(always)]
  fn clear(&self) {}
}
