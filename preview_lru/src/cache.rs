//! Cache trait definition
//! 缓存 trait 定义

use std::{borrow::Borrow, hash::Hash};

/// Shared cache, internally synchronized
/// 共享缓存，内部同步
///
/// # Complexity
/// 复杂度
///
/// All implementations should provide:
/// 所有实现应提供：
/// - get: O(1)
/// - set: O(1) amortized
/// - clear: O(1) under lock, old entries dropped after unlock
pub trait Cache<K, V> {
  /// Get value by key, refreshing its recency
  /// 按键获取值，并刷新其最近使用时间
  fn get<Q>(&self, key: &Q) -> Option<V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized;

  /// Insert or update, returns true if key was present
  /// 插入或更新，键已存在时返回 true
  fn set(&self, key: K, val: V) -> bool;

  /// Drop all entries
  /// 清空所有条目
  fn clear(&self);
}
