//! LRU (Least Recently Used) cache
//! LRU（最近最少使用）缓存
//!
//! # Complexity
//! 复杂度
//!
//! - get: O(1)
//! - set: O(1)
//! - clear: O(1) under lock
//!
//! Key index (`HashMap<K, Id>`) and recency list (`lru_list::List`) sit in
//! one struct behind one mutex, so both change together or not at all.
//! 键索引与最近使用链表放在同一结构体中，由同一把锁保护，二者同时变更。

use std::{borrow::Borrow, collections::HashMap, hash::Hash, mem};

use log::{debug, trace};
use lru_list::{Id, List};
use parking_lot::Mutex;

use crate::{Cache, Conf, Config, Result, conf};

// Cap on up-front allocation, larger caches grow on demand
// 预分配上限，更大的缓存按需增长
const PREALLOC_MAX: usize = 4096;

struct Entry<K, V> {
  key: K,
  val: V,
}

struct Inner<K, V> {
  index: HashMap<K, Id>,
  list: List<Entry<K, V>>,
}

impl<K, V> Inner<K, V> {
  fn with_capacity(cap: usize) -> Self {
    let n = cap.min(PREALLOC_MAX);
    Self {
      index: HashMap::with_capacity(n),
      list: List::with_capacity(n),
    }
  }
}

/// Thread-safe LRU cache with fixed entry count
/// 固定条目数的线程安全 LRU 缓存
///
/// Evicts the least recently read or written entry when full.
/// Share across threads with `Arc<Lru<K, V>>`.
/// 满时淘汰最久未读写的条目。通过 `Arc<Lru<K, V>>` 跨线程共享。
///
/// `get` clones the value under the lock, so keep `V` cheap to clone
/// (`Bytes`, `Arc<_>`). Evicted, overwritten and cleared values are dropped
/// after the lock is released.
/// `get` 在锁内克隆值，`V` 应廉价可克隆。被淘汰、覆盖、清空的值在释放锁后析构。
///
/// # Examples
/// ```
/// use preview_lru::Lru;
///
/// let cache: Lru<String, u32> = Lru::new(2);
/// assert!(!cache.set("a".into(), 1));
/// cache.set("b".into(), 2);
/// assert_eq!(cache.get("a"), Some(1));
///
/// // "b" is now the least recently used
/// cache.set("c".into(), 3);
/// assert_eq!(cache.get("b"), None);
/// ```
pub struct Lru<K, V> {
  cap: usize,
  inner: Mutex<Inner<K, V>>,
}

impl<K: Hash + Eq + Clone, V> Lru<K, V> {
  /// Create with capacity, 0 keeps nothing
  /// 创建，指定容量，0 表示不缓存
  pub fn new(cap: usize) -> Self {
    Self {
      cap,
      inner: Mutex::new(Inner::with_capacity(cap)),
    }
  }

  /// Create from signed capacity, negative is rejected
  /// 从有符号容量创建，负数报错
  pub fn try_new(cap: i64) -> Result<Self> {
    Ok(Self::new(conf::check_cap(cap)?))
  }

  /// Create from config options
  /// 从配置项创建
  pub fn with_conf(conf_li: &[Conf]) -> Result<Self> {
    let config = Config::try_from(conf_li)?;
    Ok(Self::new(config.cap))
  }

  #[inline(always)]
  pub fn cap(&self) -> usize {
    self.cap
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.inner.lock().list.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.inner.lock().list.is_empty()
  }

  /// Insert or update, returns true if key was present
  /// 插入或更新，键已存在时返回 true
  ///
  /// Both branches move the key to the front. Only a new key can evict.
  /// 两个分支都会把键移到头部，只有新键会触发淘汰。
  pub fn set(&self, key: K, val: V) -> bool {
    let mut inner = self.inner.lock();
    let Inner { index, list } = &mut *inner;

    if let Some(&id) = index.get(&key) {
      // Index and list change together under the lock, an indexed id is live
      // 索引与链表在同一把锁下变更，已索引的 id 必然存活
      let Some(e) = list.get_mut(id) else {
        unreachable!("indexed id missing from list");
      };
      let old = mem::replace(&mut e.val, val);
      list.move_to_front(id);
      drop(inner);
      drop(old);
      return true;
    }

    let id = list.push_front(Entry {
      key: key.clone(),
      val,
    });
    index.insert(key, id);

    // With cap 0 the back is the entry just pushed
    // 容量为 0 时尾部就是刚插入的条目
    let evicted = if list.len() > self.cap {
      list.back().and_then(|back| list.remove(back))
    } else {
      None
    };
    if let Some(e) = &evicted {
      index.remove(&e.key);
    }
    drop(inner);

    if evicted.is_some() {
      trace!("lru evict, cap {}", self.cap);
    }
    false
  }

  /// Get a clone of the value and mark it most recently used
  /// 获取值的克隆，并标记为最近使用
  pub fn get<Q>(&self, key: &Q) -> Option<V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    V: Clone,
  {
    let mut inner = self.inner.lock();
    let Inner { index, list } = &mut *inner;
    let &id = index.get(key)?;
    list.move_to_front(id);
    list.get(id).map(|e| e.val.clone())
  }

  /// Drop all entries
  /// 清空所有条目
  pub fn clear(&self) {
    let fresh = Inner::with_capacity(self.cap);
    let old = mem::replace(&mut *self.inner.lock(), fresh);
    debug!("lru clear, {} entries dropped", old.list.len());
  }

  /// Keys from most to least recently used, O(n)
  /// 从最近到最久使用的键，O(n)
  pub fn keys(&self) -> Vec<K> {
    let inner = self.inner.lock();
    inner.list.iter().map(|e| e.key.clone()).collect()
  }
}

impl<K: Hash + Eq + Clone, V: Clone> Cache<K, V> for Lru<K, V> {
  #[inline(always)]
  fn get<Q>(&self, key: &Q) -> Option<V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    Lru::get(self, key)
  }

  #[inline(always)]
  fn set(&self, key: K, val: V) -> bool {
    Lru::set(self, key, val)
  }

  #[inline(always)]
  fn clear(&self) {
    Lru::clear(self);
  }
}
