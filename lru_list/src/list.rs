//! Slot arena list
//! 槽位数组链表

use std::fmt;

use crate::{Id, Iter};

// Last version a slot can reach
// 槽位可达到的最大版本
const VER_MAX: u32 = u32::MAX;

/// Arena slot
/// 槽位
pub(crate) struct Slot<T> {
  // None while the slot sits on the free list
  // 位于空闲链表时为 None
  pub(crate) val: Option<T>,
  pub(crate) prev: Option<usize>,
  pub(crate) next: Option<usize>,
  ver: u32,
}

/// Doubly linked list ordered front to back
/// 从头到尾排序的双向链表
///
/// # Examples
/// ```
/// use lru_list::List;
///
/// let mut li = List::new();
/// let a = li.push_front("a");
/// li.push_front("b");
/// assert_eq!(li.iter().copied().collect::<Vec<_>>(), ["b", "a"]);
///
/// li.move_to_front(a);
/// assert_eq!(li.front().and_then(|id| li.get(id)), Some(&"a"));
/// ```
pub struct List<T> {
  slots: Vec<Slot<T>>,
  free: Vec<usize>,
  front: Option<usize>,
  back: Option<usize>,
  len: usize,
}

impl<T> Default for List<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> List<T> {
  /// Create empty list
  /// 创建空链表
  #[inline]
  pub const fn new() -> Self {
    Self {
      slots: Vec::new(),
      free: Vec::new(),
      front: None,
      back: None,
      len: 0,
    }
  }

  /// Create with room for `cap` nodes before reallocating
  /// 创建，预留 `cap` 个节点的空间
  #[inline]
  pub fn with_capacity(cap: usize) -> Self {
    Self {
      slots: Vec::with_capacity(cap),
      ..Self::new()
    }
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.len
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Most recently linked node
  /// 头部节点
  #[inline]
  pub fn front(&self) -> Option<Id> {
    self.front.map(|idx| self.id(idx))
  }

  /// Least recently linked node
  /// 尾部节点
  #[inline]
  pub fn back(&self) -> Option<Id> {
    self.back.map(|idx| self.id(idx))
  }

  /// Payload of a live node
  /// 获取存活节点的载荷
  #[inline]
  pub fn get(&self, id: Id) -> Option<&T> {
    let idx = self.live(id)?;
    self.slots[idx].val.as_ref()
  }

  #[inline]
  pub fn get_mut(&mut self, id: Id) -> Option<&mut T> {
    let idx = self.live(id)?;
    self.slots[idx].val.as_mut()
  }

  /// Insert at front
  /// 插入头部
  pub fn push_front(&mut self, val: T) -> Id {
    let idx = self.alloc(val);
    self.link_front(idx);
    self.len += 1;
    self.id(idx)
  }

  /// Insert at back
  /// 插入尾部
  pub fn push_back(&mut self, val: T) -> Id {
    let idx = self.alloc(val);
    self.link_back(idx);
    self.len += 1;
    self.id(idx)
  }

  /// Unlink node and return its payload, `None` if `id` is stale
  /// 摘除节点并返回载荷，`id` 失效时返回 None
  pub fn remove(&mut self, id: Id) -> Option<T> {
    let idx = self.live(id)?;
    self.unlink(idx);
    self.len -= 1;
    let slot = &mut self.slots[idx];
    // Never wraps: a slot reaching VER_MAX is retired, not reused
    // 不会回绕：版本达到 VER_MAX 的槽位退役，不再复用
    slot.ver += 1;
    let val = slot.val.take();
    if slot.ver < VER_MAX {
      self.free.push(idx);
    }
    val
  }

  /// Relink node at front, `false` if `id` is stale
  /// 将节点移到头部，`id` 失效时返回 false
  pub fn move_to_front(&mut self, id: Id) -> bool {
    let Some(idx) = self.live(id) else {
      return false;
    };
    if self.front != Some(idx) {
      self.unlink(idx);
      self.link_front(idx);
    }
    true
  }

  /// Walk front to back, `rev()` for back to front
  /// 从头到尾遍历，`rev()` 从尾到头
  #[inline]
  pub fn iter(&self) -> Iter<'_, T> {
    Iter {
      slots: &self.slots,
      head: self.front,
      tail: self.back,
      remain: self.len,
    }
  }

  #[inline(always)]
  fn id(&self, idx: usize) -> Id {
    Id {
      idx,
      ver: self.slots[idx].ver,
    }
  }

  #[inline]
  fn live(&self, id: Id) -> Option<usize> {
    let slot = self.slots.get(id.idx)?;
    (slot.ver == id.ver && slot.val.is_some()).then_some(id.idx)
  }

  fn alloc(&mut self, val: T) -> usize {
    if let Some(idx) = self.free.pop() {
      self.slots[idx].val = Some(val);
      return idx;
    }
    self.slots.push(Slot {
      val: Some(val),
      prev: None,
      next: None,
      ver: 0,
    });
    self.slots.len() - 1
  }

  // Leaves the slot with no neighbours
  // 摘除后槽位无前后邻居
  fn unlink(&mut self, idx: usize) {
    let slot = &mut self.slots[idx];
    let (prev, next) = (slot.prev.take(), slot.next.take());

    match prev {
      Some(p) => self.slots[p].next = next,
      None => self.front = next,
    }
    match next {
      Some(n) => self.slots[n].prev = prev,
      None => self.back = prev,
    }
  }

  fn link_front(&mut self, idx: usize) {
    let old = self.front;
    let slot = &mut self.slots[idx];
    slot.prev = None;
    slot.next = old;
    match old {
      Some(o) => self.slots[o].prev = Some(idx),
      None => self.back = Some(idx),
    }
    self.front = Some(idx);
  }

  fn link_back(&mut self, idx: usize) {
    let old = self.back;
    let slot = &mut self.slots[idx];
    slot.next = None;
    slot.prev = old;
    match old {
      Some(o) => self.slots[o].next = Some(idx),
      None => self.front = Some(idx),
    }
    self.back = Some(idx);
  }
}

impl<'a, T> IntoIterator for &'a List<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  #[inline]
  fn into_iter(self) -> Iter<'a, T> {
    self.iter()
  }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}
