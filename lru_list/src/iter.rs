//! Front-to-back iterator
//! 从头到尾的迭代器

use crate::list::Slot;

/// Iterator over payloads, front (most recent) first
/// 载荷迭代器，从头部（最近使用）开始
///
/// `rev()` walks the `prev` chain from the back.
/// `rev()` 沿 `prev` 链从尾部遍历。
pub struct Iter<'a, T> {
  pub(crate) slots: &'a [Slot<T>],
  pub(crate) head: Option<usize>,
  pub(crate) tail: Option<usize>,
  pub(crate) remain: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  #[inline]
  fn next(&mut self) -> Option<&'a T> {
    if self.remain == 0 {
      return None;
    }
    let slot = self.slots.get(self.head?)?;
    self.head = slot.next;
    self.remain -= 1;
    slot.val.as_ref()
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remain, Some(self.remain))
  }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
  #[inline]
  fn next_back(&mut self) -> Option<&'a T> {
    if self.remain == 0 {
      return None;
    }
    let slot = self.slots.get(self.tail?)?;
    self.tail = slot.prev;
    self.remain -= 1;
    slot.val.as_ref()
  }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
