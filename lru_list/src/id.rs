//! Node handle / 节点句柄

/// Stable handle to a node
/// 节点的稳定句柄
///
/// Only valid for the [`List`](crate::List) that returned it, until the
/// node is removed.
/// 仅对返回它的 [`List`](crate::List) 有效，直到节点被删除。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Id {
  pub(crate) idx: usize,
  // Bumped each time the slot is freed
  // 槽位每次释放时递增
  pub(crate) ver: u32,
}

impl Id {
  /// Slot index / 槽位下标
  #[inline(always)]
  pub fn idx(&self) -> usize {
    self.idx
  }
}
