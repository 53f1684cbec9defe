//! Doubly linked list over a slot arena
//! 基于槽位数组的双向链表
//!
//! # Complexity
//! 复杂度
//!
//! - push_front / push_back: O(1) amortized
//! - remove: O(1)
//! - move_to_front: O(1)
//! - front / back / len: O(1)
//!
//! Nodes live in a `Vec` of slots and link to each other by slot index.
//! Freed slots go on a free list and are reused by the next push.
//! Callers hold an [`Id`] (slot index + version); a removed node's `Id`
//! never resolves again, even after its slot is reused. A slot whose
//! version reaches `u32::MAX` is retired instead of reused.
//! 节点存于槽位 `Vec`，通过槽位下标互相链接。
//! 释放的槽位进入空闲链表，供下次插入复用。
//! 调用者持有 [`Id`]（槽位下标 + 版本号）；节点删除后其 `Id` 永不再解析，即使槽位已被复用。
//! 版本达到 `u32::MAX` 的槽位退役，不再复用。

#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
mod iter;
mod list;

pub use id::Id;
pub use iter::Iter;
pub use list::List;
