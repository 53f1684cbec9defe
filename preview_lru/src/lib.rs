//! Thread-safe LRU cache for resized image previews
//! 缩放图片预览的线程安全 LRU 缓存
//!
//! # Features
//!
//! - `no`: `NoCache` - zero overhead no-op
//!
//! # 特性
//!
//! - `no`：`NoCache` - 零开销空操作

#![cfg_attr(docsrs, feature(doc_cfg))]

mod cache;
pub mod conf;
mod error;
mod lru;
pub mod preview;

#[cfg(feature = "no")]
mod no;

pub use cache::Cache;
pub use conf::{Conf, Config};
pub use error::{Error, Result};
pub use lru::Lru;
#[cfg(feature = "no")]
pub use no::NoCache;
pub use preview::{Format, Preview, PreviewLru};
