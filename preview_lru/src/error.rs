//! Error definitions / 错误定义

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid cache capacity {0} / 无效的缓存容量")]
  InvalidCap(i64),

  #[error("parse cache capacity {0:?} / 缓存容量解析失败")]
  ParseCap(String),

  #[error("unsupported image format {0:?} / 不支持的图片格式")]
  Format(String),
}

pub type Result<T> = std::result::Result<T, Error>;
