//! Cache configuration
//! 缓存配置

use std::env::{self, VarError};

use log::{debug, warn};

use crate::{Error, Result};

/// Env var overriding the capacity
/// 覆盖容量的环境变量
pub const ENV_CAP: &str = "LRU_CACHE_SIZE";

/// Cache configuration options
/// 缓存配置选项
#[derive(Clone, Copy, Debug)]
pub enum Conf {
  /// Max entry count, negative is rejected
  /// 最大条目数，负数报错
  Cap(i64),
}

/// Resolved configuration
/// 解析后的配置
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
  /// Max entry count
  /// 最大条目数
  pub cap: usize,
}

impl Default for Config {
  fn default() -> Self {
    Self { cap: default::CAP }
  }
}

impl TryFrom<&[Conf]> for Config {
  type Error = Error;

  fn try_from(conf_li: &[Conf]) -> Result<Self> {
    let mut config = Self::default();
    for &conf in conf_li {
      match conf {
        Conf::Cap(v) => config.cap = check_cap(v)?,
      }
    }
    Ok(config)
  }
}

impl Config {
  /// Read `LRU_CACHE_SIZE`, default when unset
  /// 读取 `LRU_CACHE_SIZE`，未设置时使用默认值
  pub fn from_env() -> Result<Self> {
    match env::var(ENV_CAP) {
      Ok(v) => Self::from_var(Some(&v)),
      Err(VarError::NotPresent) => Self::from_var(None),
      Err(VarError::NotUnicode(v)) => Err(Error::ParseCap(v.to_string_lossy().into_owned())),
    }
  }

  /// Parse an optional capacity string
  /// 解析可选的容量字符串
  pub fn from_var(var: Option<&str>) -> Result<Self> {
    let Some(s) = var else {
      debug!("{ENV_CAP} not set, cap {}", default::CAP);
      return Ok(Self::default());
    };
    let v: i64 = s.trim().parse().map_err(|_| {
      warn!("{ENV_CAP}={s:?} is not an integer");
      Error::ParseCap(s.to_owned())
    })?;
    Self::try_from(&[Conf::Cap(v)][..])
  }
}

/// Check a signed capacity
/// 校验有符号容量
pub(crate) fn check_cap(v: i64) -> Result<usize> {
  usize::try_from(v).map_err(|_| Error::InvalidCap(v))
}

/// Default values
/// 默认值
pub mod default {
  /// Default max entry count
  /// 默认最大条目数
  pub const CAP: usize = 100;
}
