//! Resized image preview entries
//! 缩放图片预览条目

use std::{fmt, str::FromStr};

use bytes::Bytes;

use crate::{Error, Lru};

/// Preview cache keyed by [`key`]
/// 以 [`key`] 为键的预览缓存
pub type PreviewLru = Lru<String, Preview>;

/// Cache key for a source url at a target size
/// 源地址在目标尺寸下的缓存键
#[inline]
pub fn key(url: &str, width: u32, height: u32) -> String {
  format!("{url}:{width}:{height}")
}

/// Encoded image format
/// 编码图片格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
  Jpeg,
  Png,
}

impl Format {
  /// Response content type
  /// 响应内容类型
  pub const fn mime(self) -> &'static str {
    match self {
      Self::Jpeg => "image/jpeg",
      Self::Png => "image/png",
    }
  }

  pub const fn name(self) -> &'static str {
    match self {
      Self::Jpeg => "jpeg",
      Self::Png => "png",
    }
  }
}

impl FromStr for Format {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Error> {
    if s.eq_ignore_ascii_case("jpeg") || s.eq_ignore_ascii_case("jpg") {
      Ok(Self::Jpeg)
    } else if s.eq_ignore_ascii_case("png") {
      Ok(Self::Png)
    } else {
      Err(Error::Format(s.to_owned()))
    }
  }
}

impl fmt::Display for Format {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Resized image ready to serve, cheap to clone
/// 可直接返回的缩放图片，克隆廉价
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preview {
  pub format: Format,
  pub body: Bytes,
}

impl Preview {
  #[inline]
  pub fn new(format: Format, body: impl Into<Bytes>) -> Self {
    Self {
      format,
      body: body.into(),
    }
  }

  #[inline(always)]
  pub fn mime(&self) -> &'static str {
    self.format.mime()
  }
}
