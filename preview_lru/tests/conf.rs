use std::{env, process::Command};

use aok::{OK, Void};
use log::info;
use preview_lru::{
  Conf, Config, Error, Format, Lru, Preview, PreviewLru,
  conf::{ENV_CAP, default},
  preview,
};

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

#[test]
fn test_conf() -> Void {
  info!("> 配置项");

  assert_eq!(Config::default().cap, default::CAP);
  let none: &[Conf] = &[];
  assert_eq!(Config::try_from(none)?.cap, default::CAP);

  // Last option wins
  // 后面的配置项覆盖前面的
  let config = Config::try_from(&[Conf::Cap(3), Conf::Cap(7)][..])?;
  assert_eq!(config.cap, 7);

  let config = Config::try_from(&[Conf::Cap(0)][..])?;
  assert_eq!(config.cap, 0);

  assert!(matches!(
    Config::try_from(&[Conf::Cap(-1)][..]),
    Err(Error::InvalidCap(-1))
  ));
  OK
}

#[test]
fn test_negative_cap_rejected() -> Void {
  info!("> 负容量在构造时报错");

  assert!(matches!(
    Lru::<String, i32>::try_new(-5),
    Err(Error::InvalidCap(-5))
  ));
  assert!(Lru::<String, i32>::with_conf(&[Conf::Cap(-1)]).is_err());

  let cache = Lru::<String, i32>::try_new(2)?;
  assert_eq!(cache.cap(), 2);

  let cache = Lru::<String, i32>::with_conf(&[Conf::Cap(4)])?;
  assert_eq!(cache.cap(), 4);
  OK
}

#[test]
fn test_from_var() -> Void {
  info!("> {ENV_CAP} 解析");

  assert_eq!(Config::from_var(None)?.cap, default::CAP);
  assert_eq!(Config::from_var(Some("42"))?.cap, 42);
  assert_eq!(Config::from_var(Some(" 8 \n"))?.cap, 8);
  assert!(matches!(
    Config::from_var(Some("ten")),
    Err(Error::ParseCap(s)) if s == "ten"
  ));
  assert!(matches!(
    Config::from_var(Some("-3")),
    Err(Error::InvalidCap(-3))
  ));

  // Process env is not touched by tests, only check it resolves
  // 测试不修改进程环境变量，只检查能解析
  if std::env::var_os(ENV_CAP).is_none() {
    assert_eq!(Config::from_env()?, Config::default());
  }
  OK
}

// Set in the child run of test_from_env
// 在 test_from_env 的子进程中设置
const ENV_CHILD: &str = "PREVIEW_LRU_TEST_CHILD";

#[test]
fn test_from_env() -> Void {
  // Child: the parent already put LRU_CACHE_SIZE in our env
  // 子进程：父进程已设置 LRU_CACHE_SIZE
  if env::var_os(ENV_CHILD).is_some() {
    let var = env::var(ENV_CAP)?;
    let r = Config::from_env();
    match var.as_str() {
      "7" => assert_eq!(r?.cap, 7),
      "0" => assert_eq!(r?.cap, 0),
      "-2" => assert!(matches!(r, Err(Error::InvalidCap(-2)))),
      _ => assert!(matches!(r, Err(Error::ParseCap(s)) if s == var)),
    }
    return OK;
  }

  info!("> {ENV_CAP} 环境变量");

  // Process env is never mutated here, each value runs in a child
  // 不修改本进程环境变量，每个取值在子进程中运行
  let exe = env::current_exe()?;
  for var in ["7", "0", "-2", "ten"] {
    let out = Command::new(&exe)
      .arg("test_from_env")
      .arg("--exact")
      .arg("--nocapture")
      .env(ENV_CHILD, "1")
      .env(ENV_CAP, var)
      .output()?;
    assert!(
      out.status.success(),
      "{ENV_CAP}={var}: {}",
      String::from_utf8_lossy(&out.stderr)
    );
  }
  OK
}

#[test]
fn test_error_display() -> Void {
  assert_eq!(
    Error::InvalidCap(-1).to_string(),
    "invalid cache capacity -1 / 无效的缓存容量"
  );
  assert!(Error::Format("gif".into()).to_string().contains("\"gif\""));
  OK
}

#[test]
fn test_format() -> Void {
  info!("> 图片格式");

  assert_eq!("jpeg".parse::<Format>()?, Format::Jpeg);
  assert_eq!("jpg".parse::<Format>()?, Format::Jpeg);
  assert_eq!("PNG".parse::<Format>()?, Format::Png);
  assert!(matches!("gif".parse::<Format>(), Err(Error::Format(s)) if s == "gif"));

  assert_eq!(Format::Jpeg.mime(), "image/jpeg");
  assert_eq!(Format::Png.mime(), "image/png");
  assert_eq!(Format::Png.to_string(), "png");
  OK
}

#[test]
fn test_preview_cache() -> Void {
  info!("> 预览缓存");

  let url = "raw.githubusercontent.com/x/y/_gopher_original_1024x504.jpg";
  let k = preview::key(url, 300, 200);
  assert_eq!(k, format!("{url}:300:200"));
  assert_ne!(k, preview::key(url, 200, 300));

  let cache: PreviewLru = Lru::new(2);
  let img = Preview::new(Format::Jpeg, &b"\xff\xd8\xff"[..]);
  assert!(!cache.set(k.clone(), img.clone()));

  let hit = cache.get(&k);
  assert_eq!(hit.as_ref(), Some(&img));
  assert_eq!(hit.map(|p| p.mime()), Some("image/jpeg"));

  assert_eq!(cache.get(&preview::key(url, 200, 300)), None);
  OK
}
