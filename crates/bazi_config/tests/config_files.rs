//! File-level loading behaviour.

use std::fs;
use std::path::PathBuf;

use bazi_base::Locale;
use bazi_config::{BaziConfig, ConfigError};

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("bazi_config_{}_{name}", std::process::id()))
}

#[test]
fn explicit_file_is_loaded() {
    let path = scratch("ok.toml");
    fs::write(&path, "[luck]\ncycle_count = 10\n[display]\nlocale = \"en\"\n").unwrap();
    let config = BaziConfig::load(Some(&path)).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(config.luck.cycle_count, 10);
    assert_eq!(config.display.locale, Locale::En);
}

#[test]
fn explicit_missing_file_is_an_error() {
    let path = scratch("missing.toml");
    let err = BaziConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn explicit_unparsable_file_is_an_error() {
    let path = scratch("bad.toml");
    fs::write(&path, "cycle_count = = 3").unwrap();
    let err = BaziConfig::load(Some(&path)).unwrap_err();
    fs::remove_file(&path).unwrap();
    assert!(matches!(err, ConfigError::Parse { .. }));
}
