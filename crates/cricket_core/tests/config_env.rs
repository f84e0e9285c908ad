//! `CRICKET_CONFIG_PATH` is process-wide, so every case that touches it runs
//! here, sequentially, inside a single test.

use cricket_core::api::{build_squad_json_default, SquadResponse};
use cricket_core::config::CONFIG_PATH_ENV;
use cricket_core::{ConfigError, CoreError, ModelConfig};
use std::env;
use std::io::Write;

const EMPTY_SQUAD: &str = r#"{"entries": []}"#;

#[test]
fn test_config_path_env_errors_surface_to_callers() {
    // Unset: defaults
    env::remove_var(CONFIG_PATH_ENV);
    assert_eq!(ModelConfig::from_env().unwrap(), ModelConfig::default());
    let response: SquadResponse =
        serde_json::from_str(&build_squad_json_default(EMPTY_SQUAD).unwrap()).unwrap();
    assert_eq!(response.capacity, 11);

    // Blank: defaults
    env::set_var(CONFIG_PATH_ENV, "   ");
    assert_eq!(ModelConfig::from_env().unwrap(), ModelConfig::default());

    // Missing file
    let dir = tempfile::tempdir().unwrap();
    env::set_var(CONFIG_PATH_ENV, dir.path().join("cricket.json"));
    assert!(matches!(ModelConfig::from_env(), Err(ConfigError::Io(_))));
    assert!(matches!(
        build_squad_json_default(EMPTY_SQUAD),
        Err(CoreError::Config(ConfigError::Io(_)))
    ));

    // Out-of-range value
    let mut invalid = tempfile::NamedTempFile::new().unwrap();
    write!(invalid, r#"{{"roster_capacity": 0}}"#).unwrap();
    env::set_var(CONFIG_PATH_ENV, invalid.path());
    assert!(matches!(
        build_squad_json_default(EMPTY_SQUAD),
        Err(CoreError::Config(ConfigError::Invalid(_)))
    ));

    // Valid file is picked up on the next call
    let mut valid = tempfile::NamedTempFile::new().unwrap();
    write!(valid, r#"{{"roster_capacity": 3}}"#).unwrap();
    env::set_var(CONFIG_PATH_ENV, valid.path());
    let response: SquadResponse =
        serde_json::from_str(&build_squad_json_default(EMPTY_SQUAD).unwrap()).unwrap();
    assert_eq!(response.capacity, 3);
    assert_eq!(response.roster_size, 0);

    env::remove_var(CONFIG_PATH_ENV);
}
