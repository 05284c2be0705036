//! Configuration layering across file and environment.

use camino::Utf8Path;
use rstest::rstest;
use task_tracker::config::{ConfigError, TrackerConfig};

use super::helpers::{EnvVarGuard, ScratchDir, scratch};

#[rstest]
fn file_values_apply_over_defaults(scratch: ScratchDir) -> Result<(), eyre::Report> {
    let _env = EnvVarGuard::set_many(&[]);
    std::fs::create_dir_all(scratch.path())?;
    let file = scratch.path().join("tracker.toml");
    std::fs::write(
        &file,
        "data_dir = \"/srv/tracker\"\n[upload]\npublic_prefix = \"/media\"\n",
    )?;

    let config = TrackerConfig::from_figment(&TrackerConfig::figment(Some(&file)))?;

    assert_eq!(config.data_dir.as_deref(), Some(Utf8Path::new("/srv/tracker")));
    assert_eq!(config.upload.public_prefix, "/media");
    assert_eq!(config.listen_address, TrackerConfig::default().listen_address);
    Ok(())
}

#[rstest]
fn environment_overrides_file(scratch: ScratchDir) -> Result<(), eyre::Report> {
    let _env = EnvVarGuard::set_many(&[
        ("TASK_TRACKER_LISTEN_ADDRESS", "127.0.0.1:9100"),
        ("TASK_TRACKER_NOTIFICATION__MAX_ATTEMPTS", "7"),
    ]);
    std::fs::create_dir_all(scratch.path())?;
    let file = scratch.path().join("tracker.toml");
    std::fs::write(&file, "listen_address = \"127.0.0.1:9000\"\n")?;

    let config = TrackerConfig::from_figment(&TrackerConfig::figment(Some(&file)))?;

    assert_eq!(config.listen_address.port(), 9100);
    assert_eq!(config.notification.max_attempts, 7);
    Ok(())
}

#[rstest]
fn invalid_environment_values_are_rejected() {
    let _env = EnvVarGuard::set_many(&[("TASK_TRACKER_UPLOAD__MAX_BYTES", "0")]);

    let result = TrackerConfig::from_figment(&TrackerConfig::figment(None));

    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}
