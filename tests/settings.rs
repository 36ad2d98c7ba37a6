use playbill::filter::{FilterMode, FilterTarget};
use playbill::settings::Settings;

#[test]
fn missing_file_yields_defaults() {
    let settings = Settings::load("no_such_playbill_config").expect("defaults");
    assert_eq!(settings.log.level, "info");
    assert!(settings.filter.include);
    assert!(settings.filter.people_view);
    assert_eq!(settings.filter.arrangement, 0);
}

#[test]
fn defaults_map_to_include_people_controls() {
    let settings = Settings::load("no_such_playbill_config").expect("defaults");
    let controls = settings.filter.controls();
    assert_eq!(controls.text, "");
    assert_eq!(controls.mode, FilterMode::Include);
    assert_eq!(controls.target, FilterTarget::People);
}

#[test]
fn file_values_override_defaults() {
    let path = std::env::temp_dir().join(format!("playbill_settings_{}.toml", std::process::id()));
    std::fs::write(
        &path,
        "[log]\nlevel = \"debug\"\n\n[filter]\ninclude = false\npeople_view = false\narrangement = 2\n",
    )
    .expect("write settings file");
    let name = path.to_str().expect("utf-8 path");
    let settings = Settings::load(name).expect("parse settings");
    std::fs::remove_file(&path).ok();
    assert_eq!(settings.log.level, "debug");
    assert_eq!(settings.filter.mode(), FilterMode::Exclude);
    assert_eq!(settings.filter.target(), FilterTarget::Shows);
    assert_eq!(settings.filter.arrangement, 2);
}

#[test]
fn malformed_file_is_a_config_error() {
    let path = std::env::temp_dir().join(format!("playbill_broken_{}.toml", std::process::id()));
    std::fs::write(&path, "[filter\ninclude = maybe").expect("write settings file");
    let name = path.to_str().expect("utf-8 path");
    let result = Settings::load(name);
    std::fs::remove_file(&path).ok();
    assert!(result.is_err());
}
