use date_bean_encoder::config::toml_config::{LogFormat, TimeZoneSetting, TomlConfig};
use date_bean_encoder::{run_conversion, Conversion, DateBean, EncoderError, EncoderOptions, OverflowPolicy};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_settings_file_drives_conversion() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(
            br#"
[encoder]
time_zone = "-05:00"
overflow = "lenient"

[logging]
format = "compact"
"#,
        )
        .unwrap();

    let file = TomlConfig::from_file(temp_file.path()).unwrap();
    let options = EncoderOptions::from_sources(Some(&file), None, None, false).unwrap();
    assert_eq!(options.log_format, LogFormat::Compact);

    let out = run_conversion(
        &options,
        &Conversion::Decode(Some(DateBean::new("32", "12", "2019"))),
    )
    .unwrap();
    assert_eq!(out, "2020-01-01T00:00:00-05:00");

    let out = run_conversion(
        &options,
        &Conversion::Encode(Some("2020-01-01T03:00:00Z".to_string())),
    )
    .unwrap();
    assert_eq!(out, r#"{"day":"31","month":"12","year":"2019"}"#);
}

#[test]
fn test_flag_overrides_file_policy() {
    let file = TomlConfig::from_toml_str("[encoder]\ntime_zone = \"utc\"\n").unwrap();
    let options =
        EncoderOptions::from_sources(Some(&file), None, Some(OverflowPolicy::Strict), false).unwrap();

    let err = run_conversion(
        &options,
        &Conversion::Decode(Some(DateBean::new("31", "4", "2019"))),
    )
    .unwrap_err();
    assert!(matches!(err, EncoderError::InvalidDateField { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_missing_settings_file_is_config_error() {
    let err = TomlConfig::from_file("/nonexistent/date-bean.toml").unwrap_err();
    assert!(matches!(err, EncoderError::IoError(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_time_zone_display_round_trips_through_parse() {
    for raw in ["local", "utc", "+09:00", "-03:30"] {
        let setting: TimeZoneSetting = raw.parse().unwrap();
        let again: TimeZoneSetting = setting.to_string().parse().unwrap();
        assert_eq!(setting, again);
    }
}
