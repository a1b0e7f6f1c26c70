use super::*;

#[test]
fn default_config_has_expected_values() {
    let mut config = Config::default();
    config.validate();

    assert_eq!(config.startup.codec, CodecKind::Native);
    assert_eq!(config.startup.tool_timeout_secs, 10);
    assert!(config.startup.user_dir.is_none());
    assert!(!config.log.enabled);
}

#[test]
fn partial_toml_uses_defaults_for_missing_sections() {
    // Arrange
    let toml_str = "[log]\nenabled = true\n";

    // Act
    let config: Config = toml::from_str(toml_str).unwrap();

    // Assert
    assert!(config.log.enabled);
    assert_eq!(config.log.level, "info");
    assert_eq!(config.startup.codec, CodecKind::Native);
}

#[test]
fn codec_kind_parses_from_lowercase_strings() {
    let config: Config = toml::from_str("[startup]\ncodec = \"powershell\"\n").unwrap();

    assert_eq!(config.startup.codec, CodecKind::Powershell);
}

#[test]
fn validate_clamps_tool_timeout() {
    let mut config: Config = toml::from_str("[startup]\ntool_timeout_secs = 0\n").unwrap();
    config.validate();
    assert_eq!(config.startup.tool_timeout_secs, 1);

    let mut config: Config = toml::from_str("[startup]\ntool_timeout_secs = 99999\n").unwrap();
    config.validate();
    assert_eq!(config.startup.tool_timeout_secs, 300);
}

#[test]
fn directory_overrides_parse_as_paths() {
    let toml_str = "[startup]\nuser_dir = 'C:\\Custom\\Startup'\n";

    let config: Config = toml::from_str(toml_str).unwrap();

    assert_eq!(
        config.startup.user_dir.as_deref(),
        Some(std::path::Path::new("C:\\Custom\\Startup"))
    );
}

#[test]
fn generated_template_parses_back() {
    // The commented template must stay in sync with the Config types.
    let config: Config = toml::from_str(&template::generate_config()).unwrap();

    assert_eq!(config.startup.codec, CodecKind::Native);
    assert_eq!(config.startup.tool_timeout_secs, 10);
    assert!(!config.log.enabled);
}
