use config::{Config, ConfigError, File, FileFormat};
use shared_types::ParserSettings;
use std::path::{Path, PathBuf};

/// Load parser settings.
///
/// An explicit path must exist. Without one, the default config file is used
/// when present and built-in defaults otherwise. Returns the file actually read.
pub fn load_settings(
    explicit: Option<&Path>,
) -> Result<(ParserSettings, Option<PathBuf>), ConfigError> {
    let config_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let default_path = get_config_path();
            if !default_path.exists() {
                return Ok((ParserSettings::default(), None));
            }
            default_path
        }
    };

    let builder = Config::builder()
        .add_source(File::from(config_path.clone()).format(FileFormat::Toml))
        .build()?;

    let settings: ParserSettings = builder.try_deserialize()?;
    Ok((settings, Some(config_path)))
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("card-parser").join("config.toml")
    } else {
        PathBuf::from("card-parser.toml")
    }
}
