use std::fs;
use std::path::Path;

use log::debug;

use crate::config::types::MigrationConfig;
use crate::migrate::MigrateError;

/// Load the migration configuration.
///
/// With no file the embedded defaults (the full Bagery inventory) are
/// used; a YAML file overrides individual fields.
pub fn load_config(config_file: Option<&Path>) -> Result<MigrationConfig, MigrateError> {
    let config = match config_file {
        None => {
            debug!("No configuration file given, using embedded defaults");
            MigrationConfig::default()
        }
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            let text = fs::read_to_string(path).map_err(|e| {
                MigrateError::Config(format!("failed to read {}: {}", path.display(), e))
            })?;
            serde_yaml::from_str(&text).map_err(|e| {
                MigrateError::Config(format!("failed to parse {}: {}", path.display(), e))
            })?
        }
    };

    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &MigrationConfig) -> Result<(), MigrateError> {
    if config.pages.is_empty() {
        return Err(MigrateError::Config("page list is empty".to_string()));
    }
    if config.legacy_brand.trim().is_empty() || config.new_brand.trim().is_empty() {
        return Err(MigrateError::Config(
            "brand tokens must be non-empty".to_string(),
        ));
    }
    if config.pages_dir.trim().is_empty() {
        return Err(MigrateError::Config("pages_dir must be non-empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_no_file() {
        let config = load_config(None).unwrap();
        assert_eq!(config.home_page, "index.html");
    }

    #[test]
    fn test_partial_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pages:\n  - one.html\n  - two.html\nnew_brand: Acme").unwrap();
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.pages, vec!["one.html", "two.html"]);
        assert_eq!(config.new_brand, "Acme");
        // untouched fields keep their defaults
        assert_eq!(config.home_page, "index.html");
    }

    #[test]
    fn test_empty_page_list_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pages: []").unwrap();
        assert!(load_config(Some(file.path())).is_err());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = load_config(Some(Path::new("/no/such/config.yml"))).unwrap_err();
        assert!(matches!(err, MigrateError::Config(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not_a_field: true").unwrap();
        assert!(load_config(Some(file.path())).is_err());
    }
}
