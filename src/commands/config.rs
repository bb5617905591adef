//! Effective configuration display

use anyhow::{Context, Result};

use crate::core::{default_config_path, CardConfig};

/// Renders the effective config as TOML (with its file location) or JSON
pub fn render_config(config: &CardConfig, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(config).context("Failed to serialize config");
    }

    let body = toml::to_string_pretty(config).context("Failed to serialize config")?;
    let location = match default_config_path() {
        Some(path) => format!("# {}\n", path.display()),
        None => String::new(),
    };
    Ok(format!("{location}{body}"))
}

/// Handles the config command
pub fn handle_config_command(config: &CardConfig, json: bool) -> Result<()> {
    println!("{}", render_config(config, json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_output_parses_back() {
        let config = CardConfig {
            left: "Goku".to_string(),
            total_votes: 42,
            ..CardConfig::default()
        };
        let rendered = render_config(&config, false).unwrap();
        let parsed = CardConfig::from_toml(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_json_output() {
        let rendered = render_config(&CardConfig::default(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["total_votes"], 20000);
        assert_eq!(value["time_left"]["days"], 3);
        assert_eq!(value["allow_revote_on_dismiss"], false);
    }
}
