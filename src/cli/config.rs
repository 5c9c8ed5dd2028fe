use crate::config::EngineConfig;
use crate::dirs;
use crate::error::Result;

/// Execute the `config` command: print the effective configuration, and
/// write it to the config file when `save` is set.
pub fn execute(save: bool) -> Result<()> {
    let config = EngineConfig::load()?;
    print!("{}", render(&config)?);

    if save {
        config.save()?;
        println!("\nSaved to {}", dirs::config_path().display());
    }

    Ok(())
}

fn render(config: &EngineConfig) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_every_setting() {
        let rendered = render(&EngineConfig::default()).unwrap();
        for key in [
            "host",
            "port",
            "service_name",
            "model_path",
            "model_version",
            "normalize_input",
        ] {
            assert!(rendered.contains(key), "{key}");
        }
    }
}
