//! Bundled configuration templates, embedded at build time.

use stylecast_pipeline::ModuleKind;

use crate::commands::ConfigType;

pub fn template(kind: ModuleKind, config_type: ConfigType) -> &'static str {
    match (kind, config_type) {
        (ModuleKind::Colors, ConfigType::Base) => include_str!("../assets/colors-base.json"),
        (ModuleKind::Colors, ConfigType::Example) => include_str!("../assets/colors-example.json"),
        (ModuleKind::Typography, ConfigType::Base) => {
            include_str!("../assets/typography-base.json")
        }
        (ModuleKind::Typography, ConfigType::Example) => {
            include_str!("../assets/typography-example.json")
        }
        (ModuleKind::Spacing, ConfigType::Base) => include_str!("../assets/spacing-base.json"),
        (ModuleKind::Spacing, ConfigType::Example) => {
            include_str!("../assets/spacing-example.json")
        }
        (ModuleKind::Layout, ConfigType::Base) => include_str!("../assets/layout-base.json"),
        (ModuleKind::Layout, ConfigType::Example) => include_str!("../assets/layout-example.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylecast_pipeline::{Compiler, ModuleConfig};

    #[test]
    fn test_every_template_is_valid_json() {
        for kind in ModuleKind::ALL {
            for config_type in [ConfigType::Base, ConfigType::Example] {
                let text = template(kind, config_type);
                let parsed: Result<ModuleConfig, _> = serde_json::from_str(text);
                assert!(
                    parsed.is_ok(),
                    "template {}/{} does not parse",
                    kind,
                    config_type
                );
            }
        }
    }

    #[test]
    fn test_every_template_compiles() {
        let mut compiler = Compiler::new();
        for kind in ModuleKind::ALL {
            for config_type in [ConfigType::Base, ConfigType::Example] {
                let config: ModuleConfig =
                    serde_json::from_str(template(kind, config_type)).unwrap();
                let artifacts = compiler.compile(kind, &config).unwrap();
                assert!(!artifacts.is_empty());
            }
        }
        assert!(compiler.take_warnings().is_empty());
    }
}
