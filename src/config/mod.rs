mod loader;
mod model;
mod validation;

pub use loader::{FileSuiteLoader, LoadResult, SUITE_FILE_NAME, SuiteLoader};
pub use model::{CheckConfig, CheckKindConfig, GroupConfig, PolicyKind, SUITE_VERSION, SuiteConfig};
pub use validation::validate_suite_semantics;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suite_config_default_is_empty() {
        let config = SuiteConfig::default();
        assert!(config.version.is_none());
        assert!(config.groups.is_empty());
    }

    #[test]
    fn group_policy_defaults_to_strict() {
        let config: SuiteConfig = toml::from_str(
            r#"
[[group]]
name = "Docs"

[[group.check]]
kind = "exists"
target = "todo.md"
"#,
        )
        .unwrap();
        assert_eq!(config.groups[0].policy, PolicyKind::Strict);
        assert_eq!(config.groups[0].checks[0].kind, CheckKindConfig::Exists);
    }
}
