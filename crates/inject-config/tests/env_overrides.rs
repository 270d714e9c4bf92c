use std::path::Path;

use figment::Jail;
use inject_config::{InjectConfig, PROJECT_CONFIG_FILE};

#[test]
fn env_sets_walk_marker() {
    Jail::expect_with(|jail| {
        jail.set_env("INJECT_FIELD_WALK__MARKER", "_gen.go");

        let config = InjectConfig::load(Path::new(".")).expect("config loads");
        assert_eq!(config.walk.marker, "_gen.go");
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            PROJECT_CONFIG_FILE,
            r#"
[walk]
respect_gitignore = false
marker = ".from_file"
"#,
        )?;
        jail.set_env("INJECT_FIELD_WALK__RESPECT_GITIGNORE", "true");

        let config = InjectConfig::load(Path::new(".")).expect("config loads");
        assert!(config.walk.respect_gitignore);
        assert_eq!(config.walk.marker, ".from_file");
        Ok(())
    });
}
