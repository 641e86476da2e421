//! Integration tests for layered configuration loading

use framesets::config::ConfigLoader;
use framesets::KnowledgeBase;
use std::sync::Mutex;
use tempfile::TempDir;

// Serializes tests that touch process environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn with_isolated_config_home<F: FnOnce()>(f: F) {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let original = std::env::var("XDG_CONFIG_HOME").ok();
    let config_home = TempDir::new().unwrap();
    std::env::set_var("XDG_CONFIG_HOME", config_home.path());

    f();

    match original {
        Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
        None => std::env::remove_var("XDG_CONFIG_HOME"),
    }
}

#[test]
fn test_workspace_file_configures_engine() {
    with_isolated_config_home(|| {
        let workspace = TempDir::new().unwrap();
        std::fs::write(
            workspace.path().join("framesets.toml"),
            r#"
[storage]
frames_dir = "kb"

[engine]
max_reference_depth = 1
"#,
        )
        .unwrap();

        let config = ConfigLoader::load(workspace.path()).unwrap();
        assert_eq!(
            config.storage.resolve_frames_dir(workspace.path()),
            workspace.path().join("kb")
        );

        let mut kb = KnowledgeBase::from_config(&config);
        for (frame, target) in [("a", "b"), ("b", "c")] {
            kb.registry_mut().create(frame);
            kb.registry_mut().create_slot(frame, "x");
            assert!(kb.create_reference(frame, "x"));
            assert!(kb.put_reference(frame, "x", target));
        }
        kb.registry_mut().create("c");
        kb.registry_mut().create_slot("c", "x");
        assert!(kb.resolve("b", "x").is_ok());
        assert!(kb.resolve("a", "x").is_err());
    });
}

#[test]
fn test_environment_overrides_workspace_file() {
    with_isolated_config_home(|| {
        let workspace = TempDir::new().unwrap();
        std::fs::write(
            workspace.path().join("framesets.toml"),
            "[engine]\nmax_reference_depth = 2\n",
        )
        .unwrap();

        std::env::set_var("FRAMESETS_ENGINE__MAX_REFERENCE_DEPTH", "7");
        let config = ConfigLoader::load(workspace.path());
        std::env::remove_var("FRAMESETS_ENGINE__MAX_REFERENCE_DEPTH");

        assert_eq!(config.unwrap().engine.max_reference_depth, Some(7));
    });
}

#[test]
fn test_global_file_is_layered_under_workspace() {
    with_isolated_config_home(|| {
        let global_dir = std::path::PathBuf::from(std::env::var("XDG_CONFIG_HOME").unwrap())
            .join("framesets");
        std::fs::create_dir_all(&global_dir).unwrap();
        std::fs::write(
            global_dir.join("config.toml"),
            "[engine]\nmax_reference_depth = 3\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let workspace = TempDir::new().unwrap();
        std::fs::write(
            workspace.path().join("framesets.toml"),
            "[logging]\nlevel = \"warn\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load(workspace.path()).unwrap();
        assert_eq!(config.engine.max_reference_depth, Some(3));
        assert_eq!(config.logging.level, "warn");
    });
}

#[test]
fn test_zero_depth_is_rejected() {
    with_isolated_config_home(|| {
        let workspace = TempDir::new().unwrap();
        let path = workspace.path().join("custom.toml");
        std::fs::write(&path, "[engine]\nmax_reference_depth = 0\n").unwrap();
        assert!(ConfigLoader::load_from_file(&path).is_err());
        assert!(ConfigLoader::load_from_file(&workspace.path().join("missing.toml")).is_err());
    });
}
