use std::io::Write;
use std::sync::{Mutex, OnceLock};

use super::*;

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn clear_env() {
    let vars = [
        "GRADGUARD_CONFIG_PATH",
        "GRADGUARD_BASELINE_PATH",
        "GRADGUARD_MODEL_PATH",
        "GRADGUARD_LABEL_COLUMN",
    ];
    for v in vars {
        std::env::remove_var(v);
    }
}

fn temp_config(contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!(
        "gradguard-predictor-config-{}.toml",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default()
    ));
    let mut f = std::fs::File::create(&path).expect("create file");
    f.write_all(contents.as_bytes()).expect("write file");
    path
}

#[test]
fn defaults_point_at_bundled_artifacts() {
    let _guard = env_lock().lock().expect("env lock");
    clear_env();

    let cfg = PredictorConfig::load().expect("load config");
    assert_eq!(
        cfg.baseline_path,
        std::path::PathBuf::from("./student_feature_corr.csv")
    );
    assert_eq!(cfg.model_path, std::path::PathBuf::from("./model/classifier.json"));
    assert_eq!(cfg.label_column, "Status");
}

#[test]
fn file_config_is_loaded() {
    let _guard = env_lock().lock().expect("env lock");
    clear_env();

    let path = temp_config(
        "[artifacts]\nbaseline_path=\"/srv/gradguard/baseline.csv\"\nmodel_path=\"/srv/gradguard/classifier.json\"\nlabel_column=\"Outcome\"\n",
    );
    std::env::set_var("GRADGUARD_CONFIG_PATH", &path);

    let cfg = PredictorConfig::load().expect("load config");
    assert_eq!(
        cfg.baseline_path,
        std::path::PathBuf::from("/srv/gradguard/baseline.csv")
    );
    assert_eq!(
        cfg.model_path,
        std::path::PathBuf::from("/srv/gradguard/classifier.json")
    );
    assert_eq!(cfg.label_column, "Outcome");

    clear_env();
    let _ = std::fs::remove_file(path);
}

#[test]
fn env_overrides_win_over_file() {
    let _guard = env_lock().lock().expect("env lock");
    clear_env();

    let path = temp_config("[artifacts]\nbaseline_path=\"/srv/from-file.csv\"\n");
    std::env::set_var("GRADGUARD_CONFIG_PATH", &path);
    std::env::set_var("GRADGUARD_BASELINE_PATH", "/srv/from-env.csv");

    let cfg = PredictorConfig::load().expect("load config");
    assert_eq!(cfg.baseline_path, std::path::PathBuf::from("/srv/from-env.csv"));

    clear_env();
    let _ = std::fs::remove_file(path);
}

#[test]
fn empty_sections_keep_defaults() {
    let _guard = env_lock().lock().expect("env lock");
    clear_env();

    let mut cfg = PredictorConfig::default();
    let file_cfg: super::file::FileConfig = toml::from_str("").expect("parse empty config");
    cfg.apply_file_artifacts(file_cfg.artifacts);
    assert_eq!(cfg.label_column, "Status");
}

#[test]
fn blank_values_are_ignored() {
    let _guard = env_lock().lock().expect("env lock");
    clear_env();

    let mut cfg = PredictorConfig::default();
    let file_cfg: super::file::FileConfig =
        toml::from_str("[artifacts]\nlabel_column=\"  \"\n").expect("parse config");
    cfg.apply_file_artifacts(file_cfg.artifacts);
    assert_eq!(cfg.label_column, "Status");

    std::env::set_var("GRADGUARD_MODEL_PATH", "   ");
    cfg.apply_env_overrides();
    assert_eq!(cfg.model_path, std::path::PathBuf::from("./model/classifier.json"));
    clear_env();
}
