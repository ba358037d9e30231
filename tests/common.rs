#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn mt() -> Command {
    cargo_bin_cmd!("mushtrace")
}

/// Fresh, empty directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("mushtrace_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Isolated file set for one CLI test: config, log, settings and export folder.
pub struct Sandbox {
    pub dir: PathBuf,
    pub config: String,
    pub log: String,
    pub settings: String,
    pub exports: PathBuf,
}

impl Sandbox {
    pub fn new(name: &str) -> Self {
        let dir = temp_dir(name);
        let s = |f: &str| dir.join(f).to_string_lossy().to_string();
        Self {
            config: s("mushtrace.conf"),
            log: s("logs.json"),
            settings: s("settings.json"),
            exports: dir.join("exports"),
            dir,
        }
    }

    /// Command with the sandbox files already passed as global options.
    pub fn cmd(&self) -> Command {
        let mut c = mt();
        c.env_remove("USE_MOCK_SQUARE").args([
            "--config",
            &self.config,
            "--log-file",
            &self.log,
            "--settings",
            &self.settings,
        ]);
        c
    }

    pub fn add(&self, mushroom: &str, box_number: &str, pack: &str, ship: &str) {
        self.cmd()
            .args(["add", mushroom, box_number, pack, ship])
            .assert()
            .success();
    }

    pub fn use_export_folder(&self) {
        let arg = format!("export_folder={}", self.exports.display());
        self.cmd()
            .args(["settings", "--set", &arg])
            .assert()
            .success();
    }

    pub fn read_log(&self) -> Vec<String> {
        let content = fs::read_to_string(&self.log).expect("read log");
        serde_json::from_str(&content).expect("log is a JSON list")
    }
}
