use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch directory holding an apkinfo home and an aapt base directory.
/// Everything is removed when the guard is dropped.
pub struct TestHomeGuard {
    temp_dir: TempDir,
}

impl TestHomeGuard {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create test home directory");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Value for `APKINFO_HOME`
    pub fn apkinfo_home(&self) -> PathBuf {
        self.path().join(".apkinfo")
    }

    /// Directory passed as `--aapt-dir`
    pub fn base_dir(&self) -> PathBuf {
        self.path().join("dist")
    }

    pub fn setup_apkinfo_structure(&self) -> &Self {
        fs::create_dir_all(self.apkinfo_home()).expect("Failed to create .apkinfo directory");
        fs::create_dir_all(self.base_dir()).expect("Failed to create dist directory");
        self
    }

    pub fn write_config(&self, contents: &str) {
        fs::create_dir_all(self.apkinfo_home()).expect("Failed to create .apkinfo directory");
        fs::write(self.apkinfo_home().join("config.toml"), contents)
            .expect("Failed to write config.toml");
    }
}

impl Default for TestHomeGuard {
    fn default() -> Self {
        Self::new()
    }
}
