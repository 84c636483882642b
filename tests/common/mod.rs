//! Test environment for isolated sancert CLI testing.
//!
//! Provides an isolated temp directory with a site inventory file, plus a
//! helper to run the sancert binary against it.

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Inventory used by most CLI tests: two visible sites and a hidden one.
pub const SAMPLE_INVENTORY: &str = r#"
[[sites]]
id = 2
name = "example.com"
web_root = "/var/www/example"
hostnames = ["example.com", "www.example.com"]

[[sites]]
id = 5
name = "shop.example.com"
web_root = "/var/www/shop"
hostnames = ["shop.example.com", "www.example.com"]

[[sites]]
id = 9
name = "internal.example.com"
hostnames = ["internal.example.com"]
hidden = true
"#;

/// Isolated test environment with a temp directory and inventory file.
pub struct TestEnv {
    dir: TempDir,
    inventory: PathBuf,
}

impl TestEnv {
    /// Environment seeded with [`SAMPLE_INVENTORY`].
    pub fn with_sample_inventory() -> Self {
        Self::with_inventory(SAMPLE_INVENTORY)
    }

    pub fn with_inventory(contents: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let inventory = dir.path().join("sites.toml");
        std::fs::write(&inventory, contents).unwrap();
        Self { dir, inventory }
    }

    /// Path inside the environment's temp directory.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.path(relative);
        std::fs::write(&path, contents).unwrap();
        path
    }

    /// Run the sancert binary with `--inventory` pointing at this env.
    pub fn run(&self, args: &[&str]) -> Output {
        let bin = env!("CARGO_BIN_EXE_sancert");
        Command::new(bin)
            .current_dir(self.dir.path())
            .args(args)
            .arg("--inventory")
            .arg(&self.inventory)
            .output()
            .unwrap()
    }

    /// Run the sancert binary without appending the inventory flag.
    pub fn run_raw(&self, args: &[&str]) -> Output {
        let bin = env!("CARGO_BIN_EXE_sancert");
        Command::new(bin)
            .current_dir(self.dir.path())
            .args(args)
            .output()
            .unwrap()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
