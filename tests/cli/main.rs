use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;
use walkdir::WalkDir;

mod get;
mod has;
mod languages;

const BIN_NAME: &str = "langtree";

/// Config used by [`CliTest::with_fixtures`]: zh-CN default, en fallback.
const FIXTURE_CONFIG: &str = r#"{
  "root": "./lang",
  "defaultLanguage": "zh-CN",
  "fallbackLanguage": "en",
  "languages": ["en", "zh-CN"]
}"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

/// Exit code and captured output of one run.
pub struct CliOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliTest {
    /// An empty project. A `.git` marker stops the config search here.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with `tests/fixtures/lang` copied to `./lang` and a config
    /// file pointing at it.
    pub fn with_fixtures() -> Result<Self> {
        let test = Self::new()?;
        let fixtures = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("lang");

        for entry in WalkDir::new(&fixtures) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry.path().strip_prefix(&fixtures)?;
            let content = fs::read_to_string(entry.path())?;
            test.write_file(&format!("lang/{}", relative.to_string_lossy()), &content)?;
        }
        test.write_file(".langtreerc.json", FIXTURE_CONFIG)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Result<CliOutput> {
        let mut cmd = self.command();
        cmd.args(args);
        run(cmd)
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn run(mut cmd: Command) -> Result<CliOutput> {
    let output = cmd.output().context("Failed to run langtree")?;
    Ok(CliOutput {
        code: output.status.code().context("Process was terminated by a signal")?,
        stdout: String::from_utf8(output.stdout)?,
        stderr: String::from_utf8(output.stderr)?,
    })
}
