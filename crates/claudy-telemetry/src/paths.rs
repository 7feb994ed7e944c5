//! Path resolution for configuration files

use std::path::PathBuf;

/// Resolves the standard locations under `~/.claude`
#[derive(Debug, Clone)]
pub struct Paths {
    pub home_claude: PathBuf,
}

impl Paths {
    pub fn new() -> std::io::Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;

        Ok(Self {
            home_claude: home.join(".claude"),
        })
    }

    /// Rooted somewhere other than the home directory
    pub fn with_root(home_claude: impl Into<PathBuf>) -> Self {
        Self {
            home_claude: home_claude.into(),
        }
    }

    /// Get claudy.json path
    pub fn config_file(&self) -> PathBuf {
        self.home_claude.join("claudy.json")
    }
}
