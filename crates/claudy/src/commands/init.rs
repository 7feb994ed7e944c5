use crate::settings::{self, Settings};
use std::path::Path;

pub fn run(config: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let path = settings::config_path(config)?;
    if write_defaults(&path, force)? {
        println!("✓ Wrote default configuration to {}", path.display());
    } else {
        println!(
            "Configuration already exists at {} (use --force to overwrite)",
            path.display()
        );
    }
    Ok(())
}

/// Returns false when a file exists and `force` is off
fn write_defaults(path: &Path, force: bool) -> anyhow::Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    settings::save(path, &Settings::default())?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".claude").join("claudy.json");

        assert!(write_defaults(&path, false).unwrap());
        assert!(path.exists());
        assert_eq!(settings::load_strict(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("claudy.json");
        std::fs::write(&path, r#"{"bubble_ms": 1234}"#).unwrap();

        assert!(!write_defaults(&path, false).unwrap());
        assert_eq!(settings::load(&path).bubble_ms, 1234);

        assert!(write_defaults(&path, true).unwrap());
        assert_eq!(settings::load(&path).bubble_ms, 5000);
    }
}
