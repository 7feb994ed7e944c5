use crate::settings;
use std::path::Path;

pub fn run(config: Option<&Path>) -> anyhow::Result<()> {
    let path = settings::config_path(config)?;
    let effective = settings::load(&path);

    let output = serde_json::json!({
        "config_path": path.display().to_string(),
        "config_exists": path.exists(),
        "settings": effective,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_status_with_missing_config() {
        let temp = TempDir::new().unwrap();
        let result = run(Some(&temp.path().join("claudy.json")));
        assert!(result.is_ok());
    }
}
