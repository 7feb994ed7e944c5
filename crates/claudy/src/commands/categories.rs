use crate::settings;
use claudy_personality::{CategoryRegistry, UnknownCategory};
use std::path::Path;

fn set_category_enabled(config_path: &Path, name: &str, enabled: bool) -> anyhow::Result<()> {
    if !CategoryRegistry::with_defaults().contains(name) {
        return Err(UnknownCategory(name.to_string()).into());
    }

    let mut settings = settings::load_strict(config_path)?;
    let disabled = &mut settings.comments.disabled;
    disabled.retain(|n| n != name);
    if !enabled {
        disabled.push(name.to_string());
    }
    settings::save(config_path, &settings)
}

pub fn run_list(config: Option<&Path>) -> anyhow::Result<()> {
    let path = settings::config_path(config)?;
    let effective = settings::load(&path);
    let registry = CategoryRegistry::with_defaults();

    println!("Comment Categories");
    println!("==================");
    for name in registry.names() {
        let status = if effective.comments.disabled.iter().any(|n| n == name) {
            "disabled"
        } else {
            "enabled"
        };
        println!("  {} [{}]", name, status);
    }
    Ok(())
}

pub fn run_enable(config: Option<&Path>, name: &str) -> anyhow::Result<()> {
    let path = settings::config_path(config)?;
    set_category_enabled(&path, name, true)?;
    println!("Enabled category: {}", name);
    Ok(())
}

pub fn run_disable(config: Option<&Path>, name: &str) -> anyhow::Result<()> {
    let path = settings::config_path(config)?;
    set_category_enabled(&path, name, false)?;
    println!("Disabled category: {}", name);
    Ok(())
}
