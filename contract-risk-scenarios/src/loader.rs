//! Scenario file loading.

use crate::{Scenario, ScenarioError};
use std::fs;
use std::path::Path;

/// Parse scenario text. `origin` names the source in error messages.
pub fn parse_scenario(content: &str, origin: &str) -> Result<Scenario, ScenarioError> {
    toml::from_str(content).map_err(|e| ScenarioError::Parse {
        path: origin.to_string(),
        message: e.to_string(),
    })
}

/// Load a single scenario file.
pub fn load_scenario(path: &Path) -> Result<Scenario, ScenarioError> {
    let content = fs::read_to_string(path).map_err(|e| ScenarioError::Load {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_scenario(&content, &path.display().to_string())
}

/// Load all scenarios from a directory (glob: **/*.toml), sorted by path.
pub fn load_all_scenarios(dir: &Path) -> Result<Vec<(String, Scenario)>, ScenarioError> {
    let mut scenarios = Vec::new();
    load_scenarios_recursive(dir, dir, &mut scenarios)?;
    scenarios.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(scenarios)
}

fn load_scenarios_recursive(
    base: &Path,
    dir: &Path,
    scenarios: &mut Vec<(String, Scenario)>,
) -> Result<(), ScenarioError> {
    if !dir.is_dir() {
        return Ok(());
    }

    for entry in fs::read_dir(dir).map_err(|e| ScenarioError::Load {
        path: dir.display().to_string(),
        message: e.to_string(),
    })? {
        let entry = entry.map_err(|e| ScenarioError::Load {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
        let path = entry.path();

        if path.is_dir() {
            load_scenarios_recursive(base, &path, scenarios)?;
        } else if path.extension().map_or(false, |e| e == "toml") {
            let relative = path.strip_prefix(base).unwrap_or(&path);
            let scenario = load_scenario(&path)?;
            scenarios.push((relative.display().to_string(), scenario));
        }
    }

    Ok(())
}
