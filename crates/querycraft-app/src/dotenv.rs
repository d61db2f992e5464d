//! `.env` loading (KEY=VALUE lines). Variables already set are left alone.

use std::path::{Path, PathBuf};

pub fn load_dotenv() {
    let mut candidates = vec![PathBuf::from(".env")];
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("querycraft").join(".env"));
    }

    for path in &candidates {
        if load_file(path) {
            return;
        }
    }
}

/// Apply one file; returns whether it was read.
fn load_file(path: &Path) -> bool {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return false;
    };
    for (key, value) in parse(&contents) {
        if std::env::var(&key).is_err() {
            std::env::set_var(key, value);
        }
    }
    true
}

fn parse(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            let value = value.trim().trim_matches('"').trim_matches('\'');
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}
