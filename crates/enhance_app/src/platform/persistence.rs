use std::collections::BTreeMap;

use enhance_client::StateDir;
use enhance_core::{AiModelId, SELECTED_MODEL_KEY};
use enhance_logging::{enhance_error, enhance_info, enhance_warn};

const PREFS_FILENAME: &str = ".enhance_prefs.ron";

/// Key/value preferences, stored as a RON map.
type Preferences = BTreeMap<String, String>;

fn load_preferences(state_dir: &StateDir) -> Preferences {
    let content = match state_dir.read(PREFS_FILENAME) {
        Ok(Some(text)) => text,
        Ok(None) => return Preferences::new(),
        Err(err) => {
            enhance_warn!(
                "Failed to read preferences from {:?}: {}",
                state_dir.path(),
                err
            );
            return Preferences::new();
        }
    };

    match ron::from_str(&content) {
        Ok(prefs) => prefs,
        Err(err) => {
            enhance_warn!("Failed to parse preferences in {:?}: {}", state_dir.path(), err);
            Preferences::new()
        }
    }
}

pub(crate) fn load_selected_model(state_dir: &StateDir) -> Option<AiModelId> {
    let model = load_preferences(state_dir)
        .remove(SELECTED_MODEL_KEY)
        .filter(|id| !id.trim().is_empty())
        .map(AiModelId::new);
    if let Some(model) = &model {
        enhance_info!("Restored selected model {}", model);
    }
    model
}

pub(crate) fn save_selected_model(state_dir: &StateDir, model: &AiModelId) {
    let mut prefs = load_preferences(state_dir);
    prefs.insert(SELECTED_MODEL_KEY.to_string(), model.as_str().to_string());

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&prefs, pretty) {
        Ok(text) => text,
        Err(err) => {
            enhance_error!("Failed to serialize preferences: {}", err);
            return;
        }
    };

    if let Err(err) = state_dir.write_atomic(PREFS_FILENAME, &content) {
        enhance_error!(
            "Failed to write preferences to {:?}: {}",
            state_dir.path(),
            err
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_prefs_have_no_model() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_selected_model(&StateDir::new(temp.path())), None);
    }

    #[test]
    fn selected_model_round_trips_through_state_dir() {
        let temp = TempDir::new().unwrap();
        let state_dir = StateDir::new(temp.path());
        save_selected_model(&state_dir, &AiModelId::new("whisper-large"));
        assert_eq!(
            load_selected_model(&state_dir),
            Some(AiModelId::new("whisper-large"))
        );
        let raw = std::fs::read_to_string(temp.path().join(PREFS_FILENAME)).unwrap();
        assert!(raw.contains(SELECTED_MODEL_KEY));
    }

    #[test]
    fn other_keys_survive_a_save() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(PREFS_FILENAME),
            "{\"theme\": \"dark\"}",
        )
        .unwrap();
        let state_dir = StateDir::new(temp.path());
        save_selected_model(&state_dir, &AiModelId::new("m2"));
        let prefs = load_preferences(&state_dir);
        assert_eq!(prefs.get("theme").map(String::as_str), Some("dark"));
        assert_eq!(prefs.get(SELECTED_MODEL_KEY).map(String::as_str), Some("m2"));
    }

    #[test]
    fn corrupt_prefs_fall_back_to_default() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(PREFS_FILENAME), "{{not ron").unwrap();
        assert_eq!(load_selected_model(&StateDir::new(temp.path())), None);
    }
}
