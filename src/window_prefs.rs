use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};

use crate::{append_desktop_log, DESKTOP_STATE_FILE};

const FRAME_FIELD: &str = "frame";

fn empty_state_object() -> Value {
    Value::Object(Map::new())
}

pub(crate) fn desktop_state_path(root_dir: Option<&Path>) -> Option<PathBuf> {
    root_dir.map(|root| root.join("data").join(DESKTOP_STATE_FILE))
}

pub(crate) fn read_cached_frame_visible(root_dir: Option<&Path>) -> Option<bool> {
    let state_path = desktop_state_path(root_dir)?;
    let raw = fs::read_to_string(state_path).ok()?;
    let parsed: Value = serde_json::from_str(&raw).ok()?;
    parsed.get(FRAME_FIELD)?.as_bool()
}

fn ensure_object(value: &mut Value) -> &mut Map<String, Value> {
    if let Value::Object(map) = value {
        return map;
    }

    *value = empty_state_object();
    // Safe because `value` was just replaced with an object.
    value
        .as_object_mut()
        .expect("value was just normalized into a JSON object")
}

/// `Some(frame)` persists the preference, `None` clears it back to default.
pub(crate) fn write_cached_frame_visible(
    frame: Option<bool>,
    root_dir: Option<&Path>,
) -> Result<(), String> {
    let Some(state_path) = desktop_state_path(root_dir) else {
        append_desktop_log("desktop state path is unavailable; skipping frame persistence");
        return Ok(());
    };

    if let Some(parent_dir) = state_path.parent() {
        fs::create_dir_all(parent_dir).map_err(|error| {
            format!(
                "Failed to create desktop state directory {}: {}",
                parent_dir.display(),
                error
            )
        })?;
    }

    let mut parsed = match fs::read_to_string(&state_path) {
        Ok(raw) => match serde_json::from_str::<Value>(&raw) {
            Ok(value) => value,
            Err(error) => {
                append_desktop_log(&format!(
                    "failed to parse desktop state {}: {}. resetting state file",
                    state_path.display(),
                    error
                ));
                empty_state_object()
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => empty_state_object(),
        Err(error) => {
            return Err(format!(
                "Failed to read desktop state {}: {}",
                state_path.display(),
                error
            ));
        }
    };
    if !parsed.is_object() {
        append_desktop_log(&format!(
            "desktop state {} has non-object root; resetting state file",
            state_path.display()
        ));
    }
    let object = ensure_object(&mut parsed);

    match frame {
        Some(frame) => {
            object.insert(FRAME_FIELD.to_string(), Value::Bool(frame));
        }
        None => {
            object.remove(FRAME_FIELD);
        }
    }

    let serialized = serde_json::to_string_pretty(&parsed)
        .map_err(|error| format!("Failed to serialize desktop state: {error}"))?;
    fs::write(&state_path, serialized).map_err(|error| {
        format!(
            "Failed to write desktop state {}: {}",
            state_path.display(),
            error
        )
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_preference_round_trips_through_state_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();

        assert_eq!(read_cached_frame_visible(Some(root)), None);

        write_cached_frame_visible(Some(false), Some(root)).expect("write");
        assert_eq!(read_cached_frame_visible(Some(root)), Some(false));

        write_cached_frame_visible(None, Some(root)).expect("clear");
        assert_eq!(read_cached_frame_visible(Some(root)), None);
    }

    #[test]
    fn write_preserves_unrelated_state_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();
        let state_path = desktop_state_path(Some(root)).expect("state path");
        fs::create_dir_all(state_path.parent().expect("parent")).expect("mkdir");
        fs::write(&state_path, r#"{"locale":"en-US"}"#).expect("seed state");

        write_cached_frame_visible(Some(true), Some(root)).expect("write");

        let raw = fs::read_to_string(&state_path).expect("read");
        let parsed: Value = serde_json::from_str(&raw).expect("parse");
        assert_eq!(parsed.get("locale").and_then(Value::as_str), Some("en-US"));
        assert_eq!(parsed.get("frame").and_then(Value::as_bool), Some(true));
    }

    #[test]
    fn malformed_state_file_is_reset_instead_of_failing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();
        let state_path = desktop_state_path(Some(root)).expect("state path");
        fs::create_dir_all(state_path.parent().expect("parent")).expect("mkdir");
        fs::write(&state_path, "not json at all").expect("seed garbage");

        write_cached_frame_visible(Some(false), Some(root)).expect("write");
        assert_eq!(read_cached_frame_visible(Some(root)), Some(false));
    }

    #[test]
    fn missing_root_dir_is_a_noop() {
        write_cached_frame_visible(Some(true), None).expect("noop write");
        assert_eq!(read_cached_frame_visible(None), None);
    }
}
