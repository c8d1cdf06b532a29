//! Backup / Restore
//!
//! A backup is one pretty-printed JSON document holding every stored blob.
//! Restore is deliberately loose about the envelope but strict about the
//! blobs it finds: one malformed field rejects the whole file.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dialogs::{Dialogs, ALERT_INVALID_BACKUP, ALERT_UNREADABLE_BACKUP, CONFIRM_RESTORE};
use crate::error::{PlannerError, PlannerResult};
use crate::models::{ItineraryState, ShoppingAlbum, TodosState};

pub const BACKUP_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    pub app: String,
    pub version: u32,
    /// ISO-8601, UTC with milliseconds
    pub timestamp: String,
    pub todos: TodosState,
    pub itinerary: ItineraryState,
    pub shopping_albums: Vec<ShoppingAlbum>,
}

impl BackupDocument {
    pub fn new(
        app: &str,
        at: DateTime<Utc>,
        todos: TodosState,
        itinerary: ItineraryState,
        shopping_albums: Vec<ShoppingAlbum>,
    ) -> Self {
        Self {
            app: app.to_string(),
            version: BACKUP_VERSION,
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            todos,
            itinerary,
            shopping_albums,
        }
    }

    pub fn to_pretty_json(&self) -> PlannerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Download name such as `fukuoka-backup-2024-12-01.json`
pub fn backup_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{}-{}.json", prefix, date.format("%Y-%m-%d"))
}

/// Fields found in a restore file. Absent fields leave state untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestorePayload {
    pub todos: Option<TodosState>,
    pub itinerary: Option<ItineraryState>,
    pub shopping_albums: Option<Vec<ShoppingAlbum>>,
}

impl RestorePayload {
    pub fn is_empty(&self) -> bool {
        self.todos.is_none() && self.itinerary.is_none() && self.shopping_albums.is_none()
    }
}

/// `null` counts as absent
fn field<T: DeserializeOwned>(doc: &Value, name: &str) -> PlannerResult<Option<T>> {
    match doc.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => T::deserialize(value)
            .map(Some)
            .map_err(|e| PlannerError::InvalidBackup(format!("{}: {}", name, e))),
    }
}

/// Parse and shape-check a restore file. Accepted when `app` matches or an
/// `itinerary` is present.
pub fn parse_restore(raw: &str, app: &str) -> PlannerResult<RestorePayload> {
    let doc: Value = serde_json::from_str(raw)?;
    if !doc.is_object() {
        return Err(PlannerError::InvalidBackup("not a JSON object".into()));
    }

    let app_matches = doc.get("app").and_then(Value::as_str) == Some(app);
    let has_itinerary = !matches!(doc.get("itinerary"), None | Some(Value::Null));
    if !app_matches && !has_itinerary {
        return Err(PlannerError::InvalidBackup("unrecognized backup".into()));
    }

    let shopping_albums = match field(&doc, "shoppingAlbums")? {
        Some(albums) => Some(albums),
        None => field(&doc, "shoppingList")?,
    };
    Ok(RestorePayload {
        todos: field(&doc, "todos")?,
        itinerary: field(&doc, "itinerary")?,
        shopping_albums,
    })
}

/// Parse a chosen file and ask before overwriting. Problems are reported
/// through `dialogs`; `None` means state must stay as it is.
pub fn confirm_restore<D: Dialogs + ?Sized>(raw: &str, app: &str, dialogs: &D) -> Option<RestorePayload> {
    let payload = match parse_restore(raw, app) {
        Ok(payload) => payload,
        Err(PlannerError::InvalidBackup(reason)) => {
            log::warn!("[BACKUP] Rejected restore file: {}", reason);
            dialogs.alert(ALERT_INVALID_BACKUP);
            return None;
        }
        Err(e) => {
            log::error!("[BACKUP] Restore failed: {}", e);
            dialogs.alert(ALERT_UNREADABLE_BACKUP);
            return None;
        }
    };
    dialogs.confirm(CONFIRM_RESTORE).then_some(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogs::scripted::ScriptedDialogs;
    use crate::models::TodoItem;
    use crate::seed;
    use chrono::TimeZone;

    const APP: &str = "fukuoka-trip";

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 1, 8, 30, 0).unwrap()
    }

    #[test]
    fn test_round_trip_minimal_state() {
        let todos = TodosState {
            tasks: vec![TodoItem {
                id: "1".to_string(),
                text: "X".to_string(),
                completed: false,
            }],
            carry_on: vec![],
            checked: vec![],
        };
        let doc = BackupDocument::new(APP, at(), todos.clone(), ItineraryState::new(), vec![]);
        let raw = doc.to_pretty_json().unwrap();

        let restored = parse_restore(&raw, APP).unwrap();
        assert_eq!(restored.todos, Some(todos));
        assert_eq!(restored.itinerary, Some(ItineraryState::new()));
        assert_eq!(restored.shopping_albums, Some(vec![]));
    }

    #[test]
    fn test_round_trip_seed_state() {
        let doc = BackupDocument::new(
            APP,
            at(),
            seed::initial_todos(),
            seed::initial_itinerary(),
            seed::initial_shopping(),
        );
        let restored = parse_restore(&doc.to_pretty_json().unwrap(), APP).unwrap();
        assert_eq!(restored.todos, Some(seed::initial_todos()));
        assert_eq!(restored.itinerary, Some(seed::initial_itinerary()));
        assert_eq!(restored.shopping_albums, Some(seed::initial_shopping()));
    }

    #[test]
    fn test_document_envelope() {
        let doc = BackupDocument::new(APP, at(), TodosState::default(), ItineraryState::new(), vec![]);
        let value: Value = serde_json::from_str(&doc.to_pretty_json().unwrap()).unwrap();
        assert_eq!(value["app"], APP);
        assert_eq!(value["version"], 1);
        assert_eq!(value["timestamp"], "2024-12-01T08:30:00.000Z");
        assert!(value.get("shoppingAlbums").is_some());
    }

    #[test]
    fn test_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(backup_filename("fukuoka-backup", date), "fukuoka-backup-2024-12-01.json");
    }

    #[test]
    fn test_foreign_app_with_itinerary_accepted() {
        let raw = r#"{"app":"other","itinerary":{"2024-12-12":[]}}"#;
        let restored = parse_restore(raw, APP).unwrap();
        assert!(restored.itinerary.is_some());
        assert!(restored.todos.is_none());
        assert!(restored.shopping_albums.is_none());
    }

    #[test]
    fn test_matching_app_without_fields_is_empty() {
        let restored = parse_restore(r#"{"app":"fukuoka-trip"}"#, APP).unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn test_unrecognized_shape_rejected() {
        for raw in [r#"{"todos":{}}"#, r#"{"app":"other"}"#, "[]", r#"{"itinerary":null}"#] {
            assert!(matches!(parse_restore(raw, APP), Err(PlannerError::InvalidBackup(_))), "{}", raw);
        }
    }

    #[test]
    fn test_not_json_rejected() {
        assert!(matches!(parse_restore("hello", APP), Err(PlannerError::Parse(_))));
    }

    #[test]
    fn test_malformed_field_rejects_file() {
        let raw = r#"{"app":"fukuoka-trip","todos":{"tasks":"nope"},"itinerary":{}}"#;
        assert!(matches!(parse_restore(raw, APP), Err(PlannerError::InvalidBackup(_))));
    }

    #[test]
    fn test_shopping_list_alias() {
        let raw = r#"{"app":"fukuoka-trip","shoppingList":[{"id":"album-1","name":"Muji","items":[]}]}"#;
        let restored = parse_restore(raw, APP).unwrap();
        assert_eq!(restored.shopping_albums.map(|a| a.len()), Some(1));
    }

    #[test]
    fn test_confirm_restore_accepted() {
        let dialogs = ScriptedDialogs::answering(true);
        let raw = r#"{"app":"fukuoka-trip","itinerary":{}}"#;
        let payload = confirm_restore(raw, APP, &dialogs).unwrap();
        assert_eq!(payload.itinerary, Some(ItineraryState::new()));
        assert_eq!(dialogs.confirms.borrow().len(), 1);
        assert!(dialogs.alerts.borrow().is_empty());
    }

    #[test]
    fn test_confirm_restore_declined() {
        let dialogs = ScriptedDialogs::answering(false);
        assert!(confirm_restore(r#"{"app":"fukuoka-trip"}"#, APP, &dialogs).is_none());
    }

    #[test]
    fn test_confirm_restore_alerts_without_asking() {
        let dialogs = ScriptedDialogs::answering(true);
        assert!(confirm_restore(r#"{"app":"other"}"#, APP, &dialogs).is_none());
        assert!(confirm_restore("not json", APP, &dialogs).is_none());
        assert!(dialogs.confirms.borrow().is_empty());
        assert_eq!(
            dialogs.alerts.borrow().as_slice(),
            [ALERT_INVALID_BACKUP, ALERT_UNREADABLE_BACKUP]
        );
    }
}
