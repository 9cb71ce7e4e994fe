use hours_aggregate::parse_time_of_day;
use hours_core::{DayRecord, TimeOfDay};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

/// Column names of the attendance database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyNames {
    pub start1: String,
    pub end1: String,
    pub start2: String,
    pub end2: String,
    pub duration: String,
}

impl Default for PropertyNames {
    fn default() -> Self {
        Self {
            start1: "Inicio".to_string(),
            end1: "Fin".to_string(),
            start2: "Inicio 2".to_string(),
            end2: "Fin 2".to_string(),
            duration: "Horas trabajadas".to_string(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn fragment_text(fragment: &Value) -> Option<&str> {
    fragment
        .get("plain_text")
        .and_then(Value::as_str)
        .or_else(|| {
            fragment
                .get("text")
                .and_then(|text| text.get("content"))
                .and_then(Value::as_str)
        })
}

fn rich_text(property: &Value, kind: &str) -> Option<String> {
    let fragments = property.get(kind)?.as_array()?;
    let joined: String = fragments.iter().filter_map(fragment_text).collect();
    non_empty(&joined)
}

fn property_text(property: &Value) -> Option<String> {
    if let Some(name) = property
        .get("select")
        .and_then(|select| select.get("name"))
        .and_then(Value::as_str)
    {
        return non_empty(name);
    }
    rich_text(property, "rich_text").or_else(|| rich_text(property, "title"))
}

fn time_property(properties: &Value, name: &str) -> Option<TimeOfDay> {
    let raw = properties.get(name).and_then(property_text)?;
    let parsed = parse_time_of_day(&raw);
    if parsed.is_none() {
        debug!(property = name, value = %raw, "ignoring unparseable time");
    }
    parsed
}

/// Decodes one page object of a database query. Pages without an id are skipped.
pub fn decode_page(page: &Value, names: &PropertyNames) -> Option<DayRecord> {
    let id = page.get("id").and_then(Value::as_str)?.to_string();
    let empty = Value::Null;
    let properties = page.get("properties").unwrap_or(&empty);
    Some(DayRecord {
        id,
        start1: time_property(properties, &names.start1),
        end1: time_property(properties, &names.end1),
        start2: time_property(properties, &names.start2),
        end2: time_property(properties, &names.end2),
        duration_text: properties
            .get(&names.duration)
            .and_then(|property| rich_text(property, "rich_text")),
    })
}

/// Body of a page update setting the duration column to `duration_text`.
pub fn duration_update_body(names: &PropertyNames, duration_text: &str) -> Value {
    let mut properties = serde_json::Map::new();
    properties.insert(
        names.duration.clone(),
        json!({
            "rich_text": [
                { "type": "text", "text": { "content": duration_text } }
            ]
        }),
    );
    json!({ "properties": properties })
}
