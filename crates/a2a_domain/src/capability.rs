use std::collections::HashMap;

use indexmap::IndexMap;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use serde_json::Value;

lazy_static! {
    static ref CAPABILITY_DESCRIPTIONS: HashMap<&'static str, &'static str> = HashMap::from([
        ("streaming", "Supports real-time streaming responses"),
        ("pushNotifications", "Supports push notifications for task updates"),
        ("stateTransitionHistory", "Keeps a history of task state transitions"),
        ("tasks/send", "Supports sending tasks"),
        ("tasks/sendSubscribe", "Supports combined send and subscribe operations"),
        ("tasks/resubscribe", "Supports subscribing to existing tasks"),
        ("tasks/get", "Supports retrieving task status"),
        ("tasks/cancel", "Supports cancelling running tasks"),
    ]);
}

/// Looks up the human-readable description of a well-known capability.
pub fn describe_capability(id: &str) -> Option<&'static str> {
    CAPABILITY_DESCRIPTIONS.get(id).copied()
}

/// A single capability advertised by an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityEntry {
    pub id: String,
    pub description: Option<String>,
}

impl CapabilityEntry {
    pub fn new(id: impl ToString) -> Self {
        let id = id.to_string();
        let description = describe_capability(&id).map(str::to_string);
        Self { id, description }
    }
}

/// Capabilities as they appear in an agent card: either a plain list of ids
/// or a mapping of id to an enabled flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCapabilities {
    List(Vec<String>),
    Flags(IndexMap<String, Value>),
}

impl Default for RawCapabilities {
    fn default() -> Self {
        RawCapabilities::List(Vec::new())
    }
}

/// Normalizes raw capabilities, keeping input order. Mapping entries are only
/// kept when their flag is truthy.
pub fn normalize_capabilities(raw: &RawCapabilities) -> Vec<CapabilityEntry> {
    match raw {
        RawCapabilities::List(ids) => ids.iter().map(CapabilityEntry::new).collect(),
        RawCapabilities::Flags(flags) => flags
            .iter()
            .filter(|(_, enabled)| is_truthy(enabled))
            .map(|(id, _)| CapabilityEntry::new(id))
            .collect(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
