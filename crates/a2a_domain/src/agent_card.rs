use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use url::Url;

use crate::{normalize_capabilities, CapabilityEntry, DiagnosticError, RawCapabilities, Result};

pub const UNKNOWN_VERSION: &str = "unknown";
pub const UNKNOWN_AGENT: &str = "Unknown Agent";

/// A skill advertised by an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub description: Option<String>,
}

/// Normalized agent self-description, built from the payload served at the
/// well-known metadata path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentCard {
    pub name: String,
    pub version: String,
    pub description: Option<String>,
    /// RPC URL advertised by the agent, if any.
    pub url: Option<String>,
    pub capabilities: Vec<CapabilityEntry>,
    pub skills: Vec<Skill>,
    /// The payload exactly as received.
    #[serde(skip)]
    pub raw: Value,
}

#[derive(Debug, Default, Deserialize)]
struct AgentCardPayload {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, deserialize_with = "string_like")]
    version: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    capabilities: Option<RawCapabilities>,
    #[serde(default)]
    skills: Option<Vec<SkillPayload>>,
}

#[derive(Debug, Deserialize)]
struct SkillPayload {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

// Versions are occasionally published as bare numbers (`"version": 1.0`).
fn string_like<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string or number, found {other}"
        ))),
    }
}

impl AgentCard {
    /// Builds a card from a raw JSON payload. `base_url` is only used to
    /// derive a name when the payload carries none.
    pub fn from_value(raw: Value, base_url: Option<&str>) -> Result<Self> {
        if !raw.is_object() {
            return Err(DiagnosticError::FetchFailure(
                "agent card is not a JSON object".to_string(),
            ));
        }

        let payload: AgentCardPayload = serde_json::from_value(raw.clone())?;

        let name = payload
            .name
            .filter(|name| !name.trim().is_empty())
            .or_else(|| base_url.and_then(derive_agent_name))
            .unwrap_or_else(|| UNKNOWN_AGENT.to_string());

        let skills = payload
            .skills
            .unwrap_or_default()
            .into_iter()
            .map(|skill| Skill {
                name: skill.name.or(skill.id).unwrap_or_default(),
                description: skill.description,
            })
            .collect();

        Ok(Self {
            name,
            version: payload.version.unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
            description: payload.description,
            url: payload.url.filter(|url| !url.trim().is_empty()),
            capabilities: payload
                .capabilities
                .as_ref()
                .map(normalize_capabilities)
                .unwrap_or_default(),
            skills,
            raw,
        })
    }

    pub fn from_json(body: &str, base_url: Option<&str>) -> Result<Self> {
        let raw: Value = serde_json::from_str(body)?;
        Self::from_value(raw, base_url)
    }

    pub fn has_capability(&self, id: &str) -> bool {
        self.capabilities.iter().any(|entry| entry.id == id)
    }
}

/// Derives a display name from the last non-empty path segment of a base
/// URL, e.g. `http://host/pirate_agent` becomes `Pirate Agent`. Falls back
/// to the host when the URL has no path.
pub fn derive_agent_name(base_url: &str) -> Option<String> {
    let segment = match Url::parse(base_url.trim()) {
        Ok(url) => url
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .map(str::to_string)
            .or_else(|| url.host_str().map(str::to_string)),
        Err(_) => base_url
            .split('/')
            .filter(|s| !s.trim().is_empty())
            .last()
            .map(str::to_string),
    }?;

    let name = title_case(&segment.replace(['_', '-'], " "));
    (!name.is_empty()).then_some(name)
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
