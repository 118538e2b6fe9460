//! View-model entities for assistant messages and hiking reports.

use serde::{Deserialize, Deserializer, Serialize};

/// Structured hiking-safety payload the assistant may emit as its final answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HikingReport {
    pub summary: String,
    pub risk_emojis: Vec<String>,
    pub weather_report: Vec<WeatherEntry>,
    pub relevant_news: Vec<String>,
    pub trails_info: Vec<Trail>,
    pub risk_analysis: Vec<RiskAssessment>,
    pub links: Vec<LinkEntry>,
}

/// One day of the weather outlook. Units are whatever the assistant wrote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeatherEntry {
    pub date: String,
    pub max_temperature: String,
    pub min_temperature: String,
    pub precipitation_probability: String,
    pub wind_speed: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trail {
    pub name: String,
    pub difficulty_level: String,
    pub estimated_ascent_time: String,
    pub estimated_descent_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Risk {
    pub name: String,
    pub emoji: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskAssessment {
    pub risk: Risk,
    pub relevance: String,
    pub recommendations: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkEntry {
    pub title: String,
    pub url: String,
}

/// Unvalidated assistant message as delivered by the chat host.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawMessage {
    #[serde(default)]
    pub id: String,
    /// Tool name when the message carries tool calls.
    #[serde(default)]
    pub name: Option<String>,
    /// Text content. Anything that is not a JSON string is treated as absent.
    #[serde(default, deserialize_with = "text_or_absent")]
    pub content: Option<String>,
    #[serde(default)]
    pub tool_calls: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub is_generating: bool,
    #[serde(default)]
    pub is_loading: bool,
}

impl RawMessage {
    /// Plain assistant text message.
    pub fn text(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn has_tool_calls(&self) -> bool {
        self.tool_calls.as_ref().is_some_and(|calls| !calls.is_empty())
    }
}

fn text_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(text)) => Some(text),
        _ => None,
    })
}

/// Descriptor handed to the default-tool render hook.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ToolInvocation {
    pub name: String,
    #[serde(default)]
    pub args: serde_json::Value,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub result: serde_json::Value,
}

impl ToolInvocation {
    pub fn is_complete(&self) -> bool {
        self.status == "complete"
    }
}
