//! Structural validation of a parsed JSON value against the hiking report shape.
//!
//! Validation is all-or-nothing: a single missing field, wrong type or
//! non-object array element rejects the whole value. Unknown fields are ignored.

use serde_json::{Map, Value};
use tracing::trace;

use crate::model::types::{HikingReport, LinkEntry, Risk, RiskAssessment, Trail, WeatherEntry};

/// Outcome of checking a JSON value against the report shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeCheck {
    Valid(HikingReport),
    Invalid,
}

impl ShapeCheck {
    pub fn into_report(self) -> Option<HikingReport> {
        match self {
            ShapeCheck::Valid(report) => Some(report),
            ShapeCheck::Invalid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ShapeCheck::Valid(_))
    }
}

/// Check `value` and, when it matches, build the typed report from it.
pub fn check_shape(value: &Value) -> ShapeCheck {
    match hiking_report(value) {
        Ok(report) => ShapeCheck::Valid(report),
        Err(field) => {
            trace!(
                component = "shape",
                operation = "check_shape",
                field,
                "Value does not match hiking report shape"
            );
            ShapeCheck::Invalid
        }
    }
}

/// `Err` names the first field that failed.
type Check<T> = Result<T, &'static str>;

type Object = Map<String, Value>;

fn hiking_report(value: &Value) -> Check<HikingReport> {
    let obj = value.as_object().ok_or("<root>")?;
    Ok(HikingReport {
        summary: text(obj, "summary")?,
        risk_emojis: text_list(obj, "risk_emojis")?,
        weather_report: record_list(obj, "weather_report", weather_entry)?,
        relevant_news: text_list(obj, "relevant_news")?,
        trails_info: record_list(obj, "trails_info", trail)?,
        risk_analysis: record_list(obj, "risk_analysis", risk_assessment)?,
        links: record_list(obj, "links", link)?,
    })
}

fn weather_entry(obj: &Object) -> Check<WeatherEntry> {
    Ok(WeatherEntry {
        date: text(obj, "date")?,
        max_temperature: text(obj, "max_temperature")?,
        min_temperature: text(obj, "min_temperature")?,
        precipitation_probability: text(obj, "precipitation_probability")?,
        wind_speed: text(obj, "wind_speed")?,
    })
}

fn trail(obj: &Object) -> Check<Trail> {
    Ok(Trail {
        name: text(obj, "name")?,
        difficulty_level: text(obj, "difficulty_level")?,
        estimated_ascent_time: text(obj, "estimated_ascent_time")?,
        estimated_descent_time: text(obj, "estimated_descent_time")?,
    })
}

fn risk_assessment(obj: &Object) -> Check<RiskAssessment> {
    let risk = obj.get("risk").and_then(Value::as_object).ok_or("risk")?;
    Ok(RiskAssessment {
        risk: Risk {
            name: text(risk, "name")?,
            emoji: text(risk, "emoji")?,
        },
        relevance: text(obj, "relevance")?,
        recommendations: text(obj, "recommendations")?,
    })
}

fn link(obj: &Object) -> Check<LinkEntry> {
    Ok(LinkEntry {
        title: text(obj, "title")?,
        url: text(obj, "url")?,
    })
}

fn text(obj: &Object, key: &'static str) -> Check<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(key)
}

fn array<'a>(obj: &'a Object, key: &'static str) -> Check<&'a Vec<Value>> {
    obj.get(key).and_then(Value::as_array).ok_or(key)
}

fn text_list(obj: &Object, key: &'static str) -> Check<Vec<String>> {
    array(obj, key)?
        .iter()
        .map(|item| item.as_str().map(str::to_owned).ok_or(key))
        .collect()
}

fn record_list<T>(obj: &Object, key: &'static str, parse: fn(&Object) -> Check<T>) -> Check<Vec<T>> {
    array(obj, key)?
        .iter()
        .map(|item| item.as_object().ok_or(key).and_then(parse))
        .collect()
}
