//! Hiking report panel.
//!
//! Fixed section order: header with the risk emoji strip, Summary, Weather
//! Outlook, Relevant News, Trails, Risk Analysis, Essential Links. Sections
//! are never omitted; an empty list renders an empty card region.

use std::time::Instant;

use tracing::debug;

use super::renderer::render_markdown;
use super::template::html_escape;
use crate::model::types::{HikingReport, LinkEntry, RiskAssessment, Trail, WeatherEntry};

/// Render a validated report to HTML.
pub fn render_report(report: &HikingReport) -> String {
    let started = Instant::now();

    let risk_strip: String = report
        .risk_emojis
        .iter()
        .map(|emoji| {
            format!(
                r#"<span class="badge" data-key="{key}">{emoji}</span>"#,
                key = html_escape(emoji),
                emoji = html_escape(emoji),
            )
        })
        .collect();

    let summary = section(
        "Summary",
        &format!(
            r#"<div class="report-prose">{}</div>"#,
            render_markdown(&report.summary)
        ),
    );
    let weather = section(
        "Weather Outlook",
        &cards(report.weather_report.iter().map(weather_card)),
    );
    let news = section(
        "Relevant News",
        &cards(
            report
                .relevant_news
                .iter()
                .enumerate()
                .map(|(idx, item)| news_card(idx, item)),
        ),
    );
    let trails = section("Trails", &cards(report.trails_info.iter().map(trail_card)));
    let risks = section(
        "Risk Analysis",
        &cards(report.risk_analysis.iter().map(risk_card)),
    );
    let links = section("Essential Links", &cards(report.links.iter().map(link_card)));

    let rendered = format!(
        r#"<div class="report">
    <div class="report-header">
        <div>
            <p class="report-eyebrow">Hiking Safety Report</p>
            <p class="report-heading">Your tailored plan is ready</p>
        </div>
        <div class="report-risk-strip">{risk_strip}</div>
    </div>
    <div class="report-body">
        <div class="report-grid">
{summary}
{weather}
        </div>
{news}
{trails}
{risks}
{links}
    </div>
</div>"#
    );

    debug!(
        component = "report",
        operation = "render_report_complete",
        weather = report.weather_report.len(),
        news = report.relevant_news.len(),
        trails = report.trails_info.len(),
        risks = report.risk_analysis.len(),
        links = report.links.len(),
        duration_ms = started.elapsed().as_millis(),
        bytes = rendered.len(),
        "Hiking report rendered"
    );

    rendered
}

fn section(title: &str, body: &str) -> String {
    format!(
        r#"            <section class="report-section" aria-label="{title}">
                <div class="report-section-title">{title}</div>
                {body}
            </section>"#
    )
}

fn cards(items: impl Iterator<Item = String>) -> String {
    let body: Vec<String> = items.collect();
    format!(r#"<div class="report-cards">{}</div>"#, body.join(""))
}

fn list_label(label: &str, value: &str) -> String {
    format!(
        r#"<div class="list-label"><span class="list-label-name">{}</span><span class="list-label-value">{}</span></div>"#,
        label,
        html_escape(value)
    )
}

fn weather_card(entry: &WeatherEntry) -> String {
    format!(
        r#"<div class="report-card" data-key="{date}"><div class="report-card-subtitle">{date}</div>{max}{min}{precip}{wind}</div>"#,
        date = html_escape(&entry.date),
        max = list_label("Max", &entry.max_temperature),
        min = list_label("Min", &entry.min_temperature),
        precip = list_label("Precip.", &entry.precipitation_probability),
        wind = list_label("Wind", &entry.wind_speed),
    )
}

fn news_card(idx: usize, item: &str) -> String {
    format!(
        r#"<div class="report-card" data-key="{idx}"><div class="report-prose">{}</div></div>"#,
        render_markdown(item)
    )
}

fn trail_card(trail: &Trail) -> String {
    format!(
        r#"<div class="report-card" data-key="{name}-{difficulty}"><div class="report-card-title">{name}</div><div class="report-card-subtitle">{difficulty}</div>{ascent}{descent}</div>"#,
        name = html_escape(&trail.name),
        difficulty = html_escape(&trail.difficulty_level),
        ascent = list_label("Ascent", &trail.estimated_ascent_time),
        descent = list_label("Descent", &trail.estimated_descent_time),
    )
}

fn risk_card(item: &RiskAssessment) -> String {
    format!(
        r#"<div class="risk-card" data-key="{name}"><span class="badge">{emoji} <span class="risk-name">{name}</span></span><div class="risk-field"><div class="risk-field-label">Relevance</div><p>{relevance}</p></div><div class="risk-field"><div class="risk-field-label">Recommendations</div><p>{recommendations}</p></div></div>"#,
        name = html_escape(&item.risk.name),
        emoji = html_escape(&item.risk.emoji),
        relevance = html_escape(&item.relevance),
        recommendations = html_escape(&item.recommendations),
    )
}

fn link_card(link: &LinkEntry) -> String {
    format!(
        r#"<a class="report-link" data-key="{key}" href="{href}" target="_blank" rel="noreferrer">{title}</a>"#,
        key = html_escape(&link.url),
        href = html_escape(safe_href(&link.url)),
        title = html_escape(&link.title),
    )
}

/// Only web and mail links are navigable; anything else (e.g. `javascript:`)
/// is neutralised.
fn safe_href(url: &str) -> &str {
    let lower = url.trim_start().to_ascii_lowercase();
    let allowed = ["http://", "https://", "mailto:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme));
    if allowed { url } else { "#" }
}
