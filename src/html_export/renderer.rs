//! Assistant message to HTML rendering.
//!
//! Each message is first routed to a [`MessageView`] (greeting, tool status,
//! hiking report, thinking bubble or nothing) and the view is then serialized
//! to an HTML fragment.
//!
//! # Features
//!
//! - **Onboarding greeting**: the host's sentinel message renders a fixed greeting
//! - **Tool calls**: compact status alerts with check/loader icons
//! - **Hiking reports**: structured panel when the message carries a report payload
//! - **Thinking bubbles**: collapsible prose for everything else
//! - **XSS prevention**: all message content is escaped

use std::time::Instant;

use pulldown_cmark::{Event, Options, Parser, html};
use tracing::{debug, info, trace};

use super::icons::{ICON_CHECK, ICON_LOADER};
use super::report::render_report;
use super::template::{HtmlTemplate, html_escape};
use super::thinking::ThinkingBubble;
use crate::model::types::{HikingReport, RawMessage, ToolInvocation};
use crate::report::extract;

/// Message id the chat host uses for its opening message.
pub const ONBOARDING_SENTINEL: &str = "Let's plan your hike. Tell me where you want to go!";

pub const DEFAULT_GREETING: &str = "Hi! I'm Safehike, your safety-first hiking assistant. Let's plan a safe and enjoyable hike together!";

/// Thinking bubbles longer than this many UTF-16 units start collapsed.
pub const DEFAULT_TRUNCATE_AT: usize = 150;

pub const DEFAULT_PAGE_TITLE: &str = "Safehike: a safety-first hiking assistant";

pub const DEFAULT_CHAT_TITLE: &str = "Popup Assistant";

/// Options for rendering messages and transcript pages.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Message id that triggers the static greeting
    pub greeting_sentinel: String,

    /// Greeting shown for the sentinel message
    pub greeting_text: String,

    /// Collapse thinking bubbles longer than this (UTF-16 units)
    pub truncate_at: usize,

    /// Render thinking bubbles expanded instead of collapsed
    pub expand_thinking: bool,

    /// Document title for full pages
    pub page_title: String,

    /// Chat label for full pages
    pub chat_title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            greeting_sentinel: ONBOARDING_SENTINEL.to_string(),
            greeting_text: DEFAULT_GREETING.to_string(),
            truncate_at: DEFAULT_TRUNCATE_AT,
            expand_thinking: false,
            page_title: DEFAULT_PAGE_TITLE.to_string(),
            chat_title: DEFAULT_CHAT_TITLE.to_string(),
        }
    }
}

/// Status row for a tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolBadge {
    pub title: String,
    pub is_complete: bool,
}

impl ToolBadge {
    pub fn new(title: impl Into<String>, is_complete: bool) -> Self {
        Self {
            title: title.into(),
            is_complete,
        }
    }

    pub fn render(&self) -> String {
        let (status_class, icon) = if self.is_complete {
            ("tool-call-complete", ICON_CHECK)
        } else {
            ("tool-call-pending", ICON_LOADER)
        };
        format!(
            r#"<div class="tool-call {status_class}" role="alert">
    <span class="tool-call-icon" aria-hidden="true">{icon}</span>
    <div class="tool-call-title">{title}</div>
</div>"#,
            status_class = status_class,
            icon = icon,
            title = html_escape(&self.title),
        )
    }
}

/// What a single assistant message renders as.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageView {
    Greeting(String),
    ToolStatus(ToolBadge),
    Report(HikingReport),
    Thinking(ThinkingBubble),
    Empty,
}

impl MessageView {
    pub fn kind(&self) -> &'static str {
        match self {
            MessageView::Greeting(_) => "greeting",
            MessageView::ToolStatus(_) => "tool_status",
            MessageView::Report(_) => "report",
            MessageView::Thinking(_) => "thinking",
            MessageView::Empty => "empty",
        }
    }

    /// Serialize to an HTML fragment. `Empty` yields an empty string.
    pub fn to_html(&self) -> String {
        match self {
            MessageView::Greeting(text) => format!(
                r#"<div class="greeting">{}</div>"#,
                html_escape(text)
            ),
            MessageView::ToolStatus(badge) => badge.render(),
            MessageView::Report(report) => render_report(report),
            MessageView::Thinking(bubble) => bubble.render(),
            MessageView::Empty => String::new(),
        }
    }
}

/// Decide how a message renders. First match wins:
///
/// 1. onboarding sentinel id → greeting
/// 2. non-empty tool calls → tool status, always complete
/// 3. report payload while neither generating nor loading → report
/// 4. non-empty content → thinking bubble
/// 5. otherwise nothing
pub fn route_message(
    message: &RawMessage,
    is_generating: bool,
    is_loading: bool,
    options: &RenderOptions,
) -> MessageView {
    if message.id == options.greeting_sentinel {
        return MessageView::Greeting(options.greeting_text.clone());
    }

    // The message form carries no per-call status, so these always show as done.
    // In-flight calls surface through `render_tool_invocation` instead.
    if message.has_tool_calls() {
        return MessageView::ToolStatus(ToolBadge::new(
            message.name.clone().unwrap_or_default(),
            true,
        ));
    }

    let content = message.content.as_deref().unwrap_or("");

    if !is_generating
        && !is_loading
        && let Some(report) = extract(content)
    {
        return MessageView::Report(report);
    }

    if content.is_empty() {
        return MessageView::Empty;
    }

    let mut bubble = ThinkingBubble::new(content, options.truncate_at);
    if options.expand_thinking {
        bubble.toggle();
    }
    MessageView::Thinking(bubble)
}

/// Route and render a single message.
pub fn render_message(
    message: &RawMessage,
    is_generating: bool,
    is_loading: bool,
    options: &RenderOptions,
) -> String {
    let started = Instant::now();
    let view = route_message(message, is_generating, is_loading, options);
    trace!(
        component = "renderer",
        operation = "render_message",
        message_id = message.id.as_str(),
        view = view.kind(),
        is_generating,
        is_loading,
        "Routing message"
    );

    let rendered = view.to_html();

    debug!(
        component = "renderer",
        operation = "render_message_complete",
        message_id = message.id.as_str(),
        view = view.kind(),
        duration_ms = started.elapsed().as_millis(),
        bytes = rendered.len(),
        "Message rendered"
    );

    rendered
}

/// Default-tool hook: a badge whose completion follows the invocation status.
pub fn render_tool_invocation(invocation: &ToolInvocation) -> String {
    trace!(
        component = "renderer",
        operation = "render_tool_invocation",
        tool = invocation.name.as_str(),
        status = invocation.status.as_str(),
        "Rendering tool invocation"
    );
    ToolBadge::new(invocation.name.clone(), invocation.is_complete()).render()
}

/// Render messages in order, each with its own generation flags. Messages that
/// render nothing are skipped.
pub fn render_conversation(messages: &[RawMessage], options: &RenderOptions) -> String {
    let started = Instant::now();
    let mut html = String::with_capacity(messages.len() * 2000);

    info!(
        component = "renderer",
        operation = "render_conversation",
        message_count = messages.len(),
        "Rendering conversation"
    );

    for message in messages {
        let fragment = render_message(message, message.is_generating, message.is_loading, options);
        if fragment.is_empty() {
            continue;
        }
        html.push_str(&fragment);
        html.push('\n');
    }

    debug!(
        component = "renderer",
        operation = "render_conversation_complete",
        duration_ms = started.elapsed().as_millis(),
        bytes = html.len(),
        "Conversation rendered"
    );

    html
}

/// Render messages into a standalone HTML document.
pub fn render_page(messages: &[RawMessage], options: &RenderOptions) -> String {
    let body = render_conversation(messages, options);
    HtmlTemplate::new(&options.page_title, &options.chat_title).render(&body)
}

/// Convert markdown to HTML using pulldown-cmark.
/// Raw HTML in the input is escaped (XSS prevention).
pub(super) fn render_markdown(content: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(content, opts).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
