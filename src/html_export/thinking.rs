//! "Thinking" bubble: fallback view for assistant text that is not a report.

use std::borrow::Cow;

use tracing::{debug, trace};

use super::icons::{ICON_BRAIN, ICON_CHEVRON_DOWN};
use super::renderer::render_markdown;
use super::template::html_escape;

/// Appended to the preview when the content is cut.
pub const ELLIPSIS: &str = "...";

const SHOW_MORE: &str = "Show more";
const SHOW_LESS: &str = "Show less";

/// Collapsible prose bubble.
///
/// The only mutable state is `expanded`, which starts collapsed and changes
/// solely through [`ThinkingBubble::toggle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThinkingBubble {
    content: String,
    truncate_at: usize,
    expanded: bool,
}

impl ThinkingBubble {
    pub fn new(content: impl Into<String>, truncate_at: usize) -> Self {
        Self {
            content: content.into(),
            truncate_at,
            expanded: false,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Length is measured in UTF-16 code units, so an astral emoji counts
    /// twice, matching how browsers report string length.
    pub fn needs_truncation(&self) -> bool {
        self.content.encode_utf16().count() > self.truncate_at
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
        trace!(
            component = "thinking",
            operation = "toggle",
            expanded = self.expanded,
            "Thinking bubble toggled"
        );
    }

    /// Text shown in the current state, before markdown formatting.
    pub fn display_text(&self) -> Cow<'_, str> {
        if self.expanded || !self.needs_truncation() {
            return Cow::Borrowed(&self.content);
        }
        Cow::Owned(self.preview())
    }

    /// Collapsed form: as many whole chars as fit in `truncate_at` units,
    /// then the ellipsis. A surrogate pair is never split.
    fn preview(&self) -> String {
        let mut units = 0;
        let mut end = self.content.len();
        for (idx, c) in self.content.char_indices() {
            units += c.len_utf16();
            if units > self.truncate_at {
                end = idx;
                break;
            }
        }
        format!("{}{}", &self.content[..end], ELLIPSIS)
    }

    /// Label of the toggle control, or `None` when no control is shown.
    pub fn toggle_label(&self) -> Option<&'static str> {
        if !self.needs_truncation() {
            None
        } else if self.expanded {
            Some(SHOW_LESS)
        } else {
            Some(SHOW_MORE)
        }
    }

    /// Long content renders as a `<details>` element: the summary holds the
    /// preview and the toggle label, the body holds the full text. `open`
    /// mirrors `expanded`, and the page script keeps the label in sync when
    /// the reader clicks.
    pub fn render(&self) -> String {
        let body = match self.toggle_label() {
            Some(label) => {
                debug!(
                    component = "thinking",
                    operation = "collapse",
                    content_units = self.content.encode_utf16().count(),
                    truncate_at = self.truncate_at,
                    expanded = self.expanded,
                    "Collapsing long thinking bubble"
                );
                format!(
                    r#"<details class="thinking-collapse"{open}>
            <summary class="thinking-toggle" aria-expanded="{expanded}">
                <span class="thinking-preview">{preview}</span>
                <span class="thinking-toggle-row"><span class="thinking-toggle-label" data-collapsed="{more}" data-expanded="{less}">{label}</span>{chevron}</span>
            </summary>
            <div class="thinking-content">{content}</div>
        </details>"#,
                    open = if self.expanded { " open" } else { "" },
                    expanded = self.expanded,
                    preview = html_escape(&self.preview()),
                    more = SHOW_MORE,
                    less = SHOW_LESS,
                    label = label,
                    chevron = ICON_CHEVRON_DOWN,
                    content = render_markdown(&self.content),
                )
            }
            None => format!(
                r#"<div class="thinking-content">{}</div>"#,
                render_markdown(&self.content)
            ),
        };

        format!(
            r#"<div class="thinking">
    <div class="thinking-avatar" aria-hidden="true">{icon}</div>
    <div class="thinking-body">
        <div class="thinking-header">
            <span class="thinking-label">Thinking</span>
            <span class="thinking-dots" aria-hidden="true"><span></span><span></span><span></span></span>
        </div>
        {body}
    </div>
</div>"#,
            icon = ICON_BRAIN,
            body = body,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        let bubble = ThinkingBubble::new("a".repeat(200), 150);
        assert!(!bubble.expanded);
        assert_eq!(bubble.toggle_label(), Some("Show more"));
    }

    #[test]
    fn collapsed_shows_prefix_and_ellipsis() {
        let content: String = ('a'..='z').cycle().take(200).collect();
        let bubble = ThinkingBubble::new(content.clone(), 150);
        let expected = format!("{}...", &content[..150]);
        assert_eq!(bubble.display_text(), expected);
    }

    #[test]
    fn toggling_shows_everything_and_back() {
        let content = "b".repeat(200);
        let mut bubble = ThinkingBubble::new(content.clone(), 150);

        bubble.toggle();
        assert!(bubble.expanded);
        assert_eq!(bubble.display_text(), content);
        assert_eq!(bubble.toggle_label(), Some("Show less"));

        bubble.toggle();
        assert!(!bubble.expanded);
        assert!(bubble.display_text().ends_with(ELLIPSIS));
    }

    #[test]
    fn short_content_has_no_toggle() {
        let bubble = ThinkingBubble::new("Hello there", 150);
        assert!(!bubble.needs_truncation());
        assert_eq!(bubble.display_text(), "Hello there");
        assert_eq!(bubble.toggle_label(), None);

        let html = bubble.render();
        assert!(html.contains("Hello there"));
        assert!(!html.contains("thinking-toggle"));
    }

    #[test]
    fn exactly_threshold_is_not_truncated() {
        let bubble = ThinkingBubble::new("c".repeat(150), 150);
        assert!(!bubble.needs_truncation());
        assert_eq!(bubble.display_text().chars().count(), 150);
    }

    #[test]
    fn multibyte_content_is_cut_on_chars() {
        let content = "雪".repeat(151);
        let bubble = ThinkingBubble::new(content, 150);
        let shown = bubble.display_text();
        assert_eq!(shown.chars().count(), 153);
        assert!(shown.starts_with("雪雪雪"));
        assert!(shown.ends_with("雪..."));
    }

    #[test]
    fn astral_chars_count_as_two_units() {
        // 76 bears are 152 UTF-16 units.
        let content = "🐻".repeat(76);
        let bubble = ThinkingBubble::new(content, 150);
        assert!(bubble.needs_truncation());
        let shown = bubble.display_text();
        assert_eq!(shown, format!("{}...", "🐻".repeat(75)));

        let fits = ThinkingBubble::new("🐻".repeat(75), 150);
        assert!(!fits.needs_truncation());
    }

    #[test]
    fn cut_never_splits_a_surrogate_pair() {
        // 149 ASCII units then a bear straddling the threshold.
        let content = format!("{}🐻tail", "e".repeat(149));
        let bubble = ThinkingBubble::new(content, 150);
        assert_eq!(bubble.display_text(), format!("{}...", "e".repeat(149)));
    }

    #[test]
    fn render_marks_toggle_state() {
        let mut bubble = ThinkingBubble::new("d".repeat(160), 150);
        let collapsed = bubble.render();
        assert!(collapsed.contains(r#"<details class="thinking-collapse">"#));
        assert!(collapsed.contains(r#"aria-expanded="false""#));
        assert!(collapsed.contains(r#"data-expanded="Show less">Show more</span>"#));
        assert!(collapsed.contains("Thinking"));

        bubble.toggle();
        let expanded = bubble.render();
        assert!(expanded.contains(r#"<details class="thinking-collapse" open>"#));
        assert!(expanded.contains(r#"aria-expanded="true""#));
        assert!(expanded.contains(r#"data-expanded="Show less">Show less</span>"#));
        assert!(expanded.contains(&"d".repeat(160)));
    }

    #[test]
    fn collapsed_render_keeps_full_text_behind_summary() {
        let content = format!("{}TAILMARKER", "a".repeat(190));
        let bubble = ThinkingBubble::new(content, 150);
        assert!(!bubble.expanded);

        let html = bubble.render();
        let summary_end = html.find("</summary>").expect("summary");
        let (summary, body) = html.split_at(summary_end);
        assert!(summary.contains(&format!("{}...", "a".repeat(150))));
        assert!(!summary.contains("TAILMARKER"));
        assert!(body.contains("TAILMARKER"));
    }

    #[test]
    fn preview_is_escaped() {
        let bubble = ThinkingBubble::new(format!("<b>{}", "x".repeat(160)), 150);
        let html = bubble.render();
        assert!(html.contains("&lt;b&gt;xxx"));
        assert!(!html.contains("<b>xxx"));
    }

    #[test]
    fn markdown_is_formatted() {
        let bubble = ThinkingBubble::new("Checking **weather** now", 150);
        assert!(bubble.render().contains("<strong>weather</strong>"));
    }
}
