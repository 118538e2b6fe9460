//! Standalone HTML document shell for rendered transcripts.

use super::scripts::generate_scripts;
use super::styles::generate_styles;

/// Escape text for use in HTML element content and quoted attributes.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Document-level metadata for a rendered page.
#[derive(Debug, Clone)]
pub struct HtmlTemplate {
    /// `<title>` and page heading
    pub page_title: String,

    /// Label above the chat transcript
    pub chat_title: String,
}

impl HtmlTemplate {
    pub fn new(page_title: impl Into<String>, chat_title: impl Into<String>) -> Self {
        Self {
            page_title: page_title.into(),
            chat_title: chat_title.into(),
        }
    }

    /// Wrap already-rendered message fragments in a complete document.
    pub fn render(&self, messages_html: &str) -> String {
        let styles = generate_styles();
        let scripts = generate_scripts();
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>{critical_css}</style>
    <style media="print">{print_css}</style>
</head>
<body>
    <main class="page">
        <div class="page-inner">
            <h1 class="page-title">{title}</h1>
            <section class="chat" aria-label="{chat_title}">
                <header class="chat-header">{chat_title}</header>
                <div class="chat-messages">
{messages}
                </div>
            </section>
        </div>
    </main>
    <script>
{inline_js}
    </script>
</body>
</html>
"#,
            title = html_escape(&self.page_title),
            chat_title = html_escape(&self.chat_title),
            critical_css = styles.critical_css,
            print_css = styles.print_css,
            messages = messages_html,
            inline_js = scripts.inline_js,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(html_escape("槍ヶ岳 🏔"), "槍ヶ岳 🏔");
    }

    #[test]
    fn test_template_wraps_messages() {
        let template = HtmlTemplate::new("Safehike", "Popup Assistant");
        let html = template.render("<div class=\"marker\"></div>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Safehike</title>"));
        assert!(html.contains("Popup Assistant"));
        assert!(html.contains("<div class=\"marker\"></div>"));
        assert!(html.contains(".report"));
        assert!(html.contains("<script>"));
        assert!(html.contains("ThinkingToggles"));
    }

    #[test]
    fn test_template_escapes_titles() {
        let template = HtmlTemplate::new("<script>", "A & B");
        let html = template.render("");
        assert!(!html.contains("<title><script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("A &amp; B"));
    }
}
