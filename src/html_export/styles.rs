//! CSS for rendered transcripts.
//!
//! Slate report panel, purple thinking bubble, neutral tool alerts. Colors
//! come from [`super::colors`] so the stylesheet and constants stay in sync.

use super::colors;
use tracing::debug;

/// Bundle of CSS styles for the template.
pub struct StyleBundle {
    /// Critical CSS inlined in the document
    pub critical_css: String,

    /// Print-specific CSS
    pub print_css: String,
}

/// Generate all CSS styles for the template.
pub fn generate_styles() -> StyleBundle {
    let critical_css = format!(
        "{}\n{}\n{}\n{}",
        root_variables(),
        CORE_STYLES,
        MESSAGE_STYLES,
        REPORT_STYLES
    );
    let print_css = PRINT_STYLES.to_string();
    debug!(
        component = "styles",
        operation = "generate",
        critical_bytes = critical_css.len(),
        print_bytes = print_css.len(),
        "Generated CSS styles"
    );
    StyleBundle {
        critical_css,
        print_css,
    }
}

fn root_variables() -> String {
    format!(
        ":root {{\n  --slate-50: {};\n  --slate-200: {};\n  --slate-500: {};\n  --slate-600: {};\n  --slate-800: {};\n  --slate-900: {};\n  --slate-950: {};\n  --purple-50: {};\n  --purple-200: {};\n  --purple-600: {};\n  --purple-700: {};\n  --success: {};\n}}",
        colors::SLATE_50,
        colors::SLATE_200,
        colors::SLATE_500,
        colors::SLATE_600,
        colors::SLATE_800,
        colors::SLATE_900,
        colors::SLATE_950,
        colors::PURPLE_50,
        colors::PURPLE_200,
        colors::PURPLE_600,
        colors::PURPLE_700,
        colors::SUCCESS,
    )
}

const CORE_STYLES: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
body {
  margin: 0;
  font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
  color: var(--slate-900);
  background: #fff;
}
.page { min-height: 100vh; padding: 2rem 1rem; }
.page-inner { max-width: 64rem; margin: 0 auto; }
.page-title { font-size: 1.5rem; font-weight: 600; margin: 0 0 1.5rem; }
.chat { border: 1px solid var(--slate-200); border-radius: 0.75rem; overflow: hidden; }
.chat-header { padding: 0.75rem 1rem; font-weight: 600; border-bottom: 1px solid var(--slate-200); }
.chat-messages { padding: 0 1rem; }
.lucide-icon { display: inline-block; vertical-align: middle; }
.lucide-spin { animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
"#;

const MESSAGE_STYLES: &str = r#"
.greeting { font-size: 1.25rem; font-weight: 600; letter-spacing: -0.01em; padding: 1rem 0; }
.tool-call {
  display: flex; align-items: center; gap: 0.75rem;
  margin: 0.75rem 0; padding: 0.75rem 1rem;
  border: 1px solid var(--slate-200); border-radius: 0.5rem;
}
.tool-call-complete .tool-call-icon { color: var(--success); }
.tool-call-title { font-weight: 500; }
.thinking { display: flex; align-items: flex-start; gap: 0.75rem; max-width: 42rem; padding: 1rem 0; }
.thinking-avatar {
  flex-shrink: 0; width: 2rem; height: 2rem; border-radius: 9999px;
  display: flex; align-items: center; justify-content: center;
  background: var(--purple-50); color: var(--purple-600);
}
.thinking-body { flex: 1; background: var(--purple-50); border: 1px solid var(--purple-200); border-radius: 0.5rem; padding: 1rem; }
.thinking-header { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 0.5rem; }
.thinking-label { font-size: 0.75rem; font-weight: 500; color: var(--purple-700); }
.thinking-dots span {
  display: inline-block; width: 0.375rem; height: 0.375rem; margin-right: 0.25rem;
  border-radius: 9999px; background: var(--purple-200); animation: bounce 1s infinite;
}
.thinking-dots span:nth-child(2) { animation-delay: 150ms; }
.thinking-dots span:nth-child(3) { animation-delay: 300ms; }
@keyframes bounce { 50% { transform: translateY(-25%); } }
.thinking-content { font-size: 0.875rem; white-space: pre-wrap; }
.thinking-toggle { list-style: none; cursor: pointer; }
.thinking-toggle::-webkit-details-marker { display: none; }
.thinking-preview { display: block; font-size: 0.875rem; white-space: pre-wrap; }
.thinking-collapse[open] .thinking-preview { display: none; }
.thinking-toggle-row {
  margin-top: 0.75rem; display: flex; align-items: center; gap: 0.25rem;
  font-size: 0.75rem; font-weight: 500; color: var(--purple-600);
}
.thinking-collapse[open] .thinking-toggle-row { margin-top: 0; }
.thinking-collapse[open] .thinking-toggle-row svg { transform: rotate(180deg); }
"#;

const REPORT_STYLES: &str = r#"
.report {
  margin: 1rem 0; overflow: hidden; border-radius: 1rem;
  border: 1px solid var(--slate-200); color: var(--slate-50);
  background: linear-gradient(to bottom, var(--slate-900), var(--slate-950));
}
.report-header {
  display: flex; align-items: center; justify-content: space-between; gap: 0.75rem;
  padding: 1rem 1.25rem; border-bottom: 1px solid rgba(255, 255, 255, 0.1);
}
.report-eyebrow { margin: 0; font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.22em; color: #cbd5e1; }
.report-heading { margin: 0; font-size: 1.125rem; font-weight: 600; }
.report-risk-strip { display: flex; gap: 0.5rem; padding: 0.25rem 0.75rem; border-radius: 9999px; background: rgba(255, 255, 255, 0.1); }
.badge { display: inline-flex; align-items: center; gap: 0.25rem; padding: 0.125rem 0.625rem; border-radius: 0.375rem; background: var(--slate-900); color: #fff; font-size: 0.875rem; }
.report-body { display: grid; gap: 1rem; padding: 1.25rem; background: #fff; color: var(--slate-900); }
.report-grid { display: grid; gap: 1rem; }
@media (min-width: 1024px) { .report-grid { grid-template-columns: 1fr 1fr; } }
.report-section { border: 1px solid var(--slate-200); border-radius: 0.5rem; padding: 1rem; background: rgba(255, 255, 255, 0.7); }
.report-section-title { font-size: 0.875rem; font-weight: 600; text-transform: uppercase; letter-spacing: 0.05em; color: var(--slate-600); margin-bottom: 0.5rem; }
.report-cards { display: grid; gap: 0.75rem; }
.report-card { padding: 0.75rem; }
.report-card-title { font-weight: 600; }
.report-card-subtitle { font-size: 0.875rem; color: var(--slate-600); }
.list-label { display: flex; justify-content: space-between; font-size: 0.875rem; }
.list-label-name { font-weight: 500; }
.list-label-value { color: var(--slate-600); }
.risk-card { border: 1px solid var(--slate-200); border-radius: 0.5rem; padding: 1rem; }
.risk-field-label { font-size: 0.75rem; font-weight: 600; text-transform: uppercase; color: var(--slate-500); }
.report-link {
  display: block; padding: 0.5rem 0.75rem; border: 1px solid var(--slate-200); border-radius: 0.5rem;
  color: var(--slate-800); font-size: 0.875rem; font-weight: 500; text-decoration: none;
}
.report-link:hover { border-color: #94a3b8; }
"#;

const PRINT_STYLES: &str = r#"
.thinking-toggle-row { display: none; }
.report { background: #fff; color: #000; }
.lucide-spin { animation: none; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_cover_every_view() {
        let bundle = generate_styles();
        for selector in [".greeting", ".tool-call", ".thinking", ".report", ".report-link"] {
            assert!(bundle.critical_css.contains(selector), "missing {selector}");
        }
        assert!(bundle.critical_css.contains(colors::PURPLE_50));
        assert!(bundle.print_css.contains(".thinking-toggle-row"));
        assert!(bundle.critical_css.contains(".thinking-collapse[open] .thinking-preview"));
    }
}
