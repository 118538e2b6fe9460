//! JavaScript generation for HTML export.
//!
//! Thinking bubbles are native `<details>` elements, so expanding and
//! collapsing works without any script. The script only keeps the toggle
//! label and `aria-expanded` in step with the element's `open` state.

use tracing::debug;

/// Bundle of JavaScript for the template.
pub struct ScriptBundle {
    /// Inline JavaScript to include in the document
    pub inline_js: String,
}

/// Generate all JavaScript for the template.
pub fn generate_scripts() -> ScriptBundle {
    let inline_js = [generate_thinking_toggle_js(), generate_init_js()].join("\n\n");
    debug!(
        component = "scripts",
        operation = "generate",
        inline_bytes = inline_js.len(),
        "Generated inline scripts"
    );
    ScriptBundle { inline_js }
}

fn generate_thinking_toggle_js() -> String {
    r#"// Thinking bubble expand/collapse
const ThinkingToggles = {
    init() {
        document.querySelectorAll('details.thinking-collapse').forEach((details) => {
            details.addEventListener('toggle', () => this.sync(details));
            this.sync(details);
        });
    },

    sync(details) {
        const summary = details.querySelector('.thinking-toggle');
        const label = details.querySelector('.thinking-toggle-label');
        if (summary) {
            summary.setAttribute('aria-expanded', details.open ? 'true' : 'false');
        }
        if (label) {
            label.textContent = details.open ? label.dataset.expanded : label.dataset.collapsed;
        }
    }
};"#
    .to_string()
}

fn generate_init_js() -> String {
    r#"document.addEventListener('DOMContentLoaded', () => {
    ThinkingToggles.init();
});"#
        .to_string()
}
