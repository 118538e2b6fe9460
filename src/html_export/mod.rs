//! HTML rendering for Safehike assistant messages.
//!
//! Every assistant message becomes one HTML fragment; a list of messages can
//! also be wrapped into a self-contained page (inline CSS and a small inline
//! script, no network resources).
//!
//! # Architecture
//!
//! ```text
//! html_export/
//! ├── mod.rs           # Module facade (this file)
//! ├── renderer.rs      # Message routing, tool badges, markdown
//! ├── report.rs        # Hiking report panel
//! ├── thinking.rs      # Collapsible "Thinking" bubble
//! ├── template.rs      # Page shell + escaping
//! ├── styles.rs        # CSS
//! ├── scripts.rs       # Inline JS for the thinking toggle
//! └── icons.rs         # Lucide SVG icons
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use safehike::html_export::{RenderOptions, render_message};
//!
//! let html = render_message(&message, false, false, &RenderOptions::default());
//! ```

mod icons;
mod renderer;
mod report;
mod scripts;
mod styles;
mod template;
mod thinking;

// Re-export public API
pub use renderer::{
    DEFAULT_CHAT_TITLE, DEFAULT_GREETING, DEFAULT_PAGE_TITLE, DEFAULT_TRUNCATE_AT, MessageView,
    ONBOARDING_SENTINEL, RenderOptions, ToolBadge, render_conversation, render_message,
    render_page, render_tool_invocation, route_message,
};
pub use report::render_report;
pub use scripts::{ScriptBundle, generate_scripts};
pub use styles::{StyleBundle, generate_styles};
pub use template::{HtmlTemplate, html_escape};
pub use thinking::{ELLIPSIS, ThinkingBubble};

/// Palette shared by the stylesheet: slate report panel, purple thinking bubble.
pub mod colors {
    /// Report header text (#f8fafc)
    pub const SLATE_50: &str = "#f8fafc";

    /// Card borders (#e2e8f0)
    pub const SLATE_200: &str = "#e2e8f0";

    /// Field labels (#64748b)
    pub const SLATE_500: &str = "#64748b";

    /// Section titles, secondary values (#475569)
    pub const SLATE_600: &str = "#475569";

    /// Body prose (#1e293b)
    pub const SLATE_800: &str = "#1e293b";

    /// Report header background, badges (#0f172a)
    pub const SLATE_900: &str = "#0f172a";

    /// Report header gradient end (#020617)
    pub const SLATE_950: &str = "#020617";

    /// Thinking bubble background (#faf5ff)
    pub const PURPLE_50: &str = "#faf5ff";

    /// Thinking bubble border, bouncing dots (#e9d5ff)
    pub const PURPLE_200: &str = "#e9d5ff";

    /// Thinking avatar icon, toggle control (#9333ea)
    pub const PURPLE_600: &str = "#9333ea";

    /// "Thinking" label (#7e22ce)
    pub const PURPLE_700: &str = "#7e22ce";

    /// Completed tool call check (#16a34a)
    pub const SUCCESS: &str = "#16a34a";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_are_valid_hex() {
        let all_colors = [
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
        ];

        for color in all_colors {
            assert!(
                color.starts_with('#') && color.len() == 7,
                "Invalid color format: {}",
                color
            );
            assert!(
                color[1..].chars().all(|c| c.is_ascii_hexdigit()),
                "Invalid hex in color: {}",
                color
            );
        }
    }
}
