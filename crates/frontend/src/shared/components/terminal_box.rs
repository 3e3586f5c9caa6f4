//! TerminalBox: sample shell output in a window-like frame.

use leptos::prelude::*;

const FRAME_STYLE: &str = "border-radius: 10px; overflow: hidden; \
    box-shadow: 0 0 10px rgba(0,0,0,0.2); \
    font-family: Menlo, Consolas, monospace; margin-bottom: 1rem;";
const TITLE_BAR_STYLE: &str = "background: #ddd; padding: 0.5rem; display: flex; gap: 0.5rem;";
const OUTPUT_STYLE: &str = "background: #1e1e1e; color: #d4d4d4; margin: 0; padding: 1rem; \
    white-space: pre-wrap; font-size: 0.9rem;";

/// Close, minimize, maximize
const DOT_COLORS: [&str; 3] = ["#ff5f56", "#ffbd2e", "#27c93f"];

fn dot_style(color: &str) -> String {
    format!(
        "width: 12px; height: 12px; background: {}; border-radius: 50%;",
        color
    )
}

#[component]
pub fn TerminalBox(
    /// Text shown verbatim, whitespace preserved
    #[prop(into)]
    text: String,
) -> impl IntoView {
    view! {
        <div class="terminal-box" style=FRAME_STYLE>
            <div class="terminal-box__title" style=TITLE_BAR_STYLE>
                {DOT_COLORS
                    .iter()
                    .map(|color| view! { <span style=dot_style(color)></span> })
                    .collect_view()}
            </div>
            <pre class="terminal-box__output" style=OUTPUT_STYLE>{text}</pre>
        </div>
    }
}
