use super::highlight::highlight;
use leptos::prelude::*;
use thaw::*;

/// Syntax-highlighted code display with a copy button.
///
/// `content` is shown as given; only HTML escaping and token spans are added.
#[component]
pub fn CodeBlock(
    /// Highlighter tag, e.g. "python" or "plaintext"
    #[prop(into)]
    language: String,
    /// Raw source text
    #[prop(into)]
    content: String,
) -> impl IntoView {
    let html = highlight(&language, &content);
    let class = format!("code-block language-{}", language);

    view! {
        <div class=class>
            <div class="code-block__toolbar">
                <span class="code-block__language">{language}</span>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let nav = window.navigator().clipboard();
                            let _ = nav.write_text(&content);
                        }
                    }
                >
                    "Copy"
                </Button>
            </div>
            <pre class="code-block__pre">
                <code inner_html=html></code>
            </pre>
        </div>
    }
}
