//! Quickstart doc page: two code tab groups kept in step, plus sample output.

use crate::shared::code_tabs::CodeTabs;
use crate::shared::components::terminal_box::TerminalBox;
use contracts::shared::code_tabs::TabNode;
use leptos::prelude::*;

const PY_INSTALL: &str = "pip install fastllm";
const NODE_INSTALL: &str = "npm install fastllm";
const SHELL_INSTALL: &str = "curl -fsSL https://fastllm.dev/install.sh | sh";

const PY_HELLO: &str = r#"from fastllm import Model

model = Model("tiny-chat")
print(model.generate("Hello!"))
"#;

const NODE_HELLO: &str = r#"import { Model } from "fastllm";

const model = new Model("tiny-chat");
console.log(await model.generate("Hello!"));
"#;

const SAMPLE_OUTPUT: &str = "$ python hello.py\nLoading tiny-chat... done\nHello! How can I help you today?";

#[component]
pub fn QuickstartPage() -> impl IntoView {
    view! {
        <article class="markdown">
            <h1>"Quickstart"</h1>

            <h2>"Install"</h2>
            <CodeTabs nodes=vec![
                TabNode::tab("python", PY_INSTALL),
                TabNode::other("\n"),
                TabNode::tab("node", NODE_INSTALL),
                TabNode::labeled("Shell", "plaintext", SHELL_INSTALL),
            ] />

            <h2>"Hello, model"</h2>
            <p>"Pick a language once; every example on the page follows."</p>
            <CodeTabs nodes=vec![
                TabNode::tab("python", PY_HELLO),
                TabNode::tab("node", NODE_HELLO),
            ] />

            <h2>"Output"</h2>
            <TerminalBox text=SAMPLE_OUTPUT />
        </article>
    }
}
