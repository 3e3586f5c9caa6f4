//! Small keyword highlighter for code blocks.
//!
//! Produces escaped HTML with `<span class="token-*">` wrappers. Languages
//! without a rule set come out as escaped text.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    Python,
    JavaScript,
    Plain,
}

impl Syntax {
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "python" | "py" => Syntax::Python,
            "javascript" | "js" | "node" => Syntax::JavaScript,
            _ => Syntax::Plain,
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Syntax::Python => &[
                "and", "as", "async", "await", "break", "class", "continue", "def", "del",
                "elif", "else", "except", "False", "finally", "for", "from", "if", "import",
                "in", "is", "lambda", "None", "not", "or", "pass", "raise", "return", "True",
                "try", "while", "with", "yield",
            ],
            Syntax::JavaScript => &[
                "async", "await", "break", "case", "catch", "class", "const", "continue",
                "default", "else", "export", "false", "finally", "for", "from", "function", "if",
                "import", "in", "let", "new", "null", "of", "return", "switch", "this", "throw",
                "true", "try", "typeof", "undefined", "var", "while",
            ],
            Syntax::Plain => &[],
        }
    }

    fn line_comment(&self) -> Option<&'static str> {
        match self {
            Syntax::Python => Some("#"),
            Syntax::JavaScript => Some("//"),
            Syntax::Plain => None,
        }
    }

    fn is_quote(&self, ch: char) -> bool {
        match self {
            Syntax::Python => ch == '"' || ch == '\'',
            Syntax::JavaScript => ch == '"' || ch == '\'' || ch == '`',
            Syntax::Plain => false,
        }
    }
}

/// Highlight `source` for the given language tag
pub fn highlight(language: &str, source: &str) -> String {
    let syntax = Syntax::from_tag(language);
    if syntax == Syntax::Plain {
        return html_escape(source);
    }

    let chars: Vec<char> = source.chars().collect();
    let len = chars.len();
    let mut result = String::with_capacity(source.len());
    let mut i = 0;

    while i < len {
        let ch = chars[i];

        if let Some(marker) = syntax.line_comment() {
            if starts_with_at(&chars, i, marker) {
                let end = chars[i..]
                    .iter()
                    .position(|c| *c == '\n')
                    .map_or(len, |p| i + p);
                push_token(&mut result, "token-comment", &chars[i..end]);
                i = end;
                continue;
            }
        }

        if syntax.is_quote(ch) {
            let mut end = i + 1;
            while end < len && chars[end] != ch {
                if chars[end] == '\\' {
                    end += 1;
                }
                end += 1;
            }
            // Include closing quote; unclosed strings run to the end
            let end = (end + 1).min(len);
            push_token(&mut result, "token-string", &chars[i..end]);
            i = end;
            continue;
        }

        if ch.is_ascii_digit() {
            let mut end = i;
            while end < len && (chars[end].is_ascii_alphanumeric() || chars[end] == '.' || chars[end] == '_') {
                end += 1;
            }
            push_token(&mut result, "token-number", &chars[i..end]);
            i = end;
            continue;
        }

        if ch.is_alphabetic() || ch == '_' || ch == '$' {
            let mut end = i;
            while end < len && (chars[end].is_alphanumeric() || chars[end] == '_' || chars[end] == '$') {
                end += 1;
            }
            let word: String = chars[i..end].iter().collect();
            if syntax.keywords().contains(&word.as_str()) {
                push_token(&mut result, "token-keyword", &chars[i..end]);
            } else {
                result.push_str(&html_escape(&word));
            }
            i = end;
            continue;
        }

        push_escaped(&mut result, ch);
        i += 1;
    }

    result
}

fn starts_with_at(chars: &[char], at: usize, marker: &str) -> bool {
    let mut idx = at;
    for m in marker.chars() {
        if idx >= chars.len() || chars[idx] != m {
            return false;
        }
        idx += 1;
    }
    true
}

fn push_token(out: &mut String, class: &str, text: &[char]) {
    out.push_str("<span class=\"");
    out.push_str(class);
    out.push_str("\">");
    for ch in text {
        push_escaped(out, *ch);
    }
    out.push_str("</span>");
}

fn push_escaped(out: &mut String, ch: char) {
    match ch {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(ch),
    }
}

/// Simple HTML escape
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        push_escaped(&mut out, ch);
    }
    out
}
