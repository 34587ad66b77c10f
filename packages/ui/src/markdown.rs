//! Markdown rendering for note bodies.

use dioxus::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser};

/// Render Markdown to HTML. Raw HTML in the source is escaped, not passed through.
pub fn render_markdown(source: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Read-only Markdown block.
#[component]
pub fn MarkdownView(content: String, #[props(default = "".to_string())] class: String) -> Element {
    let rendered = render_markdown(&content);
    rsx! {
        div {
            class: "markdown-body {class}",
            dangerous_inner_html: rendered,
        }
    }
}
