use dioxus::prelude::*;
use pulldown_cmark::{html, CowStr, Event, LinkType, Options, Parser, Tag};

const SAFE_SCHEMES: [&str; 3] = ["http://", "https://", "mailto:"];

/// Whether a link or image target may be rendered as is.
fn is_safe_url(url: &str) -> bool {
    let url = url.trim().to_ascii_lowercase();
    SAFE_SCHEMES.iter().any(|scheme| url.starts_with(scheme))
}

fn sanitize_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

/// Renders Markdown to HTML, turning any raw HTML in the source into plain text.
///
/// Link and image targets outside `http`, `https` and `mailto` become `#`.
pub fn render_markdown(source: &str) -> String {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES;
    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        // Email autolinks hold a bare address; the renderer adds `mailto:`
        Event::Start(Tag::Link(LinkType::Email, url, title)) => {
            Event::Start(Tag::Link(LinkType::Email, url, title))
        }
        Event::Start(Tag::Link(kind, url, title)) => {
            Event::Start(Tag::Link(kind, sanitize_url(url), title))
        }
        Event::Start(Tag::Image(kind, url, title)) => {
            Event::Start(Tag::Image(kind, sanitize_url(url), title))
        }
        other => other,
    });

    let mut output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

#[component]
pub fn Markdown(content: String, class: Option<&'static str>) -> Element {
    let class: &str = class.unwrap_or_default();
    let rendered = render_markdown(&content);

    rsx!(
        div {
            class: "markdown {class}",
            dangerous_inner_html: "{rendered}",
        }
    )
}
