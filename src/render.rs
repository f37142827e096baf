//! Transcript rendering
//!
//! User and error text is escaped literally. Assistant text is markdown,
//! rendered with every link opening in a new tab without an opener reference.

mod transcript;

pub use transcript::{ScrollRequest, Transcript, WELCOME_TEXT};

use crate::state_machine::{Role, Turn};
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

/// Escape text for use in HTML element content or a quoted attribute
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Render markdown to an HTML fragment.
///
/// Links get `target="_blank" rel="noopener noreferrer"`. Script URLs in
/// links and images are dropped. Raw HTML in the source is shown as text.
pub fn render_markdown(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let events = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Start(Tag::Link {
            dest_url, title, ..
        }) => Event::InlineHtml(CowStr::from(link_open_tag(&dest_url, &title))),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) if is_script_url(&dest_url) => Event::Start(Tag::Image {
            link_type,
            dest_url: CowStr::Borrowed(""),
            title,
            id,
        }),
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

fn link_open_tag(dest_url: &str, title: &str) -> String {
    let href = if is_script_url(dest_url) {
        "#"
    } else {
        dest_url
    };
    let mut tag = format!("<a href=\"{}\"", escape_html(href));
    if !title.is_empty() {
        tag.push_str(&format!(" title=\"{}\"", escape_html(title)));
    }
    tag.push_str(" target=\"_blank\" rel=\"noopener noreferrer\">");
    tag
}

fn is_script_url(url: &str) -> bool {
    let compact = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_lowercase();
    ["javascript:", "vbscript:", "data:"]
        .iter()
        .any(|scheme| compact.starts_with(scheme))
}

/// A turn ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    pub role: Role,
    pub header: &'static str,
    /// Source text of the turn
    pub text: String,
    /// Escaped or markdown-rendered body
    pub body_html: String,
}

impl RenderedBlock {
    pub fn from_turn(turn: &Turn) -> Self {
        let body_html = match turn.role {
            Role::User | Role::Error => escape_html(&turn.content),
            Role::Agent => render_markdown(&turn.content),
        };
        Self {
            role: turn.role,
            header: role_header(turn.role),
            text: turn.content.clone(),
            body_html,
        }
    }

    /// CSS classes of the message container
    pub fn class(&self) -> String {
        format!("chat-message {}-message", self.role.as_str())
    }

    pub fn to_html(&self) -> String {
        let (header_attrs, content_class) = match self.role {
            Role::User => ("", "message-content"),
            Role::Agent => ("", "message-content markdown-content"),
            Role::Error => (" style=\"color: #ef4444;\"", "message-content"),
        };
        format!(
            "<div class=\"{}\"><div class=\"message-header\"{header_attrs}>{}</div><div class=\"{content_class}\">{}</div></div>",
            self.class(),
            self.header,
            self.body_html,
        )
    }
}

pub fn role_header(role: Role) -> &'static str {
    match role {
        Role::User => "You",
        Role::Agent => "AI Assistant",
        Role::Error => "Error",
    }
}
