//! PubMed search links and how they are displayed

/// Base URL of the PubMed web search
pub const PUBMED_SEARCH_URL: &str = "https://pubmed.ncbi.nlm.nih.gov/?term=";

/// Build a PubMed search URL for a finished search string
///
/// Spaces become `+`. Nothing else is encoded: PubMed accepts quotes,
/// brackets, parentheses and tildes raw in the `term` parameter.
///
/// # Example
///
/// ```
/// use pubmed_pairwise::link::{search_url, PUBMED_SEARCH_URL};
///
/// assert_eq!(search_url("a b"), format!("{PUBMED_SEARCH_URL}a+b"));
/// ```
pub fn search_url(query: &str) -> String {
    format!("{PUBMED_SEARCH_URL}{}", query.replace(' ', "+"))
}

/// Renders a URL for display
pub trait LinkRenderer {
    fn render(&self, url: &str, label: &str) -> String;
}

/// Bare URL
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainLink;

impl LinkRenderer for PlainLink {
    fn render(&self, url: &str, _label: &str) -> String {
        url.to_string()
    }
}

/// HTML anchor opening in a new tab
///
/// `url` and `label` are entity-escaped, so raw quotes in a proximity
/// search stay inside the `href` attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlLink;

impl LinkRenderer for HtmlLink {
    fn render(&self, url: &str, label: &str) -> String {
        format!(
            "<a href=\"{}\" target=\"_blank\">{}</a>",
            escape_html(url),
            escape_html(label)
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Markdown inline link
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownLink;

impl LinkRenderer for MarkdownLink {
    fn render(&self, url: &str, label: &str) -> String {
        format!("[{label}]({url})")
    }
}

/// Selects one of the built-in renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkStyle {
    #[default]
    Plain,
    Html,
    Markdown,
}

impl LinkStyle {
    pub fn renderer(&self) -> &'static dyn LinkRenderer {
        match self {
            LinkStyle::Plain => &PlainLink,
            LinkStyle::Html => &HtmlLink,
            LinkStyle::Markdown => &MarkdownLink,
        }
    }
}

impl LinkRenderer for LinkStyle {
    fn render(&self, url: &str, label: &str) -> String {
        self.renderer().render(url, label)
    }
}
