#![forbid(unsafe_code)]

//! Minimal renderable node tree.
//!
//! Just enough HTML to carry identifiers, classes, wrappers and decoys.
//! Text and attribute values are escaped on output; tag and attribute names
//! are trusted.

use std::fmt;

/// Tags laid out as blocks by default.
pub const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "details", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5",
    "h6", "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table",
    "tbody", "td", "tfoot", "th", "thead", "tr", "ul",
];

/// Tags with no closing tag.
pub const VOID_TAGS: &[&str] = &[
    "area", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Fragment(Vec<Node>),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    #[must_use]
    pub fn fragment(children: Vec<Node>) -> Self {
        Self::Fragment(children)
    }

    /// Elements report their own tag; a fragment is block-level when any
    /// child is. Text is always inline.
    #[must_use]
    pub fn is_block_level(&self) -> bool {
        match self {
            Self::Element(element) => element.is_block_level(),
            Self::Text(_) => false,
            Self::Fragment(children) => children.iter().any(Self::is_block_level),
        }
    }

    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Number of element nodes in the tree.
    #[must_use]
    pub fn element_count(&self) -> usize {
        match self {
            Self::Element(element) => {
                1 + element.children.iter().map(Self::element_count).sum::<usize>()
            }
            Self::Text(_) => 0,
            Self::Fragment(children) => children.iter().map(Self::element_count).sum(),
        }
    }

    /// Serialize to HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(element) => fmt::Display::fmt(element, f),
            Self::Text(text) => write!(f, "{}", v_htmlescape::escape(text)),
            Self::Fragment(children) => children.iter().try_for_each(|child| fmt::Display::fmt(child, f)),
        }
    }
}

/// An element with ordered attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Builder: set an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder: set a valueless attribute such as `hidden`.
    #[must_use]
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.attr(name, "")
    }

    /// Builder: append a child.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Set or replace an attribute, keeping its original position.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.attrs.push((name, value)),
        }
    }

    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let index = self.attrs.iter().position(|(existing, _)| existing == name)?;
        Some(self.attrs.remove(index).1)
    }

    /// Append classes, skipping ones already present.
    pub fn add_class(&mut self, classes: &str) {
        let mut current: Vec<String> = self
            .get_attr("class")
            .map(|value| value.split_whitespace().map(str::to_owned).collect())
            .unwrap_or_default();
        for class in classes.split_whitespace() {
            if !current.iter().any(|existing| existing == class) {
                current.push(class.to_owned());
            }
        }
        if !current.is_empty() {
            self.set_attr("class", current.join(" "));
        }
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    #[must_use]
    pub fn is_block_level(&self) -> bool {
        BLOCK_TAGS.contains(&self.tag.to_ascii_lowercase().as_str())
    }

    #[must_use]
    pub fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag.to_ascii_lowercase().as_str())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            if value.is_empty() {
                write!(f, " {name}")?;
            } else {
                write!(f, " {name}=\"{}\"", v_htmlescape::escape(value))?;
            }
        }
        f.write_str(">")?;
        if self.is_void() {
            return Ok(());
        }
        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}
