use crate::{animation::preset::PresetName, foundation::core::Millis};

/// Elements serialized without a closing tag.
const VOID_TAGS: [&str; 6] = ["br", "hr", "img", "input", "link", "meta"];

/// One node of the page tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Pre-escaped markup emitted verbatim (inline styles and scripts).
    Raw(String),
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Pre-order iterator over every element in this subtree, including `self`.
    pub fn elements(&self) -> Elements<'_> {
        Elements { stack: vec![self] }
    }

    pub fn find_all<P>(&self, pred: P) -> Vec<&Element>
    where
        P: Fn(&Element) -> bool,
    {
        self.elements().filter(|e| pred(e)).collect()
    }

    pub fn find<P>(&self, pred: P) -> Option<&Element>
    where
        P: Fn(&Element) -> bool,
    {
        self.elements().find(|e| pred(e))
    }

    /// Concatenated text of this subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(t) => out.push_str(t),
            Self::Raw(_) => {}
            Self::Element(e) => {
                for c in &e.children {
                    c.collect_text(out);
                }
            }
        }
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(t) => escape_text(t, out),
            Self::Raw(r) => out.push_str(r),
            Self::Element(e) => e.write_html(out),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Self::Element(e)
    }
}

pub struct Elements<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Elements<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if let Node::Element(e) = node {
                self.stack.extend(e.children.iter().rev());
                return Some(e);
            }
        }
        None
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>, // insertion order
    pub children: Vec<Node>,
}

/// Shorthand for [`Element::new`].
pub fn el(tag: &str) -> Element {
    Element::new(tag)
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_owned(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any earlier value.
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name.to_owned(), value)),
        }
    }

    /// Append space-separated classes.
    pub fn class(mut self, classes: &str) -> Self {
        let classes = classes.split_whitespace().collect::<Vec<_>>().join(" ");
        if classes.is_empty() {
            return self;
        }
        match self.attrs.iter_mut().find(|(k, _)| k == "class") {
            Some(slot) => {
                slot.1.push(' ');
                slot.1.push_str(&classes);
            }
            None => self.attrs.push(("class".to_owned(), classes)),
        }
        self
    }

    /// Inline CSS custom property or declaration, appended to `style`.
    pub fn style(mut self, property: &str, value: impl AsRef<str>) -> Self {
        self.push_style(property, value);
        self
    }

    pub fn push_style(&mut self, property: &str, value: impl AsRef<str>) {
        let decl = format!("{property}: {};", value.as_ref());
        match self.attrs.iter_mut().find(|(k, _)| k == "style") {
            Some(slot) => {
                slot.1.push(' ');
                slot.1.push_str(&decl);
            }
            None => self.attrs.push(("style".to_owned(), decl)),
        }
    }

    /// Attach an animation preset; the motion runtime picks it up by attribute.
    pub fn motion(self, preset: PresetName) -> Self {
        self.attr("data-motion", preset.as_str())
    }

    /// Attach a hover preset. Group presets also fire when the nearest
    /// `.hover-group` ancestor is hovered.
    pub fn hover(self, preset: PresetName) -> Self {
        self.attr("data-hover", preset.as_str())
    }

    /// Extra start offset on top of any inherited stagger.
    pub fn delay(self, by: Millis) -> Self {
        self.attr("data-delay", by.0.to_string())
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, s: impl Into<String>) -> Self {
        self.child(Node::Text(s.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|c| c.split_whitespace().any(|x| x == class))
    }

    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for c in &self.children {
            c.collect_text(&mut out);
        }
        out
    }

    pub fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (k, v) in &self.attrs {
            out.push(' ');
            out.push_str(k);
            out.push_str("=\"");
            escape_attr(v, out);
            out.push('"');
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }
        for c in &self.children {
            c.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

fn escape_text(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/node.rs"]
mod tests;
