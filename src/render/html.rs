use crate::page::{
    node::{Element, Node, el},
    site::Site,
};

/// Document-level metadata.
#[derive(Clone, Copy, Debug)]
pub struct Head<'a> {
    pub title: &'a str,
    pub lang: &'a str,
    pub description: &'a str,
}

/// How the stylesheet and script reach the page.
#[derive(Clone, Copy, Debug)]
pub enum Assets<'a> {
    /// Relative hrefs to sibling files.
    Linked { stylesheet: &'a str, script: &'a str },
    /// Embedded in the document.
    Inline { css: &'a str, js: &'a str },
}

pub fn document(site: &Site, head: Head<'_>, assets: Assets<'_>) -> String {
    let mut head_el = el("head")
        .child(el("meta").attr("charset", "utf-8"))
        .child(
            el("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(
            el("meta")
                .attr("name", "description")
                .attr("content", head.description),
        )
        .child(el("title").text(head.title));

    let script: Element = match assets {
        Assets::Linked { stylesheet, script } => {
            head_el = head_el.child(el("link").attr("rel", "stylesheet").attr("href", stylesheet));
            el("script").attr("src", script).attr("defer", "")
        }
        Assets::Inline { css, js } => {
            head_el = head_el.child(el("style").child(Node::Raw(css.to_owned())));
            el("script").child(Node::Raw(js.to_owned()))
        }
    };

    let body = el("body").child(site.root.clone()).child(script);
    let html = el("html").attr("lang", head.lang).child(head_el).child(body);

    let mut out = String::from("<!DOCTYPE html>\n");
    html.write_html(&mut out);
    out.push('\n');
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/html.rs"]
mod tests;
