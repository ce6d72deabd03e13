#![forbid(unsafe_code)]

//! Owned XML element tree with a deterministic renderer.
//!
//! Serialization never consults external state: the same tree always
//! renders to the same bytes. Namespace declarations are emitted on the
//! outermost element that needs them and inherited by descendants.

/// An attribute on an [`XmlNode`].
///
/// Plain attributes (`Algorithm`, `Id`, ...) carry no namespace. Namespaced
/// attributes keep their prefix so foreign markup survives a round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlAttr {
    pub prefix: Option<String>,
    pub ns: Option<String>,
    pub name: String,
    pub value: String,
}

/// A child of an [`XmlNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlChild {
    Element(XmlNode),
    Text(String),
    Comment(String),
}

/// An owned XML element: namespace, local name, ordered attributes and
/// ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    ns: Option<String>,
    prefix: Option<String>,
    local: String,
    attrs: Vec<XmlAttr>,
    children: Vec<XmlChild>,
}

impl XmlNode {
    /// Create an element under the given namespace and local name.
    pub fn new(ns: Option<&str>, prefix: Option<&str>, local: &str) -> Self {
        Self {
            ns: ns.map(str::to_owned),
            prefix: prefix.map(str::to_owned),
            local: local.to_owned(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an un-namespaced attribute. Attributes render in insertion order.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attrs.push(XmlAttr {
            prefix: None,
            ns: None,
            name: name.to_owned(),
            value: value.to_owned(),
        });
    }

    /// Replace all children with a single text node.
    pub fn set_text(&mut self, text: &str) {
        self.children.clear();
        self.children.push(XmlChild::Text(text.to_owned()));
    }

    /// Append a child element.
    pub fn append(&mut self, child: XmlNode) {
        self.children.push(XmlChild::Element(child));
    }

    pub fn namespace(&self) -> Option<&str> {
        self.ns.as_deref()
    }

    pub fn local_name(&self) -> &str {
        &self.local
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.ns.is_none() && a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn attributes(&self) -> &[XmlAttr] {
        &self.attrs
    }

    pub fn children(&self) -> &[XmlChild] {
        &self.children
    }

    /// Direct child elements, in document order.
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlNode> {
        self.children.iter().filter_map(|c| match c {
            XmlChild::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Concatenated direct text content.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            if let XmlChild::Text(t) = child {
                out.push_str(t);
            }
        }
        out
    }

    /// Build an owned copy of a parsed element, preserving attributes and
    /// text/comment/element children in document order.
    pub fn from_node(node: roxmltree::Node<'_, '_>) -> Self {
        let ns = node.tag_name().namespace().map(str::to_owned);
        let prefix = ns
            .as_deref()
            .and_then(|uri| prefix_for(node, uri))
            .map(str::to_owned);

        let attrs = node
            .attributes()
            .map(|a| XmlAttr {
                prefix: a
                    .namespace()
                    .and_then(|uri| prefix_for(node, uri))
                    .map(str::to_owned),
                ns: a.namespace().map(str::to_owned),
                name: a.name().to_owned(),
                value: a.value().to_owned(),
            })
            .collect();

        let children = node
            .children()
            .filter_map(|c| {
                if c.is_element() {
                    Some(XmlChild::Element(Self::from_node(c)))
                } else if c.is_text() {
                    c.text().map(|t| XmlChild::Text(t.to_owned()))
                } else if c.is_comment() {
                    c.text().map(|t| XmlChild::Comment(t.to_owned()))
                } else {
                    None
                }
            })
            .collect();

        Self {
            ns,
            prefix,
            local: node.tag_name().name().to_owned(),
            attrs,
            children,
        }
    }

    /// Render this tree to an XML string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut scope: Vec<(String, String)> = Vec::new();
        self.render_into(&mut out, &mut scope);
        out
    }

    fn render_into(&self, out: &mut String, scope: &mut Vec<(String, String)>) {
        let depth = scope.len();

        let qname = match &self.prefix {
            Some(p) => format!("{p}:{}", self.local),
            None => self.local.clone(),
        };
        out.push('<');
        out.push_str(&qname);

        match &self.ns {
            Some(ns) => {
                let p = self.prefix.clone().unwrap_or_default();
                if bound(scope, &p) != Some(ns.as_str()) {
                    if p.is_empty() {
                        out.push_str(&format!(" xmlns=\"{}\"", escape_attr(ns)));
                    } else {
                        out.push_str(&format!(" xmlns:{p}=\"{}\"", escape_attr(ns)));
                    }
                    scope.push((p, ns.clone()));
                }
            }
            None => {
                // Undeclare an inherited default namespace.
                if bound(scope, "").is_some_and(|ns| !ns.is_empty()) {
                    out.push_str(" xmlns=\"\"");
                    scope.push((String::new(), String::new()));
                }
            }
        }

        for a in &self.attrs {
            if let (Some(p), Some(ns)) = (&a.prefix, &a.ns) {
                if p != "xml" && bound(scope, p) != Some(ns.as_str()) {
                    out.push_str(&format!(" xmlns:{p}=\"{}\"", escape_attr(ns)));
                    scope.push((p.clone(), ns.clone()));
                }
            }
        }

        for a in &self.attrs {
            out.push(' ');
            if let Some(p) = &a.prefix {
                out.push_str(p);
                out.push(':');
            }
            out.push_str(&a.name);
            out.push_str("=\"");
            out.push_str(&escape_attr(&a.value));
            out.push('"');
        }

        if self.children.is_empty() {
            out.push_str("/>");
        } else {
            out.push('>');
            for child in &self.children {
                match child {
                    XmlChild::Element(e) => e.render_into(out, scope),
                    XmlChild::Text(t) => out.push_str(&escape_text(t)),
                    XmlChild::Comment(t) => {
                        out.push_str("<!--");
                        out.push_str(t);
                        out.push_str("-->");
                    }
                }
            }
            out.push_str("</");
            out.push_str(&qname);
            out.push('>');
        }

        scope.truncate(depth);
    }
}

/// Resolve the prefix a namespace URI is bound to at `node`.
///
/// Returns `None` for the default namespace, so re-rendering keeps
/// unprefixed markup unprefixed.
fn prefix_for<'a>(node: roxmltree::Node<'a, '_>, uri: &str) -> Option<&'a str> {
    node.namespaces()
        .find(|n| n.uri() == uri)
        .and_then(|n| n.name())
}

fn bound<'a>(scope: &'a [(String, String)], prefix: &str) -> Option<&'a str> {
    scope
        .iter()
        .rev()
        .find(|(p, _)| p == prefix)
        .map(|(_, ns)| ns.as_str())
}

/// Escape text node content.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\r' => out.push_str("&#xD;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape attribute values.
fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            '\t' => out.push_str("&#x9;"),
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_element() {
        let e = XmlNode::new(Some("urn:test"), Some("t"), "Empty");
        assert_eq!(e.render(), "<t:Empty xmlns:t=\"urn:test\"/>");
    }

    #[test]
    fn test_render_text_and_attribute() {
        let mut e = XmlNode::new(Some("urn:test"), Some("t"), "Leaf");
        e.set_attribute("Id", "abc123");
        e.set_text("a<b&c");
        assert_eq!(
            e.render(),
            "<t:Leaf xmlns:t=\"urn:test\" Id=\"abc123\">a&lt;b&amp;c</t:Leaf>"
        );
    }

    #[test]
    fn test_namespace_declared_once() {
        let mut parent = XmlNode::new(Some("urn:test"), Some("t"), "Parent");
        parent.append(XmlNode::new(Some("urn:test"), Some("t"), "Child"));
        assert_eq!(
            parent.render(),
            "<t:Parent xmlns:t=\"urn:test\"><t:Child/></t:Parent>"
        );
    }

    #[test]
    fn test_foreign_child_declares_its_namespace() {
        let mut parent = XmlNode::new(Some("urn:a"), Some("a"), "P");
        parent.append(XmlNode::new(Some("urn:b"), Some("b"), "C"));
        assert_eq!(
            parent.render(),
            "<a:P xmlns:a=\"urn:a\"><b:C xmlns:b=\"urn:b\"/></a:P>"
        );
    }

    #[test]
    fn test_default_namespace() {
        let mut parent = XmlNode::new(Some("urn:a"), None, "P");
        parent.append(XmlNode::new(None, None, "C"));
        assert_eq!(parent.render(), "<P xmlns=\"urn:a\"><C xmlns=\"\"/></P>");
    }

    #[test]
    fn test_attribute_escaping() {
        let mut e = XmlNode::new(None, None, "E");
        e.set_attribute("v", "a\"b\nc");
        assert_eq!(e.render(), "<E v=\"a&quot;b&#xA;c\"/>");
    }

    #[test]
    fn test_from_node_round_trip() {
        let xml = "<t:Outer xmlns:t=\"urn:test\" Id=\"x\"><t:Inner>hi</t:Inner><!--note--></t:Outer>";
        let doc = roxmltree::Document::parse(xml).unwrap();
        let owned = XmlNode::from_node(doc.root_element());
        assert_eq!(owned.render(), xml);
    }

    #[test]
    fn test_from_node_preserves_default_namespace() {
        let xml = "<Outer xmlns=\"urn:test\"><Inner/></Outer>";
        let doc = roxmltree::Document::parse(xml).unwrap();
        let owned = XmlNode::from_node(doc.root_element());
        assert_eq!(owned.render(), xml);
    }
}
