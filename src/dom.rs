//! Page document: a `scraper::Html` tree mutated in place, plus a builder for
//! detached element subtrees that get grafted into it.

use ego_tree::Tree;
use html5ever::{LocalName, QualName, namespace_url, ns};
use scraper::node::{Element, Text};
use scraper::{ElementRef, Html, Node, Selector, StrTendril};

pub use ego_tree::NodeId;

fn element_name(tag: &str) -> QualName {
    QualName::new(None, ns!(html), LocalName::from(tag))
}

fn attribute_name(name: &str) -> QualName {
    QualName::new(None, ns!(), LocalName::from(name))
}

/// Sets or replaces an attribute, keeping the position of an existing one.
fn set_attr(element: &mut Element, name: &str, value: String) {
    element.attrs.insert(attribute_name(name), StrTendril::from(value));
}

/// Detached element under construction.
#[derive(Debug, Clone)]
pub struct ElementNode {
    tree: Tree<Node>,
}

impl ElementNode {

    pub fn new(tag: &str) -> Self {
        let element = Element::new(element_name(tag), Vec::new());
        Self { tree: Tree::new(Node::Element(element)) }
    }

    #[must_use]
    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    #[must_use]
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        if let Node::Element(element) = self.tree.root_mut().value() {
            set_attr(element, name, value.into());
        }
        self
    }

    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.tree.root_mut().append_subtree(child.tree);
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = Text { text: StrTendril::from(text.into()) };
        self.tree.root_mut().append(Node::Text(text));
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        for child in children {
            self.tree.root_mut().append_subtree(child.tree);
        }
        self
    }

    #[must_use]
    pub fn child_count(&self) -> usize {
        self.tree.root().children().count()
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    html: Html,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {

    #[must_use]
    pub fn new() -> Self {
        Self { html: Html::new_document() }
    }

    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.html.tree.root().id()
    }

    /// Grafts `node` as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, node: ElementNode) -> Option<NodeId> {
        let mut parent = self.html.tree.get_mut(parent)?;
        Some(parent.append_subtree(node.tree).id())
    }

    /// Grafts `node` ahead of every existing child of `parent`.
    pub fn prepend(&mut self, parent: NodeId, node: ElementNode) -> Option<NodeId> {
        let mut parent = self.html.tree.get_mut(parent)?;
        Some(parent.prepend_subtree(node.tree).id())
    }

    fn clear_children(&mut self, parent: NodeId) {
        for child in self.children(parent) {
            if let Some(mut child) = self.html.tree.get_mut(child) {
                child.detach();
            }
        }
    }

    /// Detaches every child of `parent` and grafts `nodes` in their place.
    pub fn replace_children(&mut self, parent: NodeId, nodes: Vec<ElementNode>) {
        self.clear_children(parent);
        for node in nodes {
            self.append(parent, node);
        }
    }

    /// Parses `html` as body content and makes it the only content of `parent`,
    /// like an `innerHTML` assignment.
    pub fn set_inner_html(&mut self, parent: NodeId, html: &str) {
        let fragment = Html::parse_fragment(html);
        self.clear_children(parent);

        // fragment root > <html> wrapper > parsed nodes
        let merged = self.html.tree.extend_tree(fragment.tree).id();
        let content: Vec<NodeId> = self
            .html
            .tree
            .get(merged)
            .into_iter()
            .flat_map(|root| root.children())
            .filter(|wrapper| wrapper.value().is_element())
            .flat_map(|wrapper| wrapper.children())
            .map(|node| node.id())
            .collect();

        if let Some(mut parent) = self.html.tree.get_mut(parent) {
            for node in content {
                parent.append_id(node);
            }
        }
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.html
            .tree
            .get(id)
            .map(|node| node.children().map(|child| child.id()).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.html.tree.get(id)?.parent().map(|parent| parent.id())
    }

    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.html.tree.get(id)?.value().as_element()
    }

    fn element_ref(&self, id: NodeId) -> Option<ElementRef<'_>> {
        ElementRef::wrap(self.html.tree.get(id)?)
    }

    /// Elements below `scope` matching `selectors`, in document order. Detached
    /// nodes never match. An invalid selector matches nothing.
    #[must_use]
    pub fn select(&self, scope: NodeId, selectors: &str) -> Vec<NodeId> {
        let Ok(selector) = Selector::parse(selectors) else {
            return Vec::new();
        };

        self.html
            .tree
            .get(scope)
            .into_iter()
            .flat_map(|scope| scope.descendants().skip(1))
            .filter(|node| ElementRef::wrap(*node).is_some_and(|element| selector.matches(&element)))
            .map(|node| node.id())
            .collect()
    }

    #[must_use]
    pub fn select_first(&self, scope: NodeId, selectors: &str) -> Option<NodeId> {
        self.select(scope, selectors).into_iter().next()
    }

    #[must_use]
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.select_first(self.root(), &format!("#{id}"))
    }

    #[must_use]
    pub fn matches(&self, id: NodeId, selectors: &str) -> bool {
        let Ok(selector) = Selector::parse(selectors) else {
            return false;
        };
        self.element_ref(id).is_some_and(|element| selector.matches(&element))
    }

    /// Inclusive, like `Node.contains`.
    #[must_use]
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.html.tree.get(node).is_some_and(|node| {
            node.id() == ancestor || node.ancestors().any(|parent| parent.id() == ancestor)
        })
    }

    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        self.element_ref(id)
            .map(|element| element.text().collect())
            .unwrap_or_default()
    }

    /// Value of the `display` declaration in the inline style, if any.
    #[must_use]
    pub fn display(&self, id: NodeId) -> Option<String> {
        let style = self.element(id)?.attr("style")?;
        style
            .split(';')
            .filter_map(|declaration| declaration.split_once(':'))
            .find(|(property, _)| property.trim().eq_ignore_ascii_case("display"))
            .map(|(_, value)| value.trim().to_string())
    }

    /// Sets `display` in the inline style, keeping the other declarations.
    pub fn set_display(&mut self, id: NodeId, value: &str) {
        let Some(style) = self.element(id).map(|element| element.attr("style").unwrap_or_default()) else {
            return;
        };

        let mut declarations: Vec<&str> = style
            .split(';')
            .map(str::trim)
            .filter(|declaration| !declaration.is_empty())
            .filter(|declaration| {
                declaration
                    .split_once(':')
                    .is_none_or(|(property, _)| !property.trim().eq_ignore_ascii_case("display"))
            })
            .collect();
        let display = format!("display: {value}");
        declarations.push(&display);
        let style = declarations.join("; ");

        if let Some(mut node) = self.html.tree.get_mut(id) {
            if let Node::Element(element) = node.value() {
                set_attr(element, "style", style);
            }
        }
    }

    #[must_use]
    pub fn outer_html(&self, id: NodeId) -> String {
        self.element_ref(id).map(|element| element.html()).unwrap_or_default()
    }

    #[must_use]
    pub fn inner_html(&self, id: NodeId) -> String {
        self.element_ref(id).map(|element| element.inner_html()).unwrap_or_default()
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        self.html.html()
    }
}
