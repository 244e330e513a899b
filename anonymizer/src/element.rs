//! Element trees for markup records.
//!
//! The model follows the classic element-tree shape: an element owns its text
//! (content before the first child) and its tail (content after its own end
//! tag, up to the next sibling). Keeping both lets a decoded document be
//! written back with its original whitespace.

/// One element with its attributes, text and ordered children.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    /// Tag name, including any namespace prefix.
    pub tag: String,
    /// Attributes in document order.
    pub attributes: Vec<(String, String)>,
    /// Text before the first child.
    pub text: Option<String>,
    /// Text after this element's end tag.
    pub tail: Option<String>,
    /// Child elements in document order.
    pub children: Vec<Element>,
}

impl Element {
    /// Empty element named `tag`.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Sets the text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Appends an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// First direct child named `tag`.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.tag == tag)
    }

    /// Text of the first direct child named `tag`.
    pub fn find_text(&self, tag: &str) -> Option<&str> {
        self.find(tag).and_then(|child| child.text.as_deref())
    }

    /// Depth of the tree rooted here; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Element::depth)
            .max()
            .unwrap_or(0)
    }

    /// Tags in depth-first pre-order, this element first.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags = vec![self.tag.as_str()];
        for child in &self.children {
            tags.extend(child.tags());
        }
        tags
    }
}
