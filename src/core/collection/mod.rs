//! An introspect page mapped into a list of elements.
//!
//! A [`DescCollection`] says where a page lives and which XPath node holds
//! its elements; a [`Collection`] is that description applied to a loaded
//! [`Page`].

pub mod desc;
pub mod search;

pub use desc::{DescCollection, DescElement, LongFn, LongFormatter, PageBuilder, PageRequest};

use crate::core::query::{pretty, select, select_strings};
use crate::core::source::Page;
use crate::domain::error::{IntrospectError, IntrospectResult};
use sxd_xpath::nodeset::Node;
use tracing::debug;

/// A list of elements
pub type Elements<'a> = Vec<Element<'a>>;

/// One entry of a collection, such as a route or an interface
#[derive(Clone, Copy)]
pub struct Element<'a> {
    node: Node<'a>,
    desc: &'a DescElement,
}

impl<'a> Element<'a> {
    pub fn new(node: Node<'a>, desc: &'a DescElement) -> Self {
        Self { node, desc }
    }

    /// The XML node backing this element
    pub fn node(&self) -> Node<'a> {
        self.node
    }

    pub fn desc(&self) -> &'a DescElement {
        self.desc
    }

    /// Nodes selected by `expression`, relative to this element
    pub fn select(&self, expression: &str) -> IntrospectResult<Vec<Node<'a>>> {
        select(self.node, expression)
    }

    /// String values selected by `expression`, relative to this element
    pub fn strings(&self, expression: &str) -> IntrospectResult<Vec<String>> {
        select_strings(self.node, expression)
    }

    /// Value of the child field `field`.
    ///
    /// Repeated fields are accepted as long as they all hold the same value.
    pub fn field(&self, field: &str) -> IntrospectResult<String> {
        let values = self.strings(&format!("{}/text()", field))?;
        if values.iter().any(|v| v != &values[0]) {
            return Err(IntrospectError::AmbiguousField {
                field: field.to_string(),
                values,
            });
        }
        values
            .into_iter()
            .next()
            .ok_or_else(|| IntrospectError::FieldNotFound {
                field: field.to_string(),
            })
    }

    /// Short version of the element
    pub fn short(&self) -> IntrospectResult<String> {
        Ok(pretty(&self.strings(self.desc.short_detail_xpath)?))
    }
}

impl std::fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.short() {
            Ok(short) => write!(f, "Element({})", short),
            Err(_) => f.write_str("Element(?)"),
        }
    }
}

/// A loaded collection and its elements
pub struct Collection<'a> {
    url: &'a str,
    desc: &'a DescCollection,
    root: Node<'a>,
    elements: Elements<'a>,
}

impl<'a> Collection<'a> {
    /// Enumerate the elements of `desc` in `page`.
    ///
    /// A base XPath matching nothing gives an empty collection.
    pub fn load(page: &'a Page, desc: &'a DescCollection) -> IntrospectResult<Self> {
        let root: Node<'a> = page.document().root().into();
        let elements: Elements<'a> = select(root, &format!("{}/*", desc.base_xpath))?
            .into_iter()
            .map(|node| Element::new(node, &desc.desc_elt))
            .collect();

        debug!(
            base = desc.base_xpath,
            count = elements.len(),
            "collection loaded"
        );

        Ok(Self {
            url: page.url(),
            desc,
            root,
            elements,
        })
    }

    /// Where the page was loaded from
    pub fn url(&self) -> &'a str {
        self.url
    }

    pub fn desc(&self) -> &'a DescCollection {
        self.desc
    }

    pub fn elements(&self) -> &[Element<'a>] {
        &self.elements
    }

    pub fn into_elements(self) -> Elements<'a> {
        self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub(crate) fn root(&self) -> Node<'a> {
        self.root
    }
}
