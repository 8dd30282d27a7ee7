use crate::core::collection::Element;
use crate::core::render::DetailTable;
use crate::core::source::Sourcer;
use crate::domain::config::PortConfig;
use crate::domain::error::IntrospectResult;

/// User input needed to locate a page
#[derive(Debug, Clone, Copy)]
pub struct PageRequest<'a> {
    /// Positional arguments, in the order of `DescCollection::page_args`
    pub args: &'a [String],
    /// Configured introspect ports
    pub ports: PortConfig,
}

impl<'a> PageRequest<'a> {
    pub fn new(args: &'a [String], ports: PortConfig) -> Self {
        Self { args, ports }
    }

    /// Positional argument `index`; callers have checked the count already
    pub fn arg(&self, index: usize) -> &'a str {
        self.args.get(index).map(String::as_str).unwrap_or_default()
    }
}

/// Builds the source of a page from the user's arguments
pub type PageBuilder = fn(&PageRequest<'_>) -> Box<dyn Sourcer>;

/// Custom long rendering of one element
pub type LongFn = fn(&mut DetailTable, &Element<'_>) -> IntrospectResult<()>;

/// How the long version of an element is produced
#[derive(Clone)]
pub enum LongFormatter {
    /// One column per field, with a header row
    Xpaths(Vec<&'static str>),
    /// Free-form rows added by a callback
    Fn(LongFn),
}

impl std::fmt::Debug for LongFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LongFormatter::Xpaths(fields) => f.debug_tuple("Xpaths").field(fields).finish(),
            LongFormatter::Fn(_) => f.write_str("Fn(..)"),
        }
    }
}

/// Description of the elements of a collection
#[derive(Debug, Clone)]
pub struct DescElement {
    /// XPath, relative to the element, of its short version
    pub short_detail_xpath: &'static str,
    /// Producer of its long version
    pub long_detail: LongFormatter,
}

/// Everything needed to fetch and query one kind of introspect page
#[derive(Clone)]
pub struct DescCollection {
    /// Names of the positional arguments needed to locate the page
    pub page_args: Vec<&'static str>,
    /// Builds the page source from those arguments
    pub page_builder: PageBuilder,
    /// XPath of the node whose children are the elements
    pub base_xpath: &'static str,
    /// Description of the elements
    pub desc_elt: DescElement,
    /// Field used by searches when none is given
    pub primary_field: &'static str,
}

impl std::fmt::Debug for DescCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescCollection")
            .field("page_args", &self.page_args)
            .field("base_xpath", &self.base_xpath)
            .field("desc_elt", &self.desc_elt)
            .field("primary_field", &self.primary_field)
            .finish_non_exhaustive()
    }
}

impl DescCollection {
    /// Source of the page for the given request
    pub fn source(&self, request: &PageRequest<'_>) -> Box<dyn Sourcer> {
        (self.page_builder)(request)
    }
}
