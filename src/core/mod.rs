// Core module - Page loading, collections and rendering
pub mod catalog;
pub mod collection;
pub mod query;
pub mod render;
pub mod source;

pub use collection::{Collection, DescCollection, DescElement, Element, Elements, LongFormatter};
pub use render::{DetailTable, Format};
pub use source::{Page, Sourcer};
