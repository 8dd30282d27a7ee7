//! Introspect CLI Library
//!
//! Fetches introspect XML pages of vrouter agents and controllers, maps
//! them into collections of elements and renders searched subsets of
//! those collections for a terminal.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use crate::core::collection::{Collection, DescCollection, DescElement, Element, Elements, LongFormatter};
pub use crate::core::render::{DetailTable, Format};
pub use crate::core::source::{Page, Sourcer};
pub use domain::config::IntrospectConfig;
pub use domain::error::{IntrospectError, IntrospectResult};
