//! XPath evaluation helpers over the parsed introspect DOM.

use crate::domain::error::{IntrospectError, IntrospectResult};
use sxd_xpath::nodeset::Node;
use sxd_xpath::{Context, Factory, Value};

/// Evaluate `expression` relative to `node` and return the selected nodes
/// in document order.
pub fn select<'d>(node: Node<'d>, expression: &str) -> IntrospectResult<Vec<Node<'d>>> {
    let xpath = Factory::new()
        .build(expression)
        .map_err(|e| xpath_error(expression, e))?
        .ok_or_else(|| xpath_error(expression, "empty expression"))?;
    let context = Context::new();

    match xpath
        .evaluate(&context, node)
        .map_err(|e| xpath_error(expression, e))?
    {
        Value::Nodeset(nodes) => Ok(nodes.document_order()),
        other => Err(IntrospectError::XPath {
            expression: expression.to_string(),
            message: format!("expected a node-set, got {:?}", other),
        }),
    }
}

/// String values of the nodes selected by `expression`.
pub fn select_strings(node: Node<'_>, expression: &str) -> IntrospectResult<Vec<String>> {
    Ok(select(node, expression)?
        .into_iter()
        .map(|n| n.string_value())
        .collect())
}

/// Quote `value` as an XPath string literal.
///
/// XPath 1.0 has no escape sequences, so a value holding both quote kinds
/// is split into a `concat()` call.
pub fn literal(value: &str) -> String {
    if !value.contains('\'') {
        return format!("'{}'", value);
    }
    if !value.contains('"') {
        return format!("\"{}\"", value);
    }

    let parts: Vec<String> = value
        .split('\'')
        .map(|part| format!("'{}'", part))
        .collect();
    format!("concat({})", parts.join(", \"'\", "))
}

/// Join several values for display in a single cell.
pub fn pretty(values: &[String]) -> String {
    values.join(" ")
}

fn xpath_error(expression: &str, err: impl std::fmt::Display) -> IntrospectError {
    IntrospectError::XPath {
        expression: expression.to_string(),
        message: err.to_string(),
    }
}
