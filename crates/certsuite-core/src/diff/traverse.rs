use crate::value::Value;

/// Separator placed between the steps of a field path.
pub const PATH_DELIMITER: &str = "/";

/// One scalar leaf of a flattened tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<'a> {
    /// Slash-delimited path from the traversal root to the leaf.
    pub path: String,
    /// The leaf value, borrowed from the traversed tree.
    pub value: &'a Value,
}

/// Flattens `node` into its scalar leaves, prefixing every path with `path`.
///
/// Object keys are visited in sorted order and array elements in index
/// order. `null` produces no fields, neither at the root nor nested, and
/// empty containers contribute nothing.
///
/// With an empty `filters` slice every leaf is emitted once. Otherwise a
/// leaf is emitted once for every filter `f` whose `/f/` pattern occurs in
/// its path, so a leaf can appear more than once.
pub fn traverse<'a>(node: &'a Value, path: &str, filters: &[String]) -> Vec<Field<'a>> {
    let mut fields = Vec::new();
    walk(node, path, filters, &mut fields);
    fields
}

fn walk<'a>(node: &'a Value, path: &str, filters: &[String], out: &mut Vec<Field<'a>>) {
    match node {
        Value::Null => {}
        Value::Object(map) => {
            for (key, child) in map {
                walk(child, &format!("{path}{PATH_DELIMITER}{key}"), filters, out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                walk(child, &format!("{path}{PATH_DELIMITER}{index}"), filters, out);
            }
        }
        Value::Bool(_)
        | Value::Integer(_)
        | Value::UnsignedInteger(_)
        | Value::Float(_)
        | Value::String(_) => emit_leaf(node, path, filters, out),
    }
}

fn emit_leaf<'a>(value: &'a Value, path: &str, filters: &[String], out: &mut Vec<Field<'a>>) {
    if filters.is_empty() {
        out.push(Field {
            path: path.to_owned(),
            value,
        });
        return;
    }

    for filter in filters {
        let pattern = format!("{PATH_DELIMITER}{filter}{PATH_DELIMITER}");
        if path.contains(&pattern) {
            out.push(Field {
                path: path.to_owned(),
                value,
            });
        }
    }
}
