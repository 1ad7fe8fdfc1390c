//! Attribute application for arrays and lists

use crate::error::{Result, RexpError};
use crate::types::{RArray, TaggedList, Value};

/// Apply an attribute list to a freshly decoded array.
///
/// `dim` reshapes column-major, `names` attaches element names, `dimnames` and
/// `assign` are accepted and ignored, and anything else is kept verbatim in the
/// array's attribute list.
pub fn apply_array_attributes(mut arr: RArray, attr: &Value, position: u64) -> Result<RArray> {
    let Some(attrs) = attr.as_tagged() else {
        tracing::warn!(position, "array attribute is not a tagged list, ignoring it");
        return Ok(arr);
    };
    for (tag, value) in attrs {
        let Some(tag) = tag.as_str() else {
            tracing::warn!(position, "untagged array attribute ignored");
            continue;
        };
        match tag {
            "dim" => {
                let dims = value.to_dims().ok_or_else(|| RexpError::MalformedRecord {
                    position,
                    reason: "dim attribute is not a list of dimensions".into(),
                })?;
                let len = arr.len();
                arr.data = arr
                    .data
                    .reshape(&dims)
                    .map_err(|_| RexpError::ShapeMismatch { shape: dims, len })?;
            }
            "names" => arr.names = Some(checked_names(value, arr.len(), position)?),
            "dimnames" | "assign" => {
                tracing::warn!(tag, position, "applying attribute to array not implemented");
            }
            _ => arr.attributes.push((tag.to_string(), value.clone())),
        }
    }
    Ok(arr)
}

/// Apply an attribute list to the items of a list.
///
/// Only `names` has structural effect: it turns the list into a tagged list.
pub fn apply_list_attributes(
    items: Vec<Value>,
    attr: Option<&Value>,
    position: u64,
) -> Result<Value> {
    let Some(attr) = attr else {
        return Ok(Value::Vector(items));
    };
    let Some(attrs) = attr.as_tagged() else {
        tracing::warn!(position, "list attribute is not a tagged list, ignoring it");
        return Ok(Value::Vector(items));
    };
    let mut names = None;
    for (tag, value) in attrs {
        match tag.as_str() {
            Some("names") => names = Some(checked_names(value, items.len(), position)?),
            Some(tag) => {
                tracing::warn!(tag, position, "applying attribute to list not implemented");
            }
            None => tracing::warn!(position, "untagged list attribute ignored"),
        }
    }
    Ok(match names {
        Some(names) => Value::Tagged(TaggedList::from_names(names, items)),
        None => Value::Vector(items),
    })
}

fn checked_names(value: &Value, len: usize, position: u64) -> Result<Vec<String>> {
    let names = value.to_names().ok_or_else(|| RexpError::MalformedRecord {
        position,
        reason: "names attribute is not a list of strings".into(),
    })?;
    if names.len() != len {
        return Err(RexpError::NamesMismatch {
            names: names.len(),
            len,
        });
    }
    Ok(names)
}
