//! Condition override engine
//!
//! Conditions address a response leaf by a slash-separated key path and
//! change how (or whether) it is asserted. The path grammar is
//! narrow: each segment is an object key, or an element index when the
//! value being stepped into is an array. `data/users/0/uid` therefore
//! addresses `["data"]["users"][0]["uid"]`, the same accessor path the
//! builder emits for that leaf.

use serde_json::Value;
use tracing::debug;

use super::assertions::{Accessor, AssertionKind, AssertionRecord};
use crate::errors::{ApidocError, Result};
use crate::model::{Condition, ConditionKind};

/// Apply conditions in order to the records built from `body`
///
/// Fails on the first key path that does not resolve, on an unknown
/// condition type, or on malformed range bounds. A path that resolves to an
/// interior node has no record and is skipped.
pub fn apply_conditions(
    body: Option<&Value>,
    mut records: Vec<AssertionRecord>,
    conditions: &[Condition],
) -> Result<Vec<AssertionRecord>> {
    for condition in conditions {
        let path = resolve_key_path(body, &condition.key_path)?;
        let position = records.iter().position(|r| r.is_at_leaf(&path));

        if position.is_none() {
            debug!(key_path = %condition.key_path, "Condition targets a node without an assertion");
        }

        match &condition.kind {
            ConditionKind::ValueEqual => {}
            ConditionKind::KeyExist => {
                if let Some(index) = position {
                    records[index].rebase_to_parent();
                }
            }
            ConditionKind::Ignore => {
                if let Some(index) = position {
                    records.remove(index);
                }
            }
            ConditionKind::ValueRange => {
                let (low, high) = condition.bounds()
                    .map_err(|reason| ApidocError::InvalidCondition {
                        key_path: condition.key_path.clone(),
                        reason,
                    })?;
                if let Some(index) = position {
                    records[index].kind = AssertionKind::Range(low, high);
                }
            }
            ConditionKind::Unknown(name) => {
                return Err(ApidocError::UnknownConditionKind(name.clone()));
            }
        }
    }

    Ok(records)
}

/// Walk `body` along a key path and return the accessor path it names
pub fn resolve_key_path(body: Option<&Value>, key_path: &str) -> Result<Vec<Accessor>> {
    let not_found = || ApidocError::key_path(body, key_path);

    let mut current = body.ok_or_else(not_found)?;
    let mut path = Vec::new();

    for segment in key_path.split('/') {
        let (accessor, next) = match current {
            Value::Object(map) => (Accessor::Key(segment.to_string()), map.get(segment)),
            Value::Array(items) => {
                let index: usize = segment.parse().map_err(|_| not_found())?;
                (Accessor::Index(index), items.get(index))
            }
            _ => return Err(not_found()),
        };
        current = next.ok_or_else(not_found)?;
        path.push(accessor);
    }

    Ok(path)
}
