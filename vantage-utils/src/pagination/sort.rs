//! Column ordering for entity tables.

use std::cmp::Ordering;

use serde_json::Value;

use crate::entity::{QueryParams, Record, SortOrder};

/// Compare two optional field values by their natural order.
///
/// Missing and `null` values sort first, then booleans, numbers, strings and
/// finally arrays/objects (compared by their JSON text).
pub fn compare_values(left: Option<&Value>, right: Option<&Value>) -> Ordering {
    match (left, right) {
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => a.cmp(b),
        (Some(Value::Number(a)), Some(Value::Number(b))) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        (Some(a @ (Value::Array(_) | Value::Object(_))), Some(b))
            if type_rank(Some(a)) == type_rank(Some(b)) =>
        {
            a.to_string().cmp(&b.to_string())
        }
        _ => type_rank(left).cmp(&type_rank(right)),
    }
}

fn type_rank(value: Option<&Value>) -> u8 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Bool(_)) => 1,
        Some(Value::Number(_)) => 2,
        Some(Value::String(_)) => 3,
        Some(Value::Array(_)) => 4,
        Some(Value::Object(_)) => 5,
    }
}

/// Stable-sort entities by the table's sort field and direction.
///
/// Without a sort field the order is left untouched.
pub fn sort_entities<E: Record>(entities: &mut [E], params: &QueryParams) {
    let Some(field) = params.sort_field.as_deref() else {
        return;
    };

    entities.sort_by(|a, b| {
        let ordering = compare_values(a.field(field), b.field(field));
        match params.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}
