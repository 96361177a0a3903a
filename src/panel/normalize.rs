use serde_json::Value;

use crate::error::{WorkbenchError, WorkbenchResult};
use crate::registry::{Choice, ChoiceSource, OptionDescriptor, WidgetKind};

fn invalid(descriptor: &OptionDescriptor, reason: impl Into<String>) -> WorkbenchError {
    WorkbenchError::InvalidValue {
        keyword: descriptor.keyword.to_owned(),
        reason: reason.into(),
    }
}

fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn split_list(value: Value) -> Value {
    match value {
        Value::String(text) => Value::Array(
            text.split(',')
                .map(|part| Value::String(part.to_owned()))
                .collect(),
        ),
        other => other,
    }
}

fn collapse_singleton(value: Value) -> Value {
    match value {
        Value::Array(mut items) if items.len() == 1 => items.remove(0),
        other => other,
    }
}

fn parse_number(descriptor: &OptionDescriptor, value: Value) -> WorkbenchResult<Value> {
    match value {
        Value::Number(_) => Ok(value),
        Value::String(text) => {
            let trimmed = text.trim();
            if let Ok(integer) = trimmed.parse::<i64>() {
                return Ok(Value::from(integer));
            }
            trimmed
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| invalid(descriptor, format!("`{text}` is not a number")))
        }
        other => Err(invalid(descriptor, format!("expected a number, got {other}"))),
    }
}

fn parse_bool(descriptor: &OptionDescriptor, value: Value) -> WorkbenchResult<Value> {
    match value {
        Value::Bool(_) => Ok(value),
        Value::String(text) => match text.to_ascii_lowercase().as_str() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(invalid(descriptor, format!("`{text}` is not a boolean"))),
        },
        other => Err(invalid(descriptor, format!("expected a boolean, got {other}"))),
    }
}

/// Selector values come back stringified; map them onto the typed choice.
fn restore_static_choice(descriptor: &OptionDescriptor, value: Value) -> Value {
    let ChoiceSource::Static { values, .. } = descriptor.choices else {
        return value;
    };
    let Value::String(text) = &value else {
        return value;
    };
    values
        .iter()
        .find(|choice| match choice {
            Choice::Bool(_) => choice.display().eq_ignore_ascii_case(text),
            Choice::Text(label) => *label == text.as_str(),
        })
        .map_or(value, |choice| choice.to_value())
}

/// Turns a raw widget value into the value stored in a panel mapping.
///
/// `Ok(None)` means the keyword is absent and must be removed.
pub fn normalize(descriptor: &OptionDescriptor, raw: Value) -> WorkbenchResult<Option<Value>> {
    if is_absent(&raw) {
        return Ok(None);
    }
    let mut value = raw;
    if descriptor.list_from_text {
        value = split_list(value);
    }
    if descriptor.widget == WidgetKind::MultiSelect {
        value = collapse_singleton(value);
    }
    let value = match descriptor.widget {
        WidgetKind::Numeric { .. } => parse_number(descriptor, value)?,
        WidgetKind::Switch => parse_bool(descriptor, value)?,
        WidgetKind::Select => restore_static_choice(descriptor, value),
        WidgetKind::MultiSelect | WidgetKind::Checklist | WidgetKind::Text => value,
    };
    Ok(Some(value))
}
