//! Python source rendering for reproduction scripts.

use serde_json::Value;

use crate::core::KwargMap;

fn quote(text: &str) -> String {
    let delimiter = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push(delimiter);
    for ch in text.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            ch if ch == delimiter => {
                quoted.push('\\');
                quoted.push(ch);
            }
            ch => quoted.push(ch),
        }
    }
    quoted.push(delimiter);
    quoted
}

fn number(value: &serde_json::Number) -> String {
    if let Some(integer) = value.as_i64() {
        return integer.to_string();
    }
    if let Some(integer) = value.as_u64() {
        return integer.to_string();
    }
    match value.as_f64() {
        Some(float) if float.fract() == 0.0 && float.abs() < 1e16 => format!("{float:.1}"),
        Some(float) => float.to_string(),
        None => value.to_string(),
    }
}

/// Renders a JSON value as the equivalent Python literal.
#[must_use]
pub fn python_literal(value: &Value) -> String {
    match value {
        Value::Null => "None".to_owned(),
        Value::Bool(true) => "True".to_owned(),
        Value::Bool(false) => "False".to_owned(),
        Value::Number(number_value) => number(number_value),
        Value::String(text) => quote(text),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(python_literal).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(key, value)| format!("{}: {}", quote(key), python_literal(value)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
    }
}

/// Renders keyword arguments as a Python dict literal.
#[must_use]
pub fn python_kwargs(kwargs: &KwargMap) -> String {
    let entries: Vec<String> = kwargs
        .iter()
        .map(|(key, value)| format!("{}: {}", quote(key), python_literal(value)))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{python_kwargs, python_literal};
    use crate::core::KwargMap;

    #[test]
    fn scalars_use_python_spelling() {
        assert_eq!(python_literal(&json!(null)), "None");
        assert_eq!(python_literal(&json!(false)), "False");
        assert_eq!(python_literal(&json!(3)), "3");
        assert_eq!(python_literal(&json!(2.0)), "2.0");
        assert_eq!(python_literal(&json!(0.25)), "0.25");
    }

    #[test]
    fn strings_prefer_single_quotes() {
        assert_eq!(python_literal(&json!("plain")), "'plain'");
        assert_eq!(python_literal(&json!("it's")), "\"it's\"");
        assert_eq!(python_literal(&json!("both ' and \"")), "'both \\' and \"'");
    }

    #[test]
    fn kwargs_render_in_insertion_order() {
        let mut kwargs = KwargMap::new();
        kwargs.insert("y".to_owned(), json!(["a", "b"]));
        kwargs.insert("x".to_owned(), json!("when"));
        assert_eq!(python_kwargs(&kwargs), "{'y': ['a', 'b'], 'x': 'when'}");
    }
}
