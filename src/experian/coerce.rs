use crate::xml_tree::XmlValue;

/// Attribute keys that may carry an element's primary value when it has no text content.
const VALUE_KEYS: &[&str] = &["value", "Value"];

fn primary_text(raw: &XmlValue) -> Option<&str> {
    match raw {
        XmlValue::Text(text) => Some(text),
        XmlValue::Element(element) => element.text.as_deref().or_else(|| {
            VALUE_KEYS
                .iter()
                .find_map(|key| element.get(key).and_then(XmlValue::as_text))
        }),
        XmlValue::List(items) => items
            .iter()
            .filter_map(primary_text)
            .find(|text| !text.trim().is_empty()),
    }
}

/// Parses a bureau-formatted number such as `"₹1,23,456.00"` or `" $ 1200 "`.
pub fn parse_number(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, ',' | '₹' | '$') && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

pub fn coerce_number(raw: Option<&XmlValue>) -> Option<f64> {
    raw.and_then(primary_text).and_then(parse_number)
}

pub fn coerce_string(raw: Option<&XmlValue>) -> String {
    raw.and_then(primary_text)
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

/// Normalizes one-or-many shapes into a list.
pub fn as_sequence(raw: Option<&XmlValue>) -> Vec<&XmlValue> {
    match raw {
        None => Vec::new(),
        Some(XmlValue::List(items)) => items.iter().collect(),
        Some(value) => vec![value],
    }
}

/// Floors a monetary value at zero.
pub fn non_negative(value: Option<f64>) -> f64 {
    match value {
        Some(n) if n.is_finite() && n > 0.0 => n,
        _ => 0.0,
    }
}

pub fn coerce_count(value: Option<f64>) -> Option<u32> {
    value.map(|n| non_negative(Some(n)).round().min(u32::MAX as f64) as u32)
}
