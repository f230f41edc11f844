use crate::xml_tree::{XmlElement, XmlValue};

pub fn resolve_in<'a>(element: &'a XmlElement, aliases: &[&str]) -> Option<&'a XmlValue> {
    aliases
        .iter()
        .find_map(|alias| element.get(alias).or_else(|| element.get_ignore_case(alias)))
}

/// Returns the value under the first alias present on `node`.
///
/// Each alias is tried as an exact key and then case-insensitively before moving on to the
/// next alias. A list node resolves against its items in order.
pub fn resolve<'a>(node: Option<&'a XmlValue>, aliases: &[&str]) -> Option<&'a XmlValue> {
    match node? {
        XmlValue::Element(element) => resolve_in(element, aliases),
        XmlValue::List(items) => items.iter().find_map(|item| resolve(Some(item), aliases)),
        XmlValue::Text(_) => None,
    }
}

/// Follows a path of alias lists, one list per nesting level.
pub fn resolve_path<'a>(node: Option<&'a XmlValue>, path: &[&[&str]]) -> Option<&'a XmlValue> {
    path.iter()
        .try_fold(node?, |current, aliases| resolve(Some(current), aliases))
}
