//! Naming utilities shared by every artifact generator

/// Capitalize the first character, leaving the rest untouched.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Lowercase the first character, leaving the rest untouched.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Convert an underscore-delimited schema identifier to camelCase.
///
/// Segments after the first get their first character capitalized; the
/// first segment is capitalized only when `capitalize_first` is set,
/// otherwise it passes through untouched. Input without underscores is
/// therefore a no-op, and empty segments from leading, trailing, or doubled
/// underscores contribute nothing.
pub fn to_camel(identifier: &str, capitalize_first: bool) -> String {
    let mut out = String::with_capacity(identifier.len());
    let mut first = true;
    for segment in identifier.split('_') {
        if segment.is_empty() {
            continue;
        }
        if first {
            if capitalize_first {
                out.push_str(&upper_first(segment));
            } else {
                out.push_str(segment);
            }
            first = false;
        } else {
            out.push_str(&upper_first(segment));
        }
    }
    out
}

/// Derive the entity class name from a table name, optionally stripping
/// the leading `_`-delimited prefix token.
pub fn bean_name(table_name: &str, ignore_prefix: bool) -> String {
    let name = match (ignore_prefix, table_name.find('_')) {
        (true, Some(pos)) => &table_name[pos + 1..],
        _ => table_name,
    };
    to_camel(name, true)
}
