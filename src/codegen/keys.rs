//! Key-group derivations shared by the mapper, mapping-document, service,
//! and controller generators.
//!
//! Every generator derives by-key method names, parameter lists, and WHERE
//! clauses by calling these functions over the same ordered field list, so
//! the artifacts agree byte-for-byte.

use crate::model::{FieldInfo, KeyGroup};

use super::naming::upper_first;

/// Compound accessor name: capitalized property names joined by `And`, in
/// declared index order. `(b, a)` yields `BAndA`, never `AAndB`.
pub fn compound_name(group: &KeyGroup) -> String {
    group
        .fields
        .iter()
        .map(|f| upper_first(&f.property_name))
        .collect::<Vec<_>>()
        .join("And")
}

/// `JavaType propertyName` pairs for a method signature.
pub fn param_list(fields: &[FieldInfo]) -> String {
    fields
        .iter()
        .map(|f| format!("{} {}", f.field_type.java_type(), f.property_name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `@Param`-annotated variant of [`param_list`] for mapper interfaces.
pub fn annotated_param_list(fields: &[FieldInfo]) -> String {
    fields
        .iter()
        .map(|f| {
            format!(
                "@Param(\"{name}\") {ty} {name}",
                name = f.property_name,
                ty = f.field_type.java_type()
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Bare argument names for delegation calls.
pub fn arg_list(fields: &[FieldInfo]) -> String {
    fields
        .iter()
        .map(|f| f.property_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `column = #{property}` fragments joined by ` and `, preserving the
/// key group's column order.
pub fn equality_clause(fields: &[FieldInfo]) -> String {
    fields
        .iter()
        .map(|f| format!("{} = #{{{}}}", f.field_name, f.property_name))
        .collect::<Vec<_>>()
        .join(" and ")
}

/// Human-readable description of the key columns, for generated comments.
pub fn key_description(fields: &[FieldInfo]) -> String {
    fields
        .iter()
        .map(|f| f.property_name.as_str())
        .collect::<Vec<_>>()
        .join(" and ")
}
