//! In-memory schema model consumed by every artifact generator

use serde::Serialize;

use crate::config::GenConfig;
use crate::types::FieldType;

/// One column of a table. Immutable once read from the schema.
#[derive(Debug, Clone, Serialize)]
pub struct FieldInfo {
    /// Schema identifier, e.g. `nick_name`
    pub field_name: String,
    /// camelCase property name, e.g. `nickName`
    pub property_name: String,
    /// Raw type with any length suffix stripped, upper-cased, e.g. `VARCHAR`
    pub sql_type: String,
    /// Semantic type the generators branch on
    pub field_type: FieldType,
    pub comment: Option<String>,
    pub is_auto_increment: bool,
}

/// How a synthetic query-only field is matched in conditional SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExtendKind {
    /// Substring match on a string column
    Fuzzy,
    /// Inclusive lower bound on a temporal column
    RangeStart,
    /// Exclusive upper bound (next-day boundary) on a temporal column
    RangeEnd,
}

/// A synthetic query-only field derived from a source column.
///
/// Always `String`-typed in the query object; the mapping document keys its
/// conditional clause off [`ExtendKind`].
#[derive(Debug, Clone, Serialize)]
pub struct ExtendField {
    pub property_name: String,
    /// Source column the clause compares against
    pub field_name: String,
    pub kind: ExtendKind,
}

/// A primary key or unique index: a named, ordered set of columns.
///
/// Field order is the index column order as declared and must never be
/// reordered; the compound method names and WHERE clauses derived from it
/// depend on it.
#[derive(Debug, Clone, Serialize)]
pub struct KeyGroup {
    /// Index identifier; `"PRIMARY"` is reserved for the primary key
    pub name: String,
    pub fields: Vec<FieldInfo>,
}

/// Generation-relevant metadata of one table. Built once by the
/// introspector, read-only thereafter.
#[derive(Debug, Clone, Serialize)]
pub struct TableInfo {
    pub table_name: String,
    /// Entity class name derived from the table name
    pub bean_name: String,
    pub comment: Option<String>,
    /// Declaration order from the schema
    pub fields: Vec<FieldInfo>,
    pub key_groups: Vec<KeyGroup>,
    pub has_date: bool,
    pub has_date_time: bool,
    pub has_decimal: bool,
}

impl TableInfo {
    /// The primary key column when the primary key covers exactly one
    /// column; used as the identity column in the result mapping.
    pub fn single_primary_key(&self) -> Option<&FieldInfo> {
        self.key_groups
            .iter()
            .find(|g| g.name == "PRIMARY")
            .and_then(|g| match g.fields.as_slice() {
                [field] => Some(field),
                _ => None,
            })
    }

    pub fn auto_increment_field(&self) -> Option<&FieldInfo> {
        self.fields.iter().find(|f| f.is_auto_increment)
    }

    /// Synthetic query-only fields: one fuzzy variant per string column and
    /// a start/end pair per temporal column.
    ///
    /// Pure; the source field list is never touched, so the entity generator
    /// always sees the unextended columns. The query object and mapping
    /// document generators must both consume this so the synthetic field
    /// names agree.
    pub fn extended_query_fields(&self, config: &GenConfig) -> Vec<ExtendField> {
        let mut extended = Vec::new();
        for field in &self.fields {
            if field.field_type.is_string() {
                extended.push(ExtendField {
                    property_name: format!("{}{}", field.property_name, config.suffix_fuzzy),
                    field_name: field.field_name.clone(),
                    kind: ExtendKind::Fuzzy,
                });
            } else if field.field_type.is_temporal() {
                extended.push(ExtendField {
                    property_name: format!("{}{}", field.property_name, config.suffix_time_start),
                    field_name: field.field_name.clone(),
                    kind: ExtendKind::RangeStart,
                });
                extended.push(ExtendField {
                    property_name: format!("{}{}", field.property_name, config.suffix_time_end),
                    field_name: field.field_name.clone(),
                    kind: ExtendKind::RangeEnd,
                });
            }
        }
        extended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, property: &str, sql_type: &str) -> FieldInfo {
        FieldInfo {
            field_name: name.to_string(),
            property_name: property.to_string(),
            sql_type: sql_type.to_string(),
            field_type: FieldType::from_sql_type(sql_type),
            comment: None,
            is_auto_increment: false,
        }
    }

    fn sample_table() -> TableInfo {
        let fields = vec![
            field("user_id", "userId", "varchar"),
            field("nick_name", "nickName", "varchar"),
            field("age", "age", "int"),
            field("create_time", "createTime", "datetime"),
        ];
        TableInfo {
            table_name: "user_info".to_string(),
            bean_name: "UserInfo".to_string(),
            comment: None,
            key_groups: vec![KeyGroup {
                name: "PRIMARY".to_string(),
                fields: vec![fields[0].clone()],
            }],
            fields,
            has_date: false,
            has_date_time: true,
            has_decimal: false,
        }
    }

    #[test]
    fn test_single_primary_key() {
        let table = sample_table();
        assert_eq!(table.single_primary_key().unwrap().field_name, "user_id");
    }

    #[test]
    fn test_composite_primary_key_is_not_single() {
        let mut table = sample_table();
        let extra = table.fields[1].clone();
        table.key_groups[0].fields.push(extra);
        assert!(table.single_primary_key().is_none());
    }

    #[test]
    fn test_extension_adds_fuzzy_and_range_fields() {
        let table = sample_table();
        let config = GenConfig::default();
        let extended = table.extended_query_fields(&config);

        let names: Vec<&str> = extended.iter().map(|e| e.property_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "userIdFuzzy",
                "nickNameFuzzy",
                "createTimeStart",
                "createTimeEnd"
            ]
        );

        let start = &extended[2];
        assert_eq!(start.kind, ExtendKind::RangeStart);
        assert_eq!(start.field_name, "create_time");
    }

    #[test]
    fn test_extension_does_not_touch_source_fields() {
        let table = sample_table();
        let config = GenConfig::default();
        let before = table.fields.len();
        let _ = table.extended_query_fields(&config);
        let _ = table.extended_query_fields(&config);
        assert_eq!(table.fields.len(), before);
    }
}
