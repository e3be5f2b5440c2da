//! Semantic column types and the raw-MySQL-type lookup

use serde::Serialize;

/// Semantic type of a column, resolved from the raw MySQL type name.
///
/// Unknown types fall back to [`FieldType::String`]; resolution never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldType {
    Int,
    Long,
    Byte,
    Short,
    Double,
    Decimal,
    Boolean,
    Date,
    DateTime,
    String,
}

impl FieldType {
    /// Resolve a raw column type as reported by `SHOW FULL FIELDS`, e.g.
    /// `varchar(50)` or `tinyint(1) unsigned`. Any length/precision suffix
    /// is stripped before the case-insensitive group lookup.
    pub fn from_sql_type(raw: &str) -> Self {
        let base = raw
            .split('(')
            .next()
            .unwrap_or(raw)
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_ascii_uppercase();
        match base.as_str() {
            "INT" | "INTEGER" => Self::Int,
            "BIGINT" => Self::Long,
            "TINYINT" => Self::Byte,
            "SMALLINT" => Self::Short,
            "FLOAT" | "DOUBLE" => Self::Double,
            "DECIMAL" | "NUMERIC" => Self::Decimal,
            "BOOLEAN" | "BIT" => Self::Boolean,
            "DATE" => Self::Date,
            "DATETIME" | "TIMESTAMP" | "TIME" => Self::DateTime,
            _ => Self::String,
        }
    }

    /// The Java type name emitted for this semantic type.
    pub fn java_type(&self) -> &'static str {
        match self {
            Self::Int => "Integer",
            Self::Long => "Long",
            Self::Byte => "Byte",
            Self::Short => "Short",
            Self::Double => "Double",
            Self::Decimal => "BigDecimal",
            Self::Boolean => "Boolean",
            Self::Date | Self::DateTime => "Date",
            Self::String => "String",
        }
    }

    /// String columns get a fuzzy-match query field and an emptiness check
    /// in conditional SQL.
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    /// Date and datetime columns get a start/end pair of range query fields.
    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::DateTime)
    }

    pub fn needs_decimal(&self) -> bool {
        matches!(self, Self::Decimal)
    }
}
