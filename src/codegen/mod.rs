//! Artifact generators for the per-table CRUD stack

pub mod base;
mod comment;
pub mod controller;
pub mod entity;
pub mod keys;
pub mod mapper;
pub mod mapper_xml;
pub mod naming;
pub mod query;
pub mod service;
pub mod service_impl;
pub mod writer;

use tracing::{debug, error};

use crate::config::GenConfig;
use crate::error::Result;
use crate::model::TableInfo;

type Generator = fn(&TableInfo, &GenConfig) -> Result<()>;

/// The seven per-table generators, in emission order.
const GENERATORS: &[(&str, Generator)] = &[
    ("entity", entity::generate),
    ("query", query::generate),
    ("mapper", mapper::generate),
    ("mapper xml", mapper_xml::generate),
    ("service", service::generate),
    ("service impl", service_impl::generate),
    ("controller", controller::generate),
];

/// Run all seven generators for one table.
///
/// Failures are logged per artifact and never abort the remaining artifacts
/// or tables; a partially generated table is an accepted, logged outcome.
pub fn generate_table(table: &TableInfo, config: &GenConfig) {
    debug!(table = %table.table_name, bean = %table.bean_name, "generating table stack");
    for (artifact, generate) in GENERATORS {
        if let Err(err) = generate(table, config) {
            error!(table = %table.table_name, artifact, %err, "artifact generation failed");
        }
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use crate::model::{FieldInfo, KeyGroup, TableInfo};
    use crate::types::FieldType;

    pub fn field(name: &str, property: &str, sql_type: &str) -> FieldInfo {
        FieldInfo {
            field_name: name.to_string(),
            property_name: property.to_string(),
            sql_type: sql_type
                .split('(')
                .next()
                .unwrap_or(sql_type)
                .to_uppercase(),
            field_type: FieldType::from_sql_type(sql_type),
            comment: None,
            is_auto_increment: false,
        }
    }

    /// The reference scenario: varchar primary key, a string column, and a
    /// datetime column.
    pub fn user_info_table() -> TableInfo {
        let fields = vec![
            field("user_id", "userId", "varchar(32)"),
            field("nick_name", "nickName", "varchar(50)"),
            field("create_time", "createTime", "datetime"),
        ];
        TableInfo {
            table_name: "user_info".to_string(),
            bean_name: "UserInfo".to_string(),
            comment: Some("user info".to_string()),
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

    /// Composite unique key declared in (b, a) order.
    pub fn composite_key_table() -> TableInfo {
        let fields = vec![field("b", "b", "int"), field("a", "a", "int")];
        TableInfo {
            table_name: "pair".to_string(),
            bean_name: "Pair".to_string(),
            comment: None,
            key_groups: vec![KeyGroup {
                name: "PRIMARY".to_string(),
                fields: fields.clone(),
            }],
            fields,
            has_date: false,
            has_date_time: false,
            has_decimal: false,
        }
    }

    /// Auto-increment integer primary key.
    pub fn auto_increment_table() -> TableInfo {
        let mut id = field("id", "id", "int(11)");
        id.is_auto_increment = true;
        let fields = vec![
            id,
            field("nick_name", "nickName", "varchar(50)"),
            field("create_time", "createTime", "datetime"),
        ];
        TableInfo {
            table_name: "account".to_string(),
            bean_name: "Account".to_string(),
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
}
