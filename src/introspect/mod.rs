//! Live MySQL schema introspection

use mysql_async::prelude::*;
use mysql_async::{Conn, Row};
use tracing::{debug, error, info};

use crate::codegen::naming;
use crate::config::GenConfig;
use crate::error::{GenError, Result};
use crate::model::{FieldInfo, KeyGroup, TableInfo};
use crate::types::FieldType;

/// Case-insensitive substrings rejected in table names before they are
/// interpolated into a SHOW statement.
const DENYLIST: &[&str] = &[
    "SELECT", "INSERT", "UPDATE", "DELETE", "DROP", "UNION", "EXEC", "EXECUTE", "TRUNCATE",
    "GRANT", "REVOKE", "XP_",
];

/// The one schema connection for a generation run.
///
/// Opened once at startup, borrowed mutably by each listing operation in
/// sequence, and disconnected at the single exit point.
#[derive(Debug)]
pub struct SchemaIntrospector {
    conn: Conn,
}

impl SchemaIntrospector {
    /// Open the schema connection. Failure here is the only fatal outcome
    /// of a run.
    pub async fn connect(url: &str) -> Result<Self> {
        let opts = mysql_async::Opts::from_url(url).map_err(mysql_async::Error::from)?;
        let conn = Conn::new(opts).await?;
        Ok(Self { conn })
    }

    pub async fn disconnect(self) -> Result<()> {
        self.conn.disconnect().await?;
        Ok(())
    }

    /// Read the model of every table in the schema. Tables that fail the
    /// identifier check or a metadata query are logged and skipped.
    pub async fn table_models(&mut self, config: &GenConfig) -> Result<Vec<TableInfo>> {
        let summaries = self.list_tables().await?;
        info!("found {} tables", summaries.len());

        let mut tables = Vec::with_capacity(summaries.len());
        for (name, comment) in summaries {
            match self.table_model(&name, comment, config).await {
                Ok(table) => {
                    if let Ok(json) = serde_json::to_string(&table) {
                        debug!(table = %table.table_name, model = %json, "introspected table");
                    }
                    tables.push(table);
                }
                Err(err) => error!(table = %name, %err, "skipping table"),
            }
        }
        Ok(tables)
    }

    async fn list_tables(&mut self) -> Result<Vec<(String, Option<String>)>> {
        let rows: Vec<Row> = self.conn.query("show table status").await?;
        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let name = required(&row, "Name")?;
            out.push((name, optional(&row, "Comment")));
        }
        Ok(out)
    }

    async fn table_model(
        &mut self,
        table_name: &str,
        comment: Option<String>,
        config: &GenConfig,
    ) -> Result<TableInfo> {
        validate_table_name(table_name)?;

        let fields = self.list_fields(table_name).await?;
        let key_groups = self.list_key_groups(table_name, &fields).await?;

        let has_date = fields.iter().any(|f| f.field_type == FieldType::Date);
        let has_date_time = fields.iter().any(|f| f.field_type == FieldType::DateTime);
        let has_decimal = fields.iter().any(|f| f.field_type.needs_decimal());

        Ok(TableInfo {
            bean_name: naming::bean_name(table_name, config.ignore_table_prefix),
            table_name: table_name.to_string(),
            comment,
            fields,
            key_groups,
            has_date,
            has_date_time,
            has_decimal,
        })
    }

    async fn list_fields(&mut self, table_name: &str) -> Result<Vec<FieldInfo>> {
        let rows: Vec<Row> = self
            .conn
            .query(format!("show full fields from {table_name}"))
            .await?;

        let mut fields = Vec::with_capacity(rows.len());
        for row in rows {
            let field_name = required(&row, "Field")?;
            let raw_type = required(&row, "Type")?;
            let extra = optional(&row, "Extra").unwrap_or_default();

            let sql_type = raw_type
                .split('(')
                .next()
                .unwrap_or(&raw_type)
                .trim()
                .to_ascii_uppercase();

            fields.push(FieldInfo {
                property_name: naming::to_camel(&field_name, false),
                field_type: FieldType::from_sql_type(&raw_type),
                field_name,
                sql_type,
                comment: optional(&row, "Comment").filter(|c| !c.is_empty()),
                is_auto_increment: extra.contains("auto_increment"),
            });
        }
        Ok(fields)
    }

    /// Unique key groups in index-listing order. Non-unique indexes do not
    /// contribute; column order within a group follows the listing.
    async fn list_key_groups(
        &mut self,
        table_name: &str,
        fields: &[FieldInfo],
    ) -> Result<Vec<KeyGroup>> {
        let rows: Vec<Row> = self
            .conn
            .query(format!("show index from {table_name}"))
            .await?;

        let mut groups: Vec<KeyGroup> = Vec::new();
        for row in rows {
            let non_unique: i64 = row.get("Non_unique").unwrap_or(1);
            if non_unique == 1 {
                continue;
            }
            let key_name = required(&row, "Key_name")?;
            let column_name = required(&row, "Column_name")?;
            let Some(field) = fields.iter().find(|f| f.field_name == column_name) else {
                continue;
            };
            match groups.iter_mut().find(|g| g.name == key_name) {
                Some(group) => group.fields.push(field.clone()),
                None => groups.push(KeyGroup {
                    name: key_name,
                    fields: vec![field.clone()],
                }),
            }
        }
        Ok(groups)
    }
}

fn required(row: &Row, column: &str) -> Result<String> {
    row.get::<Option<String>, _>(column)
        .flatten()
        .ok_or_else(|| GenError::Schema(format!("missing column {column}")))
}

fn optional(row: &Row, column: &str) -> Option<String> {
    row.get::<Option<String>, _>(column).flatten()
}

/// Injection guard for table names interpolated into SHOW statements:
/// identifier syntax only, and no SQL-keyword substrings.
pub fn validate_table_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let head_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !head_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(GenError::InvalidIdentifier(name.to_string()));
    }
    let upper = name.to_ascii_uppercase();
    if DENYLIST.iter().any(|keyword| upper.contains(keyword)) {
        return Err(GenError::InvalidIdentifier(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_table_names() {
        assert!(validate_table_name("user_info").is_ok());
        assert!(validate_table_name("_staging").is_ok());
        assert!(validate_table_name("t2").is_ok());
    }

    #[test]
    fn test_rejects_non_identifier_syntax() {
        assert!(validate_table_name("").is_err());
        assert!(validate_table_name("2fast").is_err());
        assert!(validate_table_name("user info").is_err());
        assert!(validate_table_name("user;--").is_err());
        assert!(validate_table_name("user`info").is_err());
    }

    #[test]
    fn test_rejects_keyword_substrings_case_insensitively() {
        assert!(validate_table_name("drop_me").is_err());
        assert!(validate_table_name("my_Truncate_log").is_err());
        assert!(validate_table_name("xp_cmdshell").is_err());
    }

    #[tokio::test]
    async fn test_connect_rejects_malformed_url() {
        // URL parsing fails before any network I/O
        let err = SchemaIntrospector::connect("not a url").await.unwrap_err();
        assert!(matches!(err, GenError::Db(_)));
    }
}
