//! Entity (PO) class generator

use crate::config::GenConfig;
use crate::error::Result;
use crate::model::TableInfo;
use crate::types::FieldType;

use super::{comment, naming, writer};

const DATE_TIME_PATTERN: &str = "yyyy-MM-dd HH:mm:ss";
const DATE_PATTERN: &str = "yyyy-MM-dd";

pub fn generate(table: &TableInfo, config: &GenConfig) -> Result<()> {
    let content = render(table, config);
    writer::write_artifact(
        &config.dir_for_package(&config.po_package()),
        &format!("{}.java", table.bean_name),
        &content,
        &table.table_name,
        "entity",
    )
}

/// Render the entity class from the unextended column list.
pub fn render(table: &TableInfo, config: &GenConfig) -> String {
    let ignore_list = config.tojson_ignore_list();
    let has_ignored = table
        .fields
        .iter()
        .any(|f| ignore_list.contains(&f.property_name.as_str()));

    let mut code = String::new();
    code.push_str(&format!("package {};\n\n", config.po_package()));
    code.push_str("import java.io.Serializable;\n");
    if table.has_date || table.has_date_time {
        code.push_str("import java.util.Date;\n");
        code.push_str(&format!("{}\n", config.date_format_import));
        code.push_str(&format!("{}\n", config.date_parse_import));
        code.push_str(&format!("import {}.DateUtils;\n", config.utils_package()));
        code.push_str(&format!(
            "import {}.DateTimePatternEnum;\n",
            config.enums_package()
        ));
    }
    if table.has_decimal {
        code.push_str("import java.math.BigDecimal;\n");
    }
    if has_ignored {
        code.push_str(&format!("{}\n", config.tojson_import));
    }
    code.push('\n');

    code.push_str(&comment::class_comment(
        table.comment.as_deref().unwrap_or(&table.bean_name),
        &config.author,
    ));
    code.push_str(&format!(
        "public class {} implements Serializable {{\n\n",
        table.bean_name
    ));

    for field in &table.fields {
        code.push_str(&comment::field_comment(field.comment.as_deref()));
        match field.field_type {
            FieldType::DateTime => {
                code.push_str(&format!(
                    "\t{}\n",
                    config.date_format_expression.replace("%s", DATE_TIME_PATTERN)
                ));
                code.push_str(&format!(
                    "\t{}\n",
                    config.date_parse_expression.replace("%s", DATE_TIME_PATTERN)
                ));
            }
            FieldType::Date => {
                code.push_str(&format!(
                    "\t{}\n",
                    config.date_format_expression.replace("%s", DATE_PATTERN)
                ));
                code.push_str(&format!(
                    "\t{}\n",
                    config.date_parse_expression.replace("%s", DATE_PATTERN)
                ));
            }
            _ => {}
        }
        if ignore_list.contains(&field.property_name.as_str()) {
            code.push_str(&format!("\t{}\n", config.tojson_expression));
        }
        code.push_str(&format!(
            "\tprivate {} {};\n\n",
            field.field_type.java_type(),
            field.property_name
        ));
    }

    for field in &table.fields {
        let upper = naming::upper_first(&field.property_name);
        let ty = field.field_type.java_type();
        let prop = &field.property_name;
        code.push_str(&format!(
            "\tpublic void set{upper}({ty} {prop}) {{\n\t\tthis.{prop} = {prop};\n\t}}\n\n"
        ));
        code.push_str(&format!(
            "\tpublic {ty} get{upper}() {{\n\t\treturn this.{prop};\n\t}}\n\n"
        ));
    }

    code.push_str(&render_to_string(table));
    code.push_str("}\n");
    code
}

/// Debug representation: null fields render as a sentinel, temporal fields
/// go through the shared date utility.
fn render_to_string(table: &TableInfo) -> String {
    let parts: Vec<String> = table
        .fields
        .iter()
        .map(|field| {
            let prop = &field.property_name;
            let value = match field.field_type {
                FieldType::DateTime => format!(
                    "DateUtils.format({prop}, DateTimePatternEnum.YYYY_MM_DD_HH_MM_SS.getPattern())"
                ),
                FieldType::Date => format!(
                    "DateUtils.format({prop}, DateTimePatternEnum.YYYY_MM_DD.getPattern())"
                ),
                _ => prop.clone(),
            };
            format!("\"{prop}:\" + ({prop} == null ? \"null\" : {value})")
        })
        .collect();
    format!(
        "\t@Override\n\tpublic String toString() {{\n\t\treturn {};\n\t}}\n",
        parts.join(" + \",\" + ")
    )
}
