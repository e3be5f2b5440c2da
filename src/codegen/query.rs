//! Query (filter) object generator

use crate::config::GenConfig;
use crate::error::Result;
use crate::model::TableInfo;

use super::{comment, naming, writer};

pub fn generate(table: &TableInfo, config: &GenConfig) -> Result<()> {
    let content = render(table, config);
    writer::write_artifact(
        &config.dir_for_package(&config.query_package()),
        &format!("{}{}.java", table.bean_name, config.suffix_query),
        &content,
        &table.table_name,
        "query",
    )
}

/// Render the filter object: one field per source column plus the synthetic
/// fuzzy/range fields, all with accessors. Extends the shared `BaseQuery`
/// for pagination and ordering.
pub fn render(table: &TableInfo, config: &GenConfig) -> String {
    let class_name = format!("{}{}", table.bean_name, config.suffix_query);
    let extended = table.extended_query_fields(config);

    let mut code = String::new();
    code.push_str(&format!("package {};\n\n", config.query_package()));
    if table.has_date || table.has_date_time {
        code.push_str("import java.util.Date;\n");
    }
    if table.has_decimal {
        code.push_str("import java.math.BigDecimal;\n");
    }
    if table.has_date || table.has_date_time || table.has_decimal {
        code.push('\n');
    }

    let description = match &table.comment {
        Some(text) => format!("{text} query"),
        None => format!("{} query", table.bean_name),
    };
    code.push_str(&comment::class_comment(&description, &config.author));
    code.push_str(&format!(
        "public class {class_name} extends BaseQuery {{\n\n"
    ));

    for field in &table.fields {
        code.push_str(&comment::field_comment(field.comment.as_deref()));
        code.push_str(&format!(
            "\tprivate {} {};\n\n",
            field.field_type.java_type(),
            field.property_name
        ));
    }
    for ext in &extended {
        code.push_str(&format!("\tprivate String {};\n\n", ext.property_name));
    }

    for field in &table.fields {
        code.push_str(&accessors(
            field.field_type.java_type(),
            &field.property_name,
        ));
    }
    for ext in &extended {
        code.push_str(&accessors("String", &ext.property_name));
    }

    code.push_str("}\n");
    code
}

fn accessors(ty: &str, prop: &str) -> String {
    let upper = naming::upper_first(prop);
    format!(
        "\tpublic void set{upper}({ty} {prop}) {{\n\t\tthis.{prop} = {prop};\n\t}}\n\n\
         \tpublic {ty} get{upper}() {{\n\t\treturn this.{prop};\n\t}}\n\n"
    )
}
