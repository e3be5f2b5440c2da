//! Mapping document (MyBatis XML) generator
//!
//! The largest artifact: result map, reusable SQL fragments, conditional
//! CRUD statements, and a statement triple per key group. Clause names and
//! parameter bindings are derived through the same key/naming helpers the
//! other generators use.

use std::collections::HashSet;

use crate::config::GenConfig;
use crate::error::Result;
use crate::model::{ExtendKind, FieldInfo, TableInfo};

use super::{keys, writer};

pub fn generate(table: &TableInfo, config: &GenConfig) -> Result<()> {
    let content = render(table, config);
    writer::write_artifact(
        &config.mapper_xml_dir(),
        &format!("{}{}.xml", table.bean_name, config.suffix_mapper),
        &content,
        &table.table_name,
        "mapper xml",
    )
}

pub fn render(table: &TableInfo, config: &GenConfig) -> String {
    let namespace = format!(
        "{}.{}{}",
        config.mapper_package(),
        table.bean_name,
        config.suffix_mapper
    );
    let po_class = format!("{}.{}", config.po_package(), table.bean_name);

    let mut code = String::new();
    code.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    code.push_str("<!DOCTYPE mapper PUBLIC \"-//mybatis.org//DTD Mapper 3.0//EN\"\n");
    code.push_str("\t\t\"http://mybatis.org/dtd/mybatis-3-mapper.dtd\">\n");
    code.push_str(&format!("<mapper namespace=\"{namespace}\">\n\n"));

    code.push_str(&render_result_map(table, &po_class));
    code.push_str(&render_column_list(table));
    code.push_str(&render_base_condition(table));
    code.push_str(&render_extend_condition(table, config));
    code.push_str(&render_query_condition());
    code.push_str(&render_select_list(table));
    code.push_str(&render_select_count(table));
    code.push_str(&render_insert(table, &po_class));
    code.push_str(&render_insert_or_update(table, &po_class));
    code.push_str(&render_insert_batch(table, &po_class));
    code.push_str(&render_insert_or_update_batch(table, &po_class));
    code.push_str(&render_update_by_param(table));
    code.push_str(&render_delete_by_param(table));
    code.push_str(&render_key_statements(table, &po_class));

    code.push_str("</mapper>\n");
    code
}

/// Property names appearing in any key group; these stay out of on-conflict
/// update lists and drive the fail-fast guard.
fn key_properties(table: &TableInfo) -> HashSet<&str> {
    table
        .key_groups
        .iter()
        .flat_map(|g| g.fields.iter())
        .map(|f| f.property_name.as_str())
        .collect()
}

fn render_result_map(table: &TableInfo, po_class: &str) -> String {
    let id_column = table.single_primary_key().map(|f| f.field_name.as_str());

    let mut code = String::new();
    code.push_str("\t<!-- entity mapping -->\n");
    code.push_str(&format!(
        "\t<resultMap id=\"base_result_map\" type=\"{po_class}\">\n"
    ));
    for field in &table.fields {
        if let Some(text) = field.comment.as_deref().filter(|c| !c.is_empty()) {
            code.push_str(&format!("\t\t<!-- {text} -->\n"));
        }
        let tag = if id_column == Some(field.field_name.as_str()) {
            "id"
        } else {
            "result"
        };
        code.push_str(&format!(
            "\t\t<{tag} column=\"{}\" property=\"{}\"/>\n",
            field.field_name, field.property_name
        ));
    }
    code.push_str("\t</resultMap>\n\n");
    code
}

fn render_column_list(table: &TableInfo) -> String {
    let columns: Vec<&str> = table.fields.iter().map(|f| f.field_name.as_str()).collect();
    format!(
        "\t<!-- column list -->\n\t<sql id=\"base_column_list\">\n\t\t{}\n\t</sql>\n\n",
        columns.join(",")
    )
}

/// One conditional equality clause per source column; string columns also
/// check for emptiness.
fn render_base_condition(table: &TableInfo) -> String {
    let mut code = String::new();
    code.push_str("\t<!-- base query conditions -->\n");
    code.push_str("\t<sql id=\"base_query_condition\">\n");
    for field in &table.fields {
        let prop = &field.property_name;
        let test = if field.field_type.is_string() {
            format!("query.{prop} != null and query.{prop} != ''")
        } else {
            format!("query.{prop} != null")
        };
        code.push_str(&format!(
            "\t\t<if test=\"{test}\">\n\t\t\tand {} = #{{query.{prop}}}\n\t\t</if>\n",
            field.field_name
        ));
    }
    code.push_str("\t</sql>\n\n");
    code
}

/// Conditional clauses for the synthetic fuzzy/range fields. Fuzzy fields
/// match by substring; range fields bound the day inclusively at the start
/// and exclusively at the next-day boundary at the end.
fn render_extend_condition(table: &TableInfo, config: &GenConfig) -> String {
    let mut code = String::new();
    code.push_str("\t<!-- extended query conditions -->\n");
    code.push_str("\t<sql id=\"base_query_condition_extend\">\n");
    for ext in table.extended_query_fields(config) {
        let prop = &ext.property_name;
        let column = &ext.field_name;
        let clause = match ext.kind {
            ExtendKind::Fuzzy => {
                format!("\t\t\tand {column} like concat('%', #{{query.{prop}}}, '%')\n")
            }
            ExtendKind::RangeStart => format!(
                "\t\t\t<![CDATA[ and {column} >= str_to_date(#{{query.{prop}}}, '%Y-%m-%d') ]]>\n"
            ),
            ExtendKind::RangeEnd => format!(
                "\t\t\t<![CDATA[ and {column} < date_sub(str_to_date(#{{query.{prop}}}, '%Y-%m-%d'), interval -1 day) ]]>\n"
            ),
        };
        code.push_str(&format!(
            "\t\t<if test=\"query.{prop} != null and query.{prop} != ''\">\n"
        ));
        code.push_str(&clause);
        code.push_str("\t\t</if>\n");
    }
    code.push_str("\t</sql>\n\n");
    code
}

fn render_query_condition() -> String {
    "\t<!-- common query conditions -->\n\
     \t<sql id=\"query_condition\">\n\
     \t\t<where>\n\
     \t\t\t<include refid=\"base_query_condition\"/>\n\
     \t\t\t<include refid=\"base_query_condition_extend\"/>\n\
     \t\t</where>\n\
     \t</sql>\n\n"
        .to_string()
}

fn render_select_list(table: &TableInfo) -> String {
    format!(
        "\t<!-- query list -->\n\
         \t<select id=\"selectList\" resultMap=\"base_result_map\">\n\
         \t\tSELECT <include refid=\"base_column_list\"/> FROM {table} <include refid=\"query_condition\"/>\n\
         \t\t<if test=\"query.orderBy != null and query.orderBy != ''\">order by ${{query.orderBy}}</if>\n\
         \t\t<if test=\"query.simplePage != null\">limit #{{query.simplePage.start}}, #{{query.simplePage.end}}</if>\n\
         \t</select>\n\n",
        table = table.table_name
    )
}

fn render_select_count(table: &TableInfo) -> String {
    format!(
        "\t<!-- query count -->\n\
         \t<select id=\"selectCount\" resultType=\"java.lang.Integer\">\n\
         \t\tSELECT count(1) FROM {} <include refid=\"query_condition\"/>\n\
         \t</select>\n\n",
        table.table_name
    )
}

/// Conditional column/value trim pair over the non-auto-increment columns.
fn conditional_insert_lists(table: &TableInfo) -> String {
    let mut code = String::new();
    code.push_str("\t\t<trim prefix=\"(\" suffix=\")\" suffixOverrides=\",\">\n");
    for field in insertable_fields(table) {
        code.push_str(&format!(
            "\t\t\t<if test=\"bean.{} != null\">{},</if>\n",
            field.property_name, field.field_name
        ));
    }
    code.push_str("\t\t</trim>\n");
    code.push_str("\t\t<trim prefix=\"values (\" suffix=\")\" suffixOverrides=\",\">\n");
    for field in insertable_fields(table) {
        code.push_str(&format!(
            "\t\t\t<if test=\"bean.{prop} != null\">#{{bean.{prop}}},</if>\n",
            prop = field.property_name
        ));
    }
    code.push_str("\t\t</trim>\n");
    code
}

fn insertable_fields(table: &TableInfo) -> impl Iterator<Item = &FieldInfo> {
    table.fields.iter().filter(|f| !f.is_auto_increment)
}

fn render_insert(table: &TableInfo, po_class: &str) -> String {
    let mut code = String::new();
    code.push_str("\t<!-- insert (non-null fields) -->\n");
    code.push_str(&format!(
        "\t<insert id=\"insert\" parameterType=\"{po_class}\">\n"
    ));
    // Last-inserted-identity retrieval only for the single-row insert
    if let Some(auto) = table.auto_increment_field() {
        code.push_str(&format!(
            "\t\t<selectKey keyProperty=\"bean.{}\" resultType=\"{}\" order=\"AFTER\">\n\
             \t\t\tSELECT LAST_INSERT_ID()\n\
             \t\t</selectKey>\n",
            auto.property_name,
            auto.field_type.java_type()
        ));
    }
    code.push_str(&format!("\t\tINSERT INTO {}\n", table.table_name));
    code.push_str(&conditional_insert_lists(table));
    code.push_str("\t</insert>\n\n");
    code
}

fn render_insert_or_update(table: &TableInfo, po_class: &str) -> String {
    let key_props = key_properties(table);

    let mut code = String::new();
    code.push_str("\t<!-- insert or update (non-null fields) -->\n");
    code.push_str(&format!(
        "\t<insert id=\"insertOrUpdate\" parameterType=\"{po_class}\">\n"
    ));
    code.push_str(&format!("\t\tINSERT INTO {}\n", table.table_name));
    code.push_str(&conditional_insert_lists(table));
    code.push_str("\t\ton DUPLICATE key update\n");
    code.push_str("\t\t<trim prefix=\"\" suffix=\"\" suffixOverrides=\",\">\n");
    for field in insertable_fields(table) {
        if key_props.contains(field.property_name.as_str()) {
            continue;
        }
        code.push_str(&format!(
            "\t\t\t<if test=\"bean.{} != null\">{column} = VALUES({column}),</if>\n",
            field.property_name,
            column = field.field_name
        ));
    }
    code.push_str("\t\t</trim>\n");
    code.push_str("\t</insert>\n\n");
    code
}

fn batch_value_row(table: &TableInfo) -> String {
    insertable_fields(table)
        .map(|f| format!("#{{item.{}}}", f.property_name))
        .collect::<Vec<_>>()
        .join(",")
}

fn batch_column_list(table: &TableInfo) -> String {
    insertable_fields(table)
        .map(|f| f.field_name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

fn render_insert_batch(table: &TableInfo, po_class: &str) -> String {
    format!(
        "\t<!-- batch insert -->\n\
         \t<insert id=\"insertBatch\" parameterType=\"{po_class}\">\n\
         \t\tINSERT INTO {table}({columns}) values\n\
         \t\t<foreach collection=\"list\" item=\"item\" separator=\",\">\n\
         \t\t\t({row})\n\
         \t\t</foreach>\n\
         \t</insert>\n\n",
        table = table.table_name,
        columns = batch_column_list(table),
        row = batch_value_row(table)
    )
}

fn render_insert_or_update_batch(table: &TableInfo, po_class: &str) -> String {
    let key_props = key_properties(table);
    let updates: Vec<String> = insertable_fields(table)
        .filter(|f| !key_props.contains(f.property_name.as_str()))
        .map(|f| format!("{column} = VALUES({column})", column = f.field_name))
        .collect();

    format!(
        "\t<!-- batch insert or update -->\n\
         \t<insert id=\"insertOrUpdateBatch\" parameterType=\"{po_class}\">\n\
         \t\tINSERT INTO {table}({columns}) values\n\
         \t\t<foreach collection=\"list\" item=\"item\" separator=\",\">\n\
         \t\t\t({row})\n\
         \t\t</foreach>\n\
         \t\ton DUPLICATE key update\n\
         \t\t{updates}\n\
         \t</insert>\n\n",
        table = table.table_name,
        columns = batch_column_list(table),
        row = batch_value_row(table),
        updates = updates.join(",")
    )
}

/// `1 = 2` when no key-group property is supplied; keeps a filterless call
/// from updating or deleting the whole table.
fn fail_fast_guard(table: &TableInfo) -> String {
    let mut seen = HashSet::new();
    let mut tests = Vec::new();
    for group in &table.key_groups {
        for field in &group.fields {
            if seen.insert(field.property_name.as_str()) {
                tests.push(format!("query.{} == null", field.property_name));
            }
        }
    }
    if tests.is_empty() {
        return String::new();
    }
    format!("\t\t\t<if test=\"{}\">1 = 2</if>\n", tests.join(" and "))
}

fn render_update_by_param(table: &TableInfo) -> String {
    let mut code = String::new();
    code.push_str("\t<!-- update by query conditions -->\n");
    code.push_str("\t<update id=\"updateByParam\">\n");
    code.push_str(&format!("\t\tUPDATE {}\n", table.table_name));
    code.push_str("\t\t<set>\n");
    for field in insertable_fields(table) {
        code.push_str(&format!(
            "\t\t\t<if test=\"bean.{prop} != null\">{} = #{{bean.{prop}}},</if>\n",
            field.field_name,
            prop = field.property_name
        ));
    }
    code.push_str("\t\t</set>\n");
    code.push_str("\t\t<where>\n");
    code.push_str(&fail_fast_guard(table));
    code.push_str("\t\t\t<include refid=\"base_query_condition\"/>\n");
    code.push_str("\t\t\t<include refid=\"base_query_condition_extend\"/>\n");
    code.push_str("\t\t</where>\n");
    code.push_str("\t</update>\n\n");
    code
}

fn render_delete_by_param(table: &TableInfo) -> String {
    let mut code = String::new();
    code.push_str("\t<!-- delete by query conditions -->\n");
    code.push_str("\t<delete id=\"deleteByParam\">\n");
    code.push_str(&format!("\t\tDELETE FROM {}\n", table.table_name));
    code.push_str("\t\t<where>\n");
    code.push_str(&fail_fast_guard(table));
    code.push_str("\t\t\t<include refid=\"base_query_condition\"/>\n");
    code.push_str("\t\t\t<include refid=\"base_query_condition_extend\"/>\n");
    code.push_str("\t\t</where>\n");
    code.push_str("\t</delete>\n\n");
    code
}

/// Select/update/delete triple per key group, bound by the shared equality
/// clause derivation.
fn render_key_statements(table: &TableInfo, po_class: &str) -> String {
    let mut code = String::new();
    for group in &table.key_groups {
        let compound = keys::compound_name(group);
        let clause = keys::equality_clause(&group.fields);

        code.push_str(&format!("\t<!-- select by {compound} -->\n"));
        code.push_str(&format!(
            "\t<select id=\"selectBy{compound}\" resultMap=\"base_result_map\">\n\
             \t\tselect <include refid=\"base_column_list\"/> from {table} where {clause}\n\
             \t</select>\n\n",
            table = table.table_name
        ));

        code.push_str(&format!("\t<!-- update by {compound} -->\n"));
        code.push_str(&format!(
            "\t<update id=\"updateBy{compound}\" parameterType=\"{po_class}\">\n"
        ));
        code.push_str(&format!("\t\tupdate {}\n", table.table_name));
        code.push_str("\t\t<set>\n");
        for field in insertable_fields(table) {
            code.push_str(&format!(
                "\t\t\t<if test=\"bean.{prop} != null\">{} = #{{bean.{prop}}},</if>\n",
                field.field_name,
                prop = field.property_name
            ));
        }
        code.push_str("\t\t</set>\n");
        code.push_str(&format!("\t\twhere {clause}\n"));
        code.push_str("\t</update>\n\n");

        code.push_str(&format!("\t<!-- delete by {compound} -->\n"));
        code.push_str(&format!(
            "\t<delete id=\"deleteBy{compound}\">\n\
             \t\tdelete from {table} where {clause}\n\
             \t</delete>\n\n",
            table = table.table_name
        ));
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::test_fixtures::{
        auto_increment_table, composite_key_table, user_info_table,
    };

    #[test]
    fn test_result_map_tags_single_primary_key() {
        let table = user_info_table();
        let config = GenConfig::default();
        let code = render(&table, &config);

        assert!(code.contains("<resultMap id=\"base_result_map\""));
        assert!(code.contains("<id column=\"user_id\" property=\"userId\"/>"));
        assert!(code.contains("<result column=\"nick_name\" property=\"nickName\"/>"));
    }

    #[test]
    fn test_composite_primary_key_has_no_id_tag() {
        let table = composite_key_table();
        let config = GenConfig::default();
        let code = render(&table, &config);
        assert!(!code.contains("<id column="));
    }

    #[test]
    fn test_base_condition_checks_emptiness_for_strings_only() {
        let table = user_info_table();
        let config = GenConfig::default();
        let code = render(&table, &config);

        assert!(code.contains("query.nickName != null and query.nickName != ''"));
        assert!(code.contains("<if test=\"query.createTime != null\">"));
        assert!(!code.contains("query.createTime != null and query.createTime != ''"));
    }

    #[test]
    fn test_extend_condition_fuzzy_and_range_directions() {
        let table = user_info_table();
        let config = GenConfig::default();
        let code = render(&table, &config);

        assert!(code.contains("and nick_name like concat('%', #{query.nickNameFuzzy}, '%')"));
        assert!(code.contains(
            "<![CDATA[ and create_time >= str_to_date(#{query.createTimeStart}, '%Y-%m-%d') ]]>"
        ));
        assert!(code.contains(
            "<![CDATA[ and create_time < date_sub(str_to_date(#{query.createTimeEnd}, '%Y-%m-%d'), interval -1 day) ]]>"
        ));
    }

    #[test]
    fn test_auto_increment_excluded_from_all_value_lists() {
        let table = auto_increment_table();
        let config = GenConfig::default();
        let code = render(&table, &config);

        // The id column never appears in an insert/update value position
        assert!(!code.contains("<if test=\"bean.id != null\">id,</if>"));
        assert!(!code.contains("#{item.id}"));
        assert!(!code.contains("#{bean.id}"));
        // But the identity retrieval is attached to the plain insert
        assert!(code.contains("<selectKey keyProperty=\"bean.id\" resultType=\"Integer\" order=\"AFTER\">"));
        assert_eq!(code.matches("SELECT LAST_INSERT_ID()").count(), 1);
    }

    #[test]
    fn test_no_select_key_without_auto_increment() {
        let table = user_info_table();
        let config = GenConfig::default();
        let code = render(&table, &config);
        assert!(!code.contains("selectKey"));
    }

    #[test]
    fn test_upsert_update_clause_skips_key_columns() {
        let table = user_info_table();
        let config = GenConfig::default();
        let code = render(&table, &config);

        assert!(code.contains("nick_name = VALUES(nick_name)"));
        assert!(!code.contains("user_id = VALUES(user_id)"));
    }

    #[test]
    fn test_fail_fast_guard_lists_all_key_properties() {
        let table = user_info_table();
        let config = GenConfig::default();
        let code = render(&table, &config);
        assert!(code.contains("<if test=\"query.userId == null\">1 = 2</if>"));

        let composite = composite_key_table();
        let code = render(&composite, &config);
        assert!(code.contains("<if test=\"query.b == null and query.a == null\">1 = 2</if>"));
    }

    #[test]
    fn test_key_statements_use_shared_compound_names() {
        let table = user_info_table();
        let config = GenConfig::default();
        let code = render(&table, &config);

        assert!(code.contains("<select id=\"selectByUserId\""));
        assert!(code.contains("<update id=\"updateByUserId\""));
        assert!(code.contains("<delete id=\"deleteByUserId\""));
        assert!(code.contains("where user_id = #{userId}"));
    }

    #[test]
    fn test_pagination_and_ordering_hooks() {
        let table = user_info_table();
        let config = GenConfig::default();
        let code = render(&table, &config);

        // An empty order-by string must not emit a dangling "order by"
        assert!(code.contains(
            "<if test=\"query.orderBy != null and query.orderBy != ''\">order by ${query.orderBy}</if>"
        ));
        assert!(code.contains("limit #{query.simplePage.start}, #{query.simplePage.end}"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let table = user_info_table();
        let config = GenConfig::default();
        assert_eq!(render(&table, &config), render(&table, &config));
    }
}
