//! Mapper (data-access) interface generator

use crate::config::GenConfig;
use crate::error::Result;
use crate::model::TableInfo;

use super::{comment, keys, writer};

pub fn generate(table: &TableInfo, config: &GenConfig) -> Result<()> {
    let content = render(table, config);
    writer::write_artifact(
        &config.dir_for_package(&config.mapper_package()),
        &format!("{}{}.java", table.bean_name, config.suffix_mapper),
        &content,
        &table.table_name,
        "mapper",
    )
}

/// Render the MyBatis mapper interface: the generic CRUD surface comes from
/// `BaseMapper`, plus a select/update/delete triple per key group.
pub fn render(table: &TableInfo, config: &GenConfig) -> String {
    let class_name = format!("{}{}", table.bean_name, config.suffix_mapper);

    let mut code = String::new();
    code.push_str(&format!("package {};\n\n", config.mapper_package()));
    code.push_str("import org.apache.ibatis.annotations.Param;\n\n");

    let description = match &table.comment {
        Some(text) => format!("{text} mapper"),
        None => format!("{} mapper", table.bean_name),
    };
    code.push_str(&comment::class_comment(&description, &config.author));
    code.push_str(&format!(
        "public interface {class_name}<T, P> extends BaseMapper<T, P> {{\n\n"
    ));

    for group in &table.key_groups {
        let compound = keys::compound_name(group);
        let params = keys::annotated_param_list(&group.fields);
        let described = keys::key_description(&group.fields);

        code.push_str(&format!(
            "\t/**\n\t * select by {described}\n\t */\n\tT selectBy{compound}({params});\n\n"
        ));
        code.push_str(&format!(
            "\t/**\n\t * update by {described}\n\t */\n\tInteger updateBy{compound}(@Param(\"bean\") T t, {params});\n\n"
        ));
        code.push_str(&format!(
            "\t/**\n\t * delete by {described}\n\t */\n\tInteger deleteBy{compound}({params});\n\n"
        ));
    }

    code.push_str("}\n");
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::test_fixtures::{composite_key_table, user_info_table};

    #[test]
    fn test_mapper_extends_base_contract() {
        let table = user_info_table();
        let config = GenConfig::default();
        let code = render(&table, &config);
        assert!(code.contains("public interface UserInfoMapper<T, P> extends BaseMapper<T, P> {"));
        assert!(code.contains("import org.apache.ibatis.annotations.Param;"));
    }

    #[test]
    fn test_key_methods_for_primary_key() {
        let table = user_info_table();
        let config = GenConfig::default();
        let code = render(&table, &config);

        assert!(code.contains("T selectByUserId(@Param(\"userId\") String userId);"));
        assert!(code.contains(
            "Integer updateByUserId(@Param(\"bean\") T t, @Param(\"userId\") String userId);"
        ));
        assert!(code.contains("Integer deleteByUserId(@Param(\"userId\") String userId);"));
        // The delete family is uniformly named
        assert!(!code.contains("deletetBy"));
    }

    #[test]
    fn test_composite_key_preserves_declared_order() {
        let table = composite_key_table();
        let config = GenConfig::default();
        let code = render(&table, &config);

        assert!(code.contains("selectByBAndA"));
        assert!(!code.contains("selectByAAndB"));
        assert!(code.contains("@Param(\"b\") Integer b, @Param(\"a\") Integer a"));
    }
}
