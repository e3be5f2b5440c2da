//! Service interface generator

use crate::config::GenConfig;
use crate::error::Result;
use crate::model::TableInfo;

use super::{comment, keys, writer};

pub fn generate(table: &TableInfo, config: &GenConfig) -> Result<()> {
    let content = render(table, config);
    writer::write_artifact(
        &config.dir_for_package(&config.service_package()),
        &format!("{}{}.java", table.bean_name, config.suffix_service),
        &content,
        &table.table_name,
        "service",
    )
}

pub fn render(table: &TableInfo, config: &GenConfig) -> String {
    let bean = &table.bean_name;
    let class_name = format!("{bean}{}", config.suffix_service);
    let query = format!("{bean}{}", config.suffix_query);

    let mut code = String::new();
    code.push_str(&format!("package {};\n\n", config.service_package()));
    code.push_str("import java.util.List;\n\n");
    code.push_str(&format!("import {}.{bean};\n", config.po_package()));
    code.push_str(&format!("import {}.{query};\n", config.query_package()));
    code.push_str(&format!(
        "import {}.PaginationResultVO;\n\n",
        config.vo_package()
    ));

    let description = match &table.comment {
        Some(text) => format!("{text} service"),
        None => format!("{bean} service"),
    };
    code.push_str(&comment::class_comment(&description, &config.author));
    code.push_str(&format!("public interface {class_name} {{\n\n"));

    code.push_str(&format!(
        "\tList<{bean}> findListByParam({query} query);\n\n"
    ));
    code.push_str(&format!(
        "\tInteger findCountByParam({query} query);\n\n"
    ));
    code.push_str(&format!(
        "\tPaginationResultVO<{bean}> findPageByParam({query} query);\n\n"
    ));
    code.push_str(&format!("\tInteger add({bean} bean);\n\n"));
    code.push_str(&format!("\tInteger addBatch(List<{bean}> listBean);\n\n"));
    code.push_str(&format!(
        "\tInteger addOrUpdateBatch(List<{bean}> listBean);\n\n"
    ));
    code.push_str(&format!(
        "\tInteger updateByParam({bean} bean, {query} query);\n\n"
    ));
    code.push_str(&format!("\tInteger deleteByParam({query} query);\n\n"));

    for group in &table.key_groups {
        let compound = keys::compound_name(group);
        let params = keys::param_list(&group.fields);
        code.push_str(&format!("\t{bean} get{bean}By{compound}({params});\n\n"));
        code.push_str(&format!(
            "\tInteger update{bean}By{compound}({bean} bean, {params});\n\n"
        ));
        code.push_str(&format!(
            "\tInteger delete{bean}By{compound}({params});\n\n"
        ));
    }

    code.push_str("}\n");
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::test_fixtures::user_info_table;

    #[test]
    fn test_service_declares_generic_operations() {
        let table = user_info_table();
        let config = GenConfig::default();
        let code = render(&table, &config);

        assert!(code.contains("public interface UserInfoService {"));
        assert!(code.contains("List<UserInfo> findListByParam(UserInfoQuery query);"));
        assert!(code.contains("Integer findCountByParam(UserInfoQuery query);"));
        assert!(code.contains("PaginationResultVO<UserInfo> findPageByParam(UserInfoQuery query);"));
        assert!(code.contains("Integer addOrUpdateBatch(List<UserInfo> listBean);"));
        assert!(code.contains("Integer updateByParam(UserInfo bean, UserInfoQuery query);"));
        assert!(code.contains("Integer deleteByParam(UserInfoQuery query);"));
    }

    #[test]
    fn test_service_key_methods_match_mapper_compound_names() {
        let table = user_info_table();
        let config = GenConfig::default();
        let code = render(&table, &config);

        assert!(code.contains("UserInfo getUserInfoByUserId(String userId);"));
        assert!(code.contains("Integer updateUserInfoByUserId(UserInfo bean, String userId);"));
        assert!(code.contains("Integer deleteUserInfoByUserId(String userId);"));
    }
}
