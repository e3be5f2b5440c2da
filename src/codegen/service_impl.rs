//! Service implementation generator

use crate::config::GenConfig;
use crate::error::Result;
use crate::model::TableInfo;

use super::{comment, keys, naming, writer};

pub fn generate(table: &TableInfo, config: &GenConfig) -> Result<()> {
    let content = render(table, config);
    writer::write_artifact(
        &config.dir_for_package(&config.service_impl_package()),
        &format!("{}{}.java", table.bean_name, config.suffix_service_impl),
        &content,
        &table.table_name,
        "service impl",
    )
}

/// Render the service implementation: straight delegation to the mapper,
/// plus the composed pagination operation.
pub fn render(table: &TableInfo, config: &GenConfig) -> String {
    let bean = &table.bean_name;
    let class_name = format!("{bean}{}", config.suffix_service_impl);
    let service = format!("{bean}{}", config.suffix_service);
    let mapper = format!("{bean}{}", config.suffix_mapper);
    let query = format!("{bean}{}", config.suffix_query);
    let bean_lower = naming::lower_first(bean);
    let mapper_field = format!("{bean_lower}{}", config.suffix_mapper);

    let mut code = String::new();
    code.push_str(&format!("package {};\n\n", config.service_impl_package()));
    code.push_str("import java.util.List;\n\n");
    code.push_str("import javax.annotation.Resource;\n\n");
    code.push_str("import org.springframework.stereotype.Service;\n\n");
    code.push_str(&format!("import {}.PageSize;\n", config.enums_package()));
    code.push_str(&format!("import {}.{mapper};\n", config.mapper_package()));
    code.push_str(&format!("import {}.{bean};\n", config.po_package()));
    code.push_str(&format!("import {}.SimplePage;\n", config.query_package()));
    code.push_str(&format!("import {}.{query};\n", config.query_package()));
    code.push_str(&format!(
        "import {}.{service};\n",
        config.service_package()
    ));
    code.push_str(&format!(
        "import {}.PaginationResultVO;\n\n",
        config.vo_package()
    ));

    let description = match &table.comment {
        Some(text) => format!("{text} service implementation"),
        None => format!("{bean} service implementation"),
    };
    code.push_str(&comment::class_comment(&description, &config.author));
    code.push_str(&format!(
        "@Service(\"{service_field}\")\npublic class {class_name} implements {service} {{\n\n",
        service_field = naming::lower_first(&service)
    ));
    code.push_str(&format!(
        "\t@Resource\n\tprivate {mapper}<{bean}, {query}> {mapper_field};\n\n"
    ));

    code.push_str(&format!(
        "\t@Override\n\tpublic List<{bean}> findListByParam({query} query) {{\n\
         \t\treturn this.{mapper_field}.selectList(query);\n\t}}\n\n"
    ));
    code.push_str(&format!(
        "\t@Override\n\tpublic Integer findCountByParam({query} query) {{\n\
         \t\treturn this.{mapper_field}.selectCount(query);\n\t}}\n\n"
    ));

    code.push_str(&format!(
        "\t/**\n\t * paginated query\n\t */\n\
         \t@Override\n\tpublic PaginationResultVO<{bean}> findPageByParam({query} query) {{\n\
         \t\tInteger count = this.findCountByParam(query);\n\
         \t\tInteger pageSize = query.getPageSize() == null ? PageSize.SIZE15.getSize() : query.getPageSize();\n\
         \t\tSimplePage page = new SimplePage(query.getPageNo(), count, pageSize);\n\
         \t\tquery.setSimplePage(page);\n\
         \t\tList<{bean}> list = this.findListByParam(query);\n\
         \t\treturn new PaginationResultVO<>(count, page.getPageSize(), page.getPageNo(), page.getPageTotal(), list);\n\
         \t}}\n\n"
    ));

    code.push_str(&format!(
        "\t@Override\n\tpublic Integer add({bean} bean) {{\n\
         \t\treturn this.{mapper_field}.insert(bean);\n\t}}\n\n"
    ));
    code.push_str(&format!(
        "\t@Override\n\tpublic Integer addBatch(List<{bean}> listBean) {{\n\
         \t\tif (listBean == null || listBean.isEmpty()) {{\n\t\t\treturn 0;\n\t\t}}\n\
         \t\treturn this.{mapper_field}.insertBatch(listBean);\n\t}}\n\n"
    ));
    code.push_str(&format!(
        "\t@Override\n\tpublic Integer addOrUpdateBatch(List<{bean}> listBean) {{\n\
         \t\tif (listBean == null || listBean.isEmpty()) {{\n\t\t\treturn 0;\n\t\t}}\n\
         \t\treturn this.{mapper_field}.insertOrUpdateBatch(listBean);\n\t}}\n\n"
    ));
    code.push_str(&format!(
        "\t@Override\n\tpublic Integer updateByParam({bean} bean, {query} query) {{\n\
         \t\treturn this.{mapper_field}.updateByParam(bean, query);\n\t}}\n\n"
    ));
    code.push_str(&format!(
        "\t@Override\n\tpublic Integer deleteByParam({query} query) {{\n\
         \t\treturn this.{mapper_field}.deleteByParam(query);\n\t}}\n\n"
    ));

    for group in &table.key_groups {
        let compound = keys::compound_name(group);
        let params = keys::param_list(&group.fields);
        let args = keys::arg_list(&group.fields);

        code.push_str(&format!(
            "\t@Override\n\tpublic {bean} get{bean}By{compound}({params}) {{\n\
             \t\treturn this.{mapper_field}.selectBy{compound}({args});\n\t}}\n\n"
        ));
        code.push_str(&format!(
            "\t@Override\n\tpublic Integer update{bean}By{compound}({bean} bean, {params}) {{\n\
             \t\treturn this.{mapper_field}.updateBy{compound}(bean, {args});\n\t}}\n\n"
        ));
        code.push_str(&format!(
            "\t@Override\n\tpublic Integer delete{bean}By{compound}({params}) {{\n\
             \t\treturn this.{mapper_field}.deleteBy{compound}({args});\n\t}}\n\n"
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
    fn test_impl_wires_mapper_and_service() {
        let table = user_info_table();
        let config = GenConfig::default();
        let code = render(&table, &config);

        assert!(code.contains("@Service(\"userInfoService\")"));
        assert!(code.contains("public class UserInfoServiceImpl implements UserInfoService {"));
        assert!(code.contains("private UserInfoMapper<UserInfo, UserInfoQuery> userInfoMapper;"));
    }

    #[test]
    fn test_pagination_composition() {
        let table = user_info_table();
        let config = GenConfig::default();
        let code = render(&table, &config);

        assert!(code.contains("Integer count = this.findCountByParam(query);"));
        assert!(code.contains(
            "Integer pageSize = query.getPageSize() == null ? PageSize.SIZE15.getSize() : query.getPageSize();"
        ));
        assert!(code.contains("SimplePage page = new SimplePage(query.getPageNo(), count, pageSize);"));
        assert!(code.contains("query.setSimplePage(page);"));
        assert!(code.contains(
            "new PaginationResultVO<>(count, page.getPageSize(), page.getPageNo(), page.getPageTotal(), list);"
        ));
    }

    #[test]
    fn test_key_delegation_matches_mapper_names() {
        let table = user_info_table();
        let config = GenConfig::default();
        let code = render(&table, &config);

        assert!(code.contains("return this.userInfoMapper.selectByUserId(userId);"));
        assert!(code.contains("return this.userInfoMapper.updateByUserId(bean, userId);"));
        assert!(code.contains("return this.userInfoMapper.deleteByUserId(userId);"));
    }

    #[test]
    fn test_composite_key_argument_order() {
        let table = composite_key_table();
        let config = GenConfig::default();
        let code = render(&table, &config);
        assert!(code.contains("selectByBAndA(b, a);"));
    }
}
