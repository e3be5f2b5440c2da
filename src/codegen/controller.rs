//! Request-handling layer (controller) generator

use crate::config::GenConfig;
use crate::error::Result;
use crate::model::TableInfo;

use super::{comment, keys, naming, writer};

pub fn generate(table: &TableInfo, config: &GenConfig) -> Result<()> {
    let content = render(table, config);
    writer::write_artifact(
        &config.dir_for_package(&config.controller_package()),
        &format!("{}{}.java", table.bean_name, config.suffix_controller),
        &content,
        &table.table_name,
        "controller",
    )
}

/// Render the controller: one endpoint per service operation, every result
/// wrapped in the shared success envelope.
pub fn render(table: &TableInfo, config: &GenConfig) -> String {
    let bean = &table.bean_name;
    let class_name = format!("{bean}{}", config.suffix_controller);
    let service = format!("{bean}{}", config.suffix_service);
    let query = format!("{bean}{}", config.suffix_query);
    let bean_lower = naming::lower_first(bean);
    let service_field = naming::lower_first(&service);

    let mut code = String::new();
    code.push_str(&format!("package {};\n\n", config.controller_package()));
    code.push_str("import java.util.List;\n\n");
    code.push_str("import javax.annotation.Resource;\n\n");
    code.push_str("import org.springframework.web.bind.annotation.RequestBody;\n");
    code.push_str("import org.springframework.web.bind.annotation.RequestMapping;\n");
    code.push_str("import org.springframework.web.bind.annotation.RestController;\n\n");
    code.push_str(&format!("import {}.{bean};\n", config.po_package()));
    code.push_str(&format!("import {}.{query};\n", config.query_package()));
    code.push_str(&format!(
        "import {}.{service};\n",
        config.service_package()
    ));
    code.push_str(&format!("import {}.ResponseVO;\n\n", config.vo_package()));

    let description = match &table.comment {
        Some(text) => format!("{text} controller"),
        None => format!("{bean} controller"),
    };
    code.push_str(&comment::class_comment(&description, &config.author));
    code.push_str(&format!(
        "@RestController(\"{bean_lower}{}\")\n@RequestMapping(\"/{bean_lower}\")\n",
        config.suffix_controller
    ));
    code.push_str(&format!(
        "public class {class_name} extends ABaseController {{\n\n"
    ));
    code.push_str(&format!(
        "\t@Resource\n\tprivate {service} {service_field};\n\n"
    ));

    code.push_str(&format!(
        "\t/**\n\t * paginated list\n\t */\n\
         \t@RequestMapping(\"/loadDataList\")\n\
         \tpublic ResponseVO loadDataList({query} query) {{\n\
         \t\treturn getSuccessResponseVO(this.{service_field}.findPageByParam(query));\n\t}}\n\n"
    ));
    code.push_str(&format!(
        "\t@RequestMapping(\"/add\")\n\
         \tpublic ResponseVO add({bean} bean) {{\n\
         \t\treturn getSuccessResponseVO(this.{service_field}.add(bean));\n\t}}\n\n"
    ));
    code.push_str(&format!(
        "\t@RequestMapping(\"/addBatch\")\n\
         \tpublic ResponseVO addBatch(@RequestBody List<{bean}> listBean) {{\n\
         \t\treturn getSuccessResponseVO(this.{service_field}.addBatch(listBean));\n\t}}\n\n"
    ));
    code.push_str(&format!(
        "\t@RequestMapping(\"/addOrUpdateBatch\")\n\
         \tpublic ResponseVO addOrUpdateBatch(@RequestBody List<{bean}> listBean) {{\n\
         \t\treturn getSuccessResponseVO(this.{service_field}.addOrUpdateBatch(listBean));\n\t}}\n\n"
    ));
    code.push_str(&format!(
        "\t@RequestMapping(\"/updateByParam\")\n\
         \tpublic ResponseVO updateByParam({bean} bean, {query} query) {{\n\
         \t\treturn getSuccessResponseVO(this.{service_field}.updateByParam(bean, query));\n\t}}\n\n"
    ));
    code.push_str(&format!(
        "\t@RequestMapping(\"/deleteByParam\")\n\
         \tpublic ResponseVO deleteByParam({query} query) {{\n\
         \t\treturn getSuccessResponseVO(this.{service_field}.deleteByParam(query));\n\t}}\n\n"
    ));

    for group in &table.key_groups {
        let compound = keys::compound_name(group);
        let params = keys::param_list(&group.fields);
        let args = keys::arg_list(&group.fields);

        code.push_str(&format!(
            "\t@RequestMapping(\"/get{bean}By{compound}\")\n\
             \tpublic ResponseVO get{bean}By{compound}({params}) {{\n\
             \t\treturn getSuccessResponseVO(this.{service_field}.get{bean}By{compound}({args}));\n\t}}\n\n"
        ));
        code.push_str(&format!(
            "\t@RequestMapping(\"/update{bean}By{compound}\")\n\
             \tpublic ResponseVO update{bean}By{compound}({bean} bean, {params}) {{\n\
             \t\treturn getSuccessResponseVO(this.{service_field}.update{bean}By{compound}(bean, {args}));\n\t}}\n\n"
        ));
        code.push_str(&format!(
            "\t@RequestMapping(\"/delete{bean}By{compound}\")\n\
             \tpublic ResponseVO delete{bean}By{compound}({params}) {{\n\
             \t\treturn getSuccessResponseVO(this.{service_field}.delete{bean}By{compound}({args}));\n\t}}\n\n"
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
    fn test_controller_shape() {
        let table = user_info_table();
        let config = GenConfig::default();
        let code = render(&table, &config);

        assert!(code.contains("@RestController(\"userInfoController\")"));
        assert!(code.contains("@RequestMapping(\"/userInfo\")"));
        assert!(code.contains("public class UserInfoController extends ABaseController {"));
        assert!(code.contains("private UserInfoService userInfoService;"));
    }

    #[test]
    fn test_every_result_is_enveloped() {
        let table = user_info_table();
        let config = GenConfig::default();
        let code = render(&table, &config);

        let endpoints = code.matches("@RequestMapping(\"/").count();
        // Every endpoint body goes through the success-envelope helper,
        // plus the class-level mapping annotation
        assert_eq!(code.matches("getSuccessResponseVO(").count(), endpoints - 1);
    }

    #[test]
    fn test_key_endpoints_match_service_names() {
        let table = user_info_table();
        let config = GenConfig::default();
        let code = render(&table, &config);

        assert!(code.contains("@RequestMapping(\"/getUserInfoByUserId\")"));
        assert!(code.contains(
            "return getSuccessResponseVO(this.userInfoService.getUserInfoByUserId(userId));"
        ));
        assert!(code.contains("@RequestMapping(\"/deleteUserInfoByUserId\")"));
    }
}
