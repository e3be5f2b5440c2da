//! Shared support files emitted from static templates
//!
//! Each file is the template body with a generated package line (and any
//! cross-package imports) prepended. The templates carry everything else,
//! including their own framework imports.

use std::fs;

use tracing::{error, info};

use crate::config::GenConfig;
use crate::error::{GenError, Result};

use super::writer;

/// Emit every shared support file. A missing template or write failure is
/// fatal for that one file only.
pub fn generate(config: &GenConfig) {
    let files = base_files(config);
    info!("generating {} base files", files.len());
    for (class_name, package, imports) in files {
        if let Err(err) = generate_one(class_name, &package, &imports, config) {
            error!(file = class_name, %err, "base file generation failed");
        }
    }
}

/// (class name, target package, injected import lines) per support file.
fn base_files(config: &GenConfig) -> Vec<(&'static str, String, Vec<String>)> {
    let enums = config.enums_package();
    let vo = config.vo_package();
    vec![
        ("DateUtils", config.utils_package(), vec![]),
        ("DateTimePatternEnum", enums.clone(), vec![]),
        ("PageSize", enums.clone(), vec![]),
        ("ResponseCodeEnum", enums.clone(), vec![]),
        (
            "SimplePage",
            config.query_package(),
            vec![format!("import {enums}.PageSize;")],
        ),
        ("BaseQuery", config.query_package(), vec![]),
        ("BaseMapper", config.mapper_package(), vec![]),
        ("PaginationResultVO", vo.clone(), vec![]),
        ("ResponseVO", vo.clone(), vec![]),
        (
            "BusinessException",
            config.exception_package(),
            vec![format!("import {enums}.ResponseCodeEnum;")],
        ),
        (
            "ABaseController",
            config.controller_package(),
            vec![
                format!("import {enums}.ResponseCodeEnum;"),
                format!("import {vo}.ResponseVO;"),
            ],
        ),
        (
            "AGlobalExceptionHandlerController",
            config.controller_package(),
            vec![
                format!("import {enums}.ResponseCodeEnum;"),
                format!("import {vo}.ResponseVO;"),
                format!("import {}.BusinessException;", config.exception_package()),
            ],
        ),
    ]
}

fn generate_one(
    class_name: &'static str,
    package: &str,
    imports: &[String],
    config: &GenConfig,
) -> Result<()> {
    let template_path = config.templates_dir.join(format!("{class_name}.txt"));
    if !template_path.is_file() {
        return Err(GenError::TemplateMissing(template_path));
    }
    let body = fs::read_to_string(&template_path)?;

    let mut content = format!("package {package};\n\n");
    for import in imports {
        content.push_str(import);
        content.push('\n');
    }
    if !imports.is_empty() {
        content.push('\n');
    }
    content.push_str(&body);

    writer::write_artifact(
        &config.dir_for_package(package),
        &format!("{class_name}.java"),
        &content,
        "base",
        class_name,
    )
}
