//! Default configuration values - single source of truth

/// Default database connection URL
pub const DATABASE_URL: &str = "mysql://root@localhost:3306/demo";

/// Default author tag written into generated class headers
pub const AUTHOR: &str = "crudgen";

/// Whether to strip the leading `_`-delimited token from table names when
/// deriving the entity class name (e.g. `tb_user_info` -> `UserInfo`)
pub const IGNORE_TABLE_PREFIX: bool = false;

/// Suffix appended to the entity name to form the query object class name
pub const SUFFIX_QUERY: &str = "Query";

/// Suffix appended to a string property to form its fuzzy-match query field
pub const SUFFIX_FUZZY: &str = "Fuzzy";

/// Suffix for the inclusive lower bound of a temporal range query field
pub const SUFFIX_TIME_START: &str = "Start";

/// Suffix for the exclusive upper bound of a temporal range query field
pub const SUFFIX_TIME_END: &str = "End";

/// Suffixes for the remaining per-table artifact class names
pub const SUFFIX_MAPPER: &str = "Mapper";
pub const SUFFIX_SERVICE: &str = "Service";
pub const SUFFIX_SERVICE_IMPL: &str = "ServiceImpl";
pub const SUFFIX_CONTROLLER: &str = "Controller";

/// Base Java package; artifact sub-packages are appended to it
pub const PACKAGE_BASE: &str = "com.example.project";
pub const PACKAGE_PO: &str = "entity.po";
pub const PACKAGE_QUERY: &str = "entity.query";
pub const PACKAGE_VO: &str = "entity.vo";
pub const PACKAGE_ENUMS: &str = "entity.enums";
pub const PACKAGE_UTILS: &str = "utils";
pub const PACKAGE_MAPPER: &str = "mappers";
pub const PACKAGE_SERVICE: &str = "service";
pub const PACKAGE_SERVICE_IMPL: &str = "service.impl";
pub const PACKAGE_CONTROLLER: &str = "controller";
pub const PACKAGE_EXCEPTION: &str = "exception";

/// Root directory the package tree is generated under
pub const OUTPUT_ROOT: &str = "./generated/java";

/// Directory holding the static support-file templates
pub const TEMPLATES_DIR: &str = "./templates";

/// Properties excluded from JSON serialization (comma-separated)
pub const TOJSON_IGNORE_PROPERTIES: &str = "password";

/// Annotation placed on excluded properties, and its import line
pub const TOJSON_EXPRESSION: &str = "@JsonIgnore";
pub const TOJSON_IMPORT: &str = "import com.fasterxml.jackson.annotation.JsonIgnore;";

/// Serialization/deserialization annotations for temporal entity fields;
/// `%s` is replaced with the date pattern
pub const DATE_FORMAT_EXPRESSION: &str = "@JsonFormat(pattern = \"%s\", timezone = \"GMT+8\")";
pub const DATE_FORMAT_IMPORT: &str = "import com.fasterxml.jackson.annotation.JsonFormat;";
pub const DATE_PARSE_EXPRESSION: &str = "@DateTimeFormat(pattern = \"%s\")";
pub const DATE_PARSE_IMPORT: &str = "import org.springframework.format.annotation.DateTimeFormat;";
