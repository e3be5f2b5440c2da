//! crudgen: generate a layered Java CRUD stack from a live MySQL schema
//!
//! This crate provides both a CLI tool and a library. It introspects a
//! MySQL schema over a single connection and generates, per table, seven
//! mutually consistent artifacts:
//!
//! - an entity class, a query/filter object, a MyBatis mapper interface and
//!   its XML mapping document, a service interface and implementation, and
//!   a controller
//!
//! plus a fixed set of shared support files rendered from static templates.
//! Every artifact derives its method names, parameter lists, and field sets
//! from the same [`model::TableInfo`] through the same key/naming helpers,
//! so the generated stack links together.
//!
//! # Library usage
//!
//! ```rust,ignore
//! use crudgen::{GenConfig, SchemaIntrospector};
//!
//! let config = GenConfig::load(None)?;
//! let mut introspector = SchemaIntrospector::connect(&config.database_url).await?;
//! let tables = introspector.table_models(&config).await?;
//! crudgen::generate(&tables, &config);
//! introspector.disconnect().await?;
//! ```
//!
//! # CLI usage
//!
//! ```bash
//! crudgen --config crudgen.toml generate
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod introspect;
pub mod model;
pub mod types;

use tracing::info;

pub use config::GenConfig;
pub use error::{GenError, Result};
pub use introspect::SchemaIntrospector;
pub use model::TableInfo;

/// Generate the shared base files and the full per-table stack.
///
/// Best-effort per table and per artifact: failures are logged with their
/// table and artifact context and never abort the rest of the run.
pub fn generate(tables: &[TableInfo], config: &GenConfig) {
    info!("generating base files into {:?}", config.output_root);
    codegen::base::generate(config);

    info!("generating artifacts for {} tables", tables.len());
    for table in tables {
        codegen::generate_table(table, config);
    }

    info!("generation complete");
}
