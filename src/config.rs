//! Configuration file parsing and validation

pub mod dispatch_toml;
pub mod template;

pub use dispatch_toml::{
    CONFIG_ENV_VAR, CONFIG_FILE_NAME, DispatchConfig, DispatchMeta, EnvironmentConfig,
    ExtendedTemplate, FullTemplate,
};
pub use template::{PathTemplate, TemplateVars};
