//! Common constants used throughout dropin.

/// Exclusion config file names, in order of preference.
pub const CONFIG_FILES: [&str; 3] = ["dropin.json", "dropin.yaml", "dropin.yml"];

/// Subdirectories every AppTemplate source root carries.
pub const SOURCE_MARKERS: [&str; 2] = ["protos", "web"];

/// The one dotfile that is copied despite the hidden-file rule.
pub const WHITELISTED_DOTFILE: &str = ".devloop.yaml";

/// Suffix of the sibling directory holding a pre-run copy of the target.
pub const BACKUP_SUFFIX: &str = ".backup";

/// Tokens of the template project that get renamed.
pub mod project {
    /// Go module path of the template.
    pub const MODULE_PATH: &str = "github.com/panyam/apptemplate";
    /// Lowercase project token, used in paths, packages and binaries.
    pub const NAME: &str = "apptemplate";
    /// Uppercase token, used as environment-variable prefix.
    pub const UPPER_NAME: &str = "APPTEMPLATE";
    /// Display name of the template application.
    pub const DISPLAY_NAME: &str = "AppTemplate";
}

/// Tokens of the template entity that get renamed.
pub mod entity {
    pub const PASCAL_SINGULAR: &str = "AppItem";
    pub const PASCAL_PLURAL: &str = "AppItems";
    pub const LOWER_SINGULAR: &str = "appitem";
    pub const LOWER_PLURAL: &str = "appitems";
}

/// Template files whose name and content are parameterized by the entity.
pub const ENTITY_ROLE_FILES: [&str; 8] = [
    "protos/apptemplate/v1/appitems.proto",
    "services/appitems_service.go",
    "web/server/AppItemDetailPage.go",
    "web/server/AppItemListView.go",
    "web/server/appitems_handler.go",
    "web/templates/AppItemDetailPage.html",
    "web/templates/AppItemList.html",
    "web/frontend/components/AppItemDetailsPage.ts",
];

/// The shared schema-definition file, rewritten once per run.
pub const SCHEMA_FILE: &str = "protos/apptemplate/v1/models.proto";

/// File extensions read as text and run through the project pass.
pub const TRANSFORMABLE_EXTENSIONS: &[&str] = &[
    "go", "proto", "ts", "tsx", "js", "jsx", "mjs", "json", "yaml", "yml", "toml", "html",
    "htm", "css", "scss", "md", "txt", "mod", "sum", "sh", "py", "sql", "env", "cfg", "ini",
    "xml", "tmpl",
];

/// Basenames read as text regardless of their extension.
pub const TRANSFORMABLE_BASENAMES: &[&str] =
    &["Makefile", "Dockerfile", "Procfile", ".devloop.yaml"];

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
