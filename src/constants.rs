// Configuration file name
pub const CONFIG_FILENAME: &str = "myschema.yaml";

// Environment variable overriding the configured flavor
pub const FLAVOR_ENV_VAR: &str = "MYSCHEMA_FLAVOR";
