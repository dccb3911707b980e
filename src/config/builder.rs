use crate::config::{merge::Merge, types::*};
use crate::constants::FLAVOR_ENV_VAR;
use crate::flavor::Flavor;
use anyhow::{Context, Result, anyhow};
use glob::Pattern;
use tracing::debug;

pub struct ConfigBuilder {
    config_input: ConfigInput,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config_input: ConfigInput::default(),
        }
    }

    pub fn with_file(mut self, file_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(file_input);
        self
    }

    /// Apply overrides from the process environment
    pub fn with_env(self) -> Self {
        self.with_env_lookup(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides using a custom lookup, so callers and
    /// tests need not touch the real process environment.
    pub fn with_env_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let env_input = ConfigInput {
            flavor: lookup(FLAVOR_ENV_VAR).filter(|value| !value.is_empty()),
            ..ConfigInput::default()
        };
        if env_input.flavor.is_some() {
            debug!("Flavor overridden by {}", FLAVOR_ENV_VAR);
        }
        self.config_input = self.config_input.merge(env_input);
        self
    }

    pub fn with_cli_args(mut self, cli_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(cli_input);
        self
    }

    pub fn resolve(self) -> Result<Config> {
        let defaults = Config::default();

        Ok(Config {
            flavor: self.resolve_flavor(defaults.flavor)?,
            objects: self.resolve_objects(&defaults.objects)?,
            lint: self.config_input.lint.clone().unwrap_or(defaults.lint),
        })
    }

    fn resolve_flavor(&self, default: Flavor) -> Result<Flavor> {
        match self.config_input.flavor.as_deref() {
            Some(value) => value
                .parse::<Flavor>()
                .with_context(|| format!("Invalid flavor in configuration: {:?}", value)),
            None => Ok(default),
        }
    }

    fn resolve_objects(&self, defaults: &Objects) -> Result<Objects> {
        let obj_input = self.config_input.objects.as_ref();

        let objects = Objects {
            include: obj_input
                .and_then(|o| o.include.as_ref())
                .cloned()
                .unwrap_or_else(|| defaults.include.clone()),
            exclude: obj_input
                .and_then(|o| o.exclude.as_ref())
                .cloned()
                .unwrap_or_else(|| defaults.exclude.clone()),
        };

        for pattern in objects.include.iter().chain(&objects.exclude) {
            Pattern::new(pattern)
                .map_err(|e| anyhow!("Invalid table pattern {:?}: {}", pattern, e))?;
        }

        Ok(objects)
    }
}
