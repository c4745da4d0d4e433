use crate::domain::error::VcapError;
use crate::domain::models::config::{Config, APPLICATION_KEY, SERVICES_KEY};
use crate::domain::models::{ApplicationDescriptor, ServiceRegistry};
use crate::domain::ports::EnvironmentSource;
use crate::infrastructure::environment::SystemEnvironment;

/// Loads VCAP descriptors from an environment source
///
/// Every call re-reads and re-parses the variable; nothing is cached.
#[derive(Debug, Clone)]
pub struct VcapLoader<E = SystemEnvironment> {
    env: E,
    application_key: String,
    services_key: String,
}

impl VcapLoader<SystemEnvironment> {
    /// Loader over the process environment with the platform variable names
    pub fn new() -> Self {
        Self::with_env(SystemEnvironment)
    }
}

impl Default for VcapLoader<SystemEnvironment> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EnvironmentSource> VcapLoader<E> {
    /// Loader over `env` with the platform variable names
    pub fn with_env(env: E) -> Self {
        Self {
            env,
            application_key: APPLICATION_KEY.to_string(),
            services_key: SERVICES_KEY.to_string(),
        }
    }

    /// Loader over `env` using the variable names from `config`
    pub fn from_config(env: E, config: &Config) -> Self {
        Self::with_env(env).with_keys(&config.application_key, &config.services_key)
    }

    /// Override the variable names
    #[must_use]
    pub fn with_keys(
        mut self,
        application_key: impl Into<String>,
        services_key: impl Into<String>,
    ) -> Self {
        self.application_key = application_key.into();
        self.services_key = services_key.into();
        self
    }

    pub fn application_key(&self) -> &str {
        &self.application_key
    }

    pub fn services_key(&self) -> &str {
        &self.services_key
    }

    /// Decode the application descriptor.
    ///
    /// # Errors
    /// [`VcapError::Decode`] when the variable is unset, empty, or malformed.
    pub fn load_application(&self) -> Result<ApplicationDescriptor, VcapError> {
        let json = self.env.var(&self.application_key).unwrap_or_default();
        ApplicationDescriptor::from_json(&self.application_key, &json)
    }

    /// Decode the service bindings.
    ///
    /// # Errors
    /// [`VcapError::Decode`] when the variable is unset, empty, or malformed.
    pub fn load_services(&self) -> Result<ServiceRegistry, VcapError> {
        let json = self.env.var(&self.services_key).unwrap_or_default();
        ServiceRegistry::from_json(&self.services_key, &json)
    }
}

/// Decode `VCAP_APPLICATION` from the process environment
pub fn load_application() -> Result<ApplicationDescriptor, VcapError> {
    VcapLoader::new().load_application()
}

/// Decode `VCAP_SERVICES` from the process environment
pub fn load_services() -> Result<ServiceRegistry, VcapError> {
    VcapLoader::new().load_services()
}
