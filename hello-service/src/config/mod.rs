use service_core::config as core_config;
use service_core::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelloConfig {
    pub common: core_config::Config,
}

impl HelloConfig {
    pub fn load() -> Result<Self, AppError> {
        Ok(HelloConfig {
            common: core_config::Config::load()?,
        })
    }
}

impl From<core_config::Config> for HelloConfig {
    fn from(common: core_config::Config) -> Self {
        Self { common }
    }
}
