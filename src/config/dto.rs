use crate::features::home::HomeResponse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub home: HomeResponse,
}
