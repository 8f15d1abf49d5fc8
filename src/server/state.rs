use std::sync::Arc;

use crate::features::home::HomeResponse;

#[derive(Clone)]
pub struct AppState {
    pub home: Arc<HomeResponse>,
}

impl AppState {
    pub fn new(home: HomeResponse) -> Self {
        Self {
            home: Arc::new(home),
        }
    }
}
