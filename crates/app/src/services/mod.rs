mod worked_hours;

use std::sync::Arc;

use hours_notion::RecordStore;

use crate::app::AppConfig;

pub use worked_hours::WorkedHoursService;

type SharedConfig = Arc<AppConfig>;
type SharedStore = Arc<dyn RecordStore>;

/// Service registry for app-level operations.
#[derive(Clone)]
pub struct AppServices {
    pub worked_hours: WorkedHoursService,
}

impl AppServices {
    pub fn new(config: &AppConfig, store: SharedStore) -> Self {
        let shared = Arc::new(config.clone());
        Self {
            worked_hours: WorkedHoursService::new(shared, store),
        }
    }
}
