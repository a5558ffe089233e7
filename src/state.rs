use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::geo::GeoClient;
use crate::intake::IntakeClient;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<SiteConfig>,
    pub intake: Arc<dyn IntakeClient>,
    pub geo: Arc<dyn GeoClient>,
}
