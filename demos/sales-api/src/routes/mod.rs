pub mod charts;
pub mod data;
pub mod sessions;
pub mod stats;

use serde::Deserialize;

/// `?session=<id>` query parameter shared by every dataset-scoped route.
#[derive(Deserialize)]
pub struct SessionParams {
    pub session: Option<String>,
}

impl SessionParams {
    pub fn require(self) -> Result<String, crate::error::AppError> {
        self.session
            .filter(|s| !s.is_empty())
            .ok_or_else(|| crate::error::AppError::bad_request("Missing required query parameter: session"))
    }
}
