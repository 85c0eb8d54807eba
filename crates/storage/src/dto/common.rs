use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Identifies an athlete by exact, case-sensitive name
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct AthleteNamePath {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponse {
    pub deleted: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}
