use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
