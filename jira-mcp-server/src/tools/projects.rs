//! Parameter structs for project tools.

use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectKeyParams {
  /// The project key (e.g. "PROJ").
  pub project_key: String,
}
