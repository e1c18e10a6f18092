use tracing::instrument;

use crate::client::JiraClient;
use crate::error::Result;
use crate::models::User;

impl JiraClient {
  /// Get the user the access token belongs to
  #[instrument(skip(self), level = "debug")]
  pub async fn get_current_user(&self) -> Result<User> {
    self.get(&["myself"]).await
  }
}
