use async_trait::async_trait;

use crate::{documents::UserData, Status};

/// Access to the remote `users` collection needed by the approval flow.
#[async_trait]
pub trait UserStore {
    async fn fetch(&self, uid: &str) -> Result<Option<UserData>, Status>;

    /// Patches only the approval fields of the user's stored document.
    async fn set_approval(&self, user: &UserData) -> Result<(), Status>;
}
