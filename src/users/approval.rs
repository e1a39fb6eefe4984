use chrono::Utc;
use firestore::FirestoreTimestamp;
use tracing::instrument;

use crate::{
    documents::{UserData, UserStatus},
    traits::UserStore,
    Status,
};

/// Approves a pending user account.
///
/// Reads the user's document, marks it approved and writes back only the
/// approval fields. Approving an already approved account succeeds and
/// leaves it approved. Performs a single write attempt, failures are
/// returned to the caller without retrying.
#[instrument(name = "users::approve", level = "info", skip(store))]
pub async fn approve<S: UserStore>(store: &S, uid: &str) -> Result<UserData, Status> {
    let mut user = match store.fetch(uid).await? {
        Some(user) => user,
        None => {
            return Err(Status::not_found(format!(
                "Firestore document 'users/{uid}' was not found"
            )))
        }
    };

    user.status = UserStatus::Approved;
    user.approved = true;
    if user.approved_at.is_none() {
        user.approved_at = Some(FirestoreTimestamp(Utc::now()));
    }

    store.set_approval(&user).await?;
    Ok(user)
}
