use async_trait::async_trait;
use firestore::{path_camel_case, paths_camel_case, FirestoreResult};
use futures::{stream::BoxStream, TryStreamExt};
use tracing::instrument;

use crate::{
    api::FirestoreApi,
    documents::{UserData, UserStatus},
    traits::UserStore,
    Status,
};

#[instrument(name = "users::list_by_status", level = "trace", skip(firestore))]
pub async fn list_by_status(
    firestore: &FirestoreApi,
    status: UserStatus,
) -> Result<Vec<UserData>, Status> {
    let users: BoxStream<FirestoreResult<UserData>> = firestore
        .db()
        .fluent()
        .select()
        .from(USERS)
        .filter(|q| {
            q.for_all([q
                .field(path_camel_case!(UserData::status))
                .equal(status.to_string())])
        })
        .obj()
        .stream_query_with_errors()
        .await?;

    Ok(users.try_collect().await?)
}

#[async_trait]
impl UserStore for FirestoreApi {
    async fn fetch(&self, uid: &str) -> Result<Option<UserData>, Status> {
        Ok(self
            .db()
            .fluent()
            .select()
            .by_id_in(USERS)
            .obj()
            .one(uid)
            .await?)
    }

    async fn set_approval(&self, user: &UserData) -> Result<(), Status> {
        self.db()
            .fluent()
            .update()
            .fields(paths_camel_case!(UserData::{status, approved, approved_at}))
            .in_col(USERS)
            .document_id(&user.uid)
            .object(user)
            .execute::<()>()
            .await?;
        Ok(())
    }
}

const USERS: &str = "users";
