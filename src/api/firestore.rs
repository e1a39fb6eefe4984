use std::path::PathBuf;

use firestore::{FirestoreDb, FirestoreDbOptions};

use crate::Status;

pub struct FirestoreApi {
    db: FirestoreDb,
}

impl FirestoreApi {
    /// Connects using application default credentials.
    pub async fn connect(project_id: &str) -> Result<Self, Status> {
        Ok(FirestoreApi {
            db: FirestoreDb::new(project_id).await?,
        })
    }

    /// Connects using a local service account key file.
    pub async fn connect_with_key_file(
        project_id: &str,
        key_file: impl Into<PathBuf>,
    ) -> Result<Self, Status> {
        let key_file = key_file.into();
        if !key_file.is_file() {
            return Err(Status::invalid_argument(format!(
                "Service account key file '{}' was not found",
                key_file.display()
            )));
        }

        Ok(FirestoreApi {
            db: FirestoreDb::with_options_service_account_key_file(
                FirestoreDbOptions::new(project_id.to_owned()),
                key_file,
            )
            .await?,
        })
    }

    pub fn db(&self) -> &FirestoreDb {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_with_missing_key_file() {
        let status = FirestoreApi::connect_with_key_file("carbontally", "no-such-key.json").await;

        match status {
            Err(Status::InvalidArgument(msg)) => assert!(msg.contains("no-such-key.json")),
            _ => panic!("expected an invalid argument error before any remote call"),
        }
    }
}
