use carbontally_admin::{api::FirestoreApi, users, Tracing};
use clap::Parser;

/// CarbonTally util for approving a pending user account in Firestore.
#[derive(Parser)]
struct Opts {
    /// JSON file that contains the service account key for the CarbonTally
    /// project.
    #[clap(long, default_value = "serviceAccountKey.json")]
    key_store: String,

    #[clap(long, default_value = "carbontally")]
    project_id: String,

    /// Firestore document id of the user to approve.
    #[clap(default_value = "HkMGOrzMPKcRLHs5CRZXu29SNDl1")]
    user: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    Tracing::setup("utils/approve_user")?;

    let opts: Opts = Opts::parse();
    let firestore = FirestoreApi::connect_with_key_file(&opts.project_id, &opts.key_store).await?;

    match users::approve(&firestore, &opts.user).await {
        Ok(user) => println!("User '{}' approved successfully", user.uid),
        Err(status) => eprintln!("Error approving user: {status}"),
    }

    Ok(())
}
