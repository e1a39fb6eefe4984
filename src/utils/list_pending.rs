use carbontally_admin::{api::FirestoreApi, documents::UserStatus, users, Tracing};
use clap::Parser;

/// CarbonTally util for listing user accounts that await admin approval.
#[derive(Parser)]
struct Opts {
    /// JSON file that contains the service account key for the CarbonTally
    /// project.
    #[clap(long, default_value = "serviceAccountKey.json")]
    key_store: String,

    #[clap(long, default_value = "carbontally")]
    project_id: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    Tracing::setup("utils/list_pending")?;

    let opts: Opts = Opts::parse();
    let firestore = FirestoreApi::connect_with_key_file(&opts.project_id, &opts.key_store).await?;

    let pending = users::list_by_status(&firestore, UserStatus::Pending).await?;
    for user in &pending {
        println!("{} ({})", user.email, user.uid);
    }
    println!("Found {} pending users", pending.len());

    Ok(())
}
