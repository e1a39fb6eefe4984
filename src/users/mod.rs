mod approval;
mod firestore;

pub use approval::approve;
pub use firestore::list_by_status;
