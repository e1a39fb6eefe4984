mod user_data;

pub use user_data::{UserData, UserStatus};
