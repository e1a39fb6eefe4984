use firestore::FirestoreTimestamp;
use serde::{Deserialize, Serialize};

/// Document type in Firestore `users` collection.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub uid: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub full_name: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub institution: String,

    #[serde(default = "default_role")]
    pub role: String,

    #[serde(default)]
    pub status: UserStatus,

    #[serde(default)]
    pub approved: bool,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_tracking_number: Option<String>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<FirestoreTimestamp>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<FirestoreTimestamp>,
}

fn default_role() -> String {
    "individual".to_owned()
}

impl Default for UserData {
    fn default() -> Self {
        UserData {
            uid: String::default(),
            email: String::default(),
            full_name: String::default(),
            institution: String::default(),
            role: default_role(),
            status: UserStatus::default(),
            approved: false,
            tree_tracking_number: None,
            created_at: None,
            approved_at: None,
        }
    }
}

#[derive(Serialize, Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Pending => write!(f, "pending"),
            UserStatus::Approved => write!(f, "approved"),
            UserStatus::Rejected => write!(f, "rejected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_stored_user_doc() {
        let doc = serde_json::json!({
            "uid": "u-123",
            "email": "agent@example.org",
            "fullName": "Field Agent",
            "role": "individual",
            "status": "pending",
            "treeTrackingNumber": "CT-0042",
        });

        let user: UserData = serde_json::from_value(doc).unwrap();
        assert_eq!(user.uid, "u-123");
        assert_eq!(user.full_name, "Field Agent");
        assert_eq!(user.status, UserStatus::Pending);
        assert_eq!(user.approved, false);
        assert_eq!(user.tree_tracking_number.as_deref(), Some("CT-0042"));
        assert!(user.approved_at.is_none());
    }

    #[test]
    fn parse_minimal_user_doc() {
        let doc = serde_json::json!({ "uid": "u-123" });

        let user: UserData = serde_json::from_value(doc).unwrap();
        assert_eq!(user.role, "individual");
        assert_eq!(user.status, UserStatus::Pending);
        assert!(user.created_at.is_none());
    }

    #[test]
    fn default_matches_minimal_doc() {
        let parsed: UserData = serde_json::from_value(serde_json::json!({ "uid": "" })).unwrap();

        let default = UserData::default();
        assert_eq!(default.role, parsed.role);
        assert_eq!(default.status, parsed.status);
        assert_eq!(default.approved, parsed.approved);
    }

    #[test]
    fn status_uses_wire_names() {
        let user = UserData {
            uid: "u-123".to_owned(),
            status: UserStatus::Approved,
            approved: true,
            ..Default::default()
        };

        let doc = serde_json::to_value(&user).unwrap();
        assert_eq!(doc["status"], "approved");
        assert_eq!(doc["approved"], true);
        assert!(doc.get("institution").is_none());
        assert!(doc.get("approvedAt").is_none());
    }
}
