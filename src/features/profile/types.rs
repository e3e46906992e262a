//! Profile draft assembled by the setup wizard and posted on completion.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    pub username: String,
    pub wallet_address: String,
    pub profession: String,
    pub bio: String,
    pub social_twitter: String,
    pub social_discord: String,
    pub social_website: String,
}

#[cfg(test)]
mod tests {
    use super::ProfileDraft;

    #[test]
    fn draft_serializes_with_camel_case_keys() {
        let draft = ProfileDraft {
            name: "Emily Nguyen".to_string(),
            wallet_address: "0x7c3e".to_string(),
            social_twitter: "@emily".to_string(),
            ..ProfileDraft::default()
        };

        let json = serde_json::to_string(&draft).expect("Failed to serialize");
        assert!(json.contains(r#""walletAddress":"0x7c3e""#));
        assert!(json.contains(r#""socialTwitter":"@emily""#));
    }
}
