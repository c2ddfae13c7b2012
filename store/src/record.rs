//! Raw session-record shape as persisted by the Discord bot.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use verigate_types::Gender;

/// One stored verification-session document, field names as written by the
/// bot. Everything the bot may legitimately omit is optional here; deciding
/// whether an absence is tolerable belongs to the resolver, not the store.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionRecord {
    /// The session UUID, the sole lookup key.
    #[serde(rename = "verifyUuid")]
    pub verify_uuid: String,

    /// Discord user id. Stored as `userId`.
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(rename = "walletAddress", default)]
    pub wallet_address: Option<String>,

    #[serde(rename = "guildId", default)]
    pub guild_id: Option<String>,

    #[serde(default)]
    pub verified: bool,

    #[serde(rename = "onChainVerified", default)]
    pub on_chain_verified: bool,

    #[serde(rename = "selectedCountry", default)]
    pub selected_country: Option<String>,

    #[serde(default)]
    pub gender: Option<Gender>,

    #[serde(rename = "isAdult", default)]
    pub is_adult: Option<bool>,

    #[serde(rename = "ensName", default)]
    pub ens_name: Option<String>,

    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime>,

    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime>,

    #[serde(rename = "verifiedAt", default)]
    pub verified_at: Option<DateTime>,
}

impl SessionRecord {
    /// A minimal pending record, used by tests and fixtures.
    pub fn pending(
        verify_uuid: impl Into<String>,
        user_id: impl Into<String>,
        username: impl Into<String>,
        wallet_address: impl Into<String>,
        guild_id: impl Into<String>,
    ) -> Self {
        Self {
            verify_uuid: verify_uuid.into(),
            user_id: Some(user_id.into()),
            username: Some(username.into()),
            wallet_address: Some(wallet_address.into()),
            guild_id: Some(guild_id.into()),
            verified: false,
            on_chain_verified: false,
            selected_country: None,
            gender: None,
            is_adult: None,
            ens_name: None,
            created_at: None,
            updated_at: None,
            verified_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document};

    #[test]
    fn decodes_minimal_document_with_defaults() {
        let record: SessionRecord = from_document(doc! {
            "verifyUuid": "u1",
            "userId": "d1",
            "walletAddress": "0xabc",
        })
        .unwrap();
        assert_eq!(record.verify_uuid, "u1");
        assert!(!record.verified);
        assert!(!record.on_chain_verified);
        assert_eq!(record.selected_country, None);
        assert_eq!(record.username, None);
    }

    #[test]
    fn decodes_completed_document() {
        let record: SessionRecord = from_document(doc! {
            "verifyUuid": "u2",
            "userId": "d2",
            "username": "nomad",
            "walletAddress": "0xabc",
            "guildId": "g1",
            "verified": true,
            "onChainVerified": false,
            "selectedCountry": "Portugal",
            "gender": "female",
            "isAdult": true,
            "verifiedAt": DateTime::from_millis(1_700_000_000_000),
        })
        .unwrap();
        assert!(record.verified);
        assert_eq!(record.gender, Some(Gender::Female));
        assert_eq!(record.selected_country.as_deref(), Some("Portugal"));
        assert!(record.verified_at.is_some());
    }
}
