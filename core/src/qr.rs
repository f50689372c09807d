/// QR code boundary
///
/// The display collaborator receives a JSON payload describing the current
/// user; the scan collaborator hands back either a decoded text payload or an
/// error string. Malformed payloads must never crash the core — they degrade
/// to a generic outcome the session turns into a notification.
use crate::error::Result;
use crate::types::UserProfile;
use serde::{Deserialize, Serialize};

/// Payload encoded into the user's scannable code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrPayload {
    pub id: String,
    pub name: String,
    pub company: String,
    pub title: String,
}

/// Serialize the current user's card for the QR display collaborator.
pub fn encode_profile(profile: &UserProfile) -> Result<String> {
    let payload = QrPayload {
        id: profile.id.clone(),
        name: profile.name.clone(),
        company: profile.company.clone(),
        title: profile.title.clone(),
    };
    Ok(serde_json::to_string(&payload)?)
}

/// Result of decoding a scanned payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Payload carried a usable id/name pair
    Connected { id: String, name: String },
    /// Valid JSON but the id/name fields were missing or empty
    Anonymous,
    /// Not a payload we understand
    Invalid,
}

#[derive(Debug, Deserialize)]
struct ScannedProfile {
    id: Option<String>,
    name: Option<String>,
}

/// Tolerantly parse a scanned payload. All failure modes map to an outcome,
/// never an error.
pub fn decode_scan(payload: &str) -> ScanOutcome {
    let parsed: ScannedProfile = match serde_json::from_str(payload) {
        Ok(p) => p,
        Err(_) => return ScanOutcome::Invalid,
    };
    match (parsed.id, parsed.name) {
        (Some(id), Some(name)) if !id.is_empty() && !name.is_empty() => {
            ScanOutcome::Connected { id, name }
        }
        _ => ScanOutcome::Anonymous,
    }
}
