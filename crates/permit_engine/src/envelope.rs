//! Envelope validation for feed responses.
//!
//! The feed wraps each page as
//! `{ "<serviceId>": { "RESULT": {"CODE","MSG"}, "row": [...] } }`.

use permit_core::PermitRecord;
use serde::Deserialize;

use crate::types::FeedError;

/// Result code the feed reports for a successful page.
const RESULT_OK: &str = "INFO-000";

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "RESULT")]
    result: Option<EnvelopeResult>,
    #[serde(rename = "row", default)]
    rows: Vec<FeedRow>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeResult {
    #[serde(rename = "CODE", default)]
    code: String,
    #[serde(rename = "MSG", default)]
    message: String,
}

/// One raw feed row. Unknown feed fields are dropped at this boundary;
/// missing fields default to the empty string and never reach the core as
/// anything else.
#[derive(Debug, Deserialize)]
struct FeedRow {
    #[serde(rename = "LCNS_NO", default)]
    license_id: String,
    #[serde(rename = "INDUTY_CD_NM", default)]
    category: String,
    #[serde(rename = "BSSH_NM", default)]
    business_name: String,
    #[serde(rename = "PRSDNT_NM", default)]
    owner_name: String,
    #[serde(rename = "TELNO", default)]
    phone: String,
    #[serde(rename = "PRMS_DT", default)]
    permit_date: String,
    #[serde(rename = "CHNG_DT", default)]
    last_changed_date: String,
    #[serde(rename = "ADDR", default)]
    address: String,
}

impl FeedRow {
    fn into_record(self) -> PermitRecord {
        PermitRecord {
            license_id: self.license_id,
            category: self.category,
            business_name: self.business_name,
            owner_name: self.owner_name,
            phone: self.phone,
            permit_date: self.permit_date,
            last_changed_date: self.last_changed_date,
            address: self.address,
        }
    }
}

/// Parse a 200-response body into records.
///
/// Fails with [`FeedError::Format`] when the body is not JSON or the
/// envelope key is absent, and with [`FeedError::Api`] when the embedded
/// result code is not `INFO-000`. An absent `row` collection is a success
/// with zero records, not an error.
pub fn parse_envelope(body: &str, service_id: &str) -> Result<Vec<PermitRecord>, FeedError> {
    let missing = || FeedError::Format {
        key: service_id.to_string(),
    };

    let value: serde_json::Value = serde_json::from_str(body).map_err(|_| missing())?;
    let envelope_value = value.get(service_id).ok_or_else(missing)?;
    let envelope = Envelope::deserialize(envelope_value).map_err(|_| missing())?;

    if let Some(result) = &envelope.result {
        if result.code != RESULT_OK {
            return Err(FeedError::Api {
                code: result.code.clone(),
                message: result.message.clone(),
            });
        }
    }

    Ok(envelope.rows.into_iter().map(FeedRow::into_record).collect())
}
