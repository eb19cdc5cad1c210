//! Registration payloads and receipts.

use crate::normalize::{format_date_yyyy_mm_dd, normalize_phone};
use serde::{Deserialize, Serialize};

/// A member registration as supplied by the caller.
///
/// Field values are taken as typed by the user; the canonical wire form
/// (normalized phone, ISO date of birth, absent optionals omitted) is built
/// per call via [`RegisterMemberRequest`]. The payload has no identity
/// beyond the call that uses it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemberRegistration {
    /// Full legal name
    pub full_name: String,

    /// Phone number in any loosely formatted shape
    pub phone_number: String,

    /// Desired login username
    pub username: String,

    /// Plaintext password (the portal hashes it server-side)
    pub password: String,

    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Date of birth in any parseable form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    /// Gender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    /// County and sub-county, comma separated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county_sub_county: Option<String>,
}

/// Canonical wire body for `POST /api/auth/register`.
///
/// Built fresh from a [`MemberRegistration`] for each request. Optional
/// fields that are absent (or empty) in the input are omitted from the
/// body entirely, never sent as `null`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegisterMemberRequest {
    pub full_name: String,

    /// Always present; `null` when the raw input had nothing to normalize.
    pub phone_number: Option<String>,

    pub username: String,

    pub password: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub county_sub_county: Option<String>,
}

impl From<&MemberRegistration> for RegisterMemberRequest {
    fn from(registration: &MemberRegistration) -> Self {
        Self {
            full_name: registration.full_name.clone(),
            phone_number: normalize_phone(&registration.phone_number),
            username: registration.username.clone(),
            password: registration.password.clone(),
            email: registration.email.clone().filter(|email| !email.is_empty()),
            date_of_birth: registration
                .date_of_birth
                .as_deref()
                .and_then(format_date_yyyy_mm_dd),
            gender: registration
                .gender
                .clone()
                .filter(|gender| !gender.is_empty()),
            county_sub_county: registration
                .county_sub_county
                .clone()
                .filter(|county| !county.is_empty()),
        }
    }
}

/// A champion self-registration as supplied by the caller.
///
/// The portal accepts many optional fields here (alternative phone,
/// emergency contacts, education, institution consent). Rather than
/// enumerate them all, unknown fields are carried in `extra` and pass
/// through to the wire unchanged; only `phone_number` and `date_of_birth`
/// receive normalization overlays when the request is sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ChampionRegistration {
    /// Full legal name
    pub full_name: String,

    /// Gender
    pub gender: String,

    /// Date of birth in any parseable form
    pub date_of_birth: String,

    /// Phone number in any loosely formatted shape
    pub phone_number: String,

    /// Email address
    pub email: String,

    /// County and sub-county, comma separated
    pub county_sub_county: String,

    /// Whether the champion consented to registration
    pub consent_obtained: bool,

    /// Any further caller-supplied fields, forwarded verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Typed view of the `POST /api/auth/register` response body.
///
/// The client never enforces this shape; callers may deserialize the
/// returned JSON into it when the request succeeded.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct MemberRegistrationReceipt {
    pub message: String,
    pub registration_id: Option<i64>,
    pub status: Option<String>,
}

/// Typed view of the `POST /api/champions/register` response body.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ChampionRegistrationReceipt {
    pub success: bool,
    pub message: Option<String>,
    /// Code in the `UMV-YYYY-NNNNNN` format, needed for all future interactions
    pub champion_code: Option<String>,
    pub champion_id: Option<i64>,
}
