//! Data models for the Unda portal registration API.
//!
//! This module contains the payload structures callers hand to the client
//! and typed conveniences for the JSON receipts the portal returns.

pub mod login;
pub mod registration;

pub use login::LoginCredentials;
pub use registration::{
    ChampionRegistration, ChampionRegistrationReceipt, MemberRegistration,
    MemberRegistrationReceipt, RegisterMemberRequest,
};
