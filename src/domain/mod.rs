//! Domain primitives, aggregates, and the ports they are reached through.
//!
//! Everything in this module is transport agnostic: inbound adapters map
//! domain errors onto HTTP responses and outbound adapters map storage rows
//! onto the aggregates defined here.

pub mod error;
pub mod ports;
pub mod profile;
mod profile_service;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::profile::{
    Education, EducationDraft, Experience, ExperienceDraft, Profile, ProfileDraft, ProfileOwner,
    ProfileValidationError, SocialLinks,
};
pub use self::profile_service::ProfileService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId, UserValidationError};
