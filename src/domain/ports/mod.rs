//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod profile_command;
mod profile_query;
mod profile_repository;
mod user_repository;

#[cfg(test)]
pub use profile_command::MockProfileCommand;
pub use profile_command::{
    AddEducationRequest, AddExperienceRequest, DeleteAccountRequest, FixtureProfileCommand,
    ProfileCommand, RemoveEducationRequest, RemoveExperienceRequest, SubmitProfileRequest,
};
#[cfg(test)]
pub use profile_query::MockProfileQuery;
pub use profile_query::{FixtureProfileQuery, ProfileQuery};
#[cfg(test)]
pub use profile_repository::MockProfileRepository;
pub use profile_repository::{
    FixtureProfileRepository, ProfileRepository, ProfileRepositoryError,
};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserRepository, UserRepositoryError};
