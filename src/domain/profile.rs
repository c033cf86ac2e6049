//! Developer profile aggregate: professional status and skills plus optional
//! career history.
//!
//! A user owns at most one profile. Experience and education entries are
//! identified sub-records kept newest-first; removal is keyed by entry id so
//! concurrent views cannot delete the wrong entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::UserId;

/// Validation failures raised by profile constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProfileValidationError {
    /// The professional status was empty.
    #[error("profile status must not be empty")]
    EmptyStatus,
    /// The skill list was empty.
    #[error("profile skills must contain at least one entry")]
    EmptySkills,
    /// An experience entry carried an empty title.
    #[error("experience title must not be empty")]
    EmptyExperienceTitle,
    /// An experience entry carried an empty company.
    #[error("experience company must not be empty")]
    EmptyExperienceCompany,
    /// An education entry carried an empty school.
    #[error("education school must not be empty")]
    EmptySchool,
    /// An education entry carried an empty degree.
    #[error("education degree must not be empty")]
    EmptyDegree,
    /// An education entry carried an empty field of study.
    #[error("education field of study must not be empty")]
    EmptyFieldOfStudy,
}

/// Social media links attached to a profile.
///
/// Links are replaced as a unit on every profile submission: omitting a
/// previously stored link removes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// Input payload for a new work history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceDraft {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    pub current: bool,
    pub description: Option<String>,
}

/// A work history entry with a stable identifier for keyed removal.
///
/// Serialisation round-trips through [`ExperienceRecord`] so stored entries
/// are re-validated when decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExperienceRecord", into = "ExperienceRecord")]
pub struct Experience {
    id: Uuid,
    title: String,
    company: String,
    location: Option<String>,
    from: DateTime<Utc>,
    to: Option<DateTime<Utc>>,
    current: bool,
    description: Option<String>,
}

impl Experience {
    /// Validate a draft and mint an identifier for the new entry.
    ///
    /// # Errors
    /// Returns [`ProfileValidationError`] when the title or company is empty.
    pub fn new(draft: ExperienceDraft) -> Result<Self, ProfileValidationError> {
        if draft.title.trim().is_empty() {
            return Err(ProfileValidationError::EmptyExperienceTitle);
        }
        if draft.company.trim().is_empty() {
            return Err(ProfileValidationError::EmptyExperienceCompany);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            title: draft.title,
            company: draft.company,
            location: draft.location,
            from: draft.from,
            to: draft.to,
            current: draft.current,
            description: draft.description,
        })
    }

    /// Stable identifier used for removal.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Job title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Employer name.
    #[must_use]
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Work location, when given.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Start of the position.
    #[must_use]
    pub fn from(&self) -> DateTime<Utc> {
        self.from
    }

    /// End of the position, absent for current roles.
    #[must_use]
    pub fn to(&self) -> Option<DateTime<Utc>> {
        self.to
    }

    /// Whether this is the current position.
    #[must_use]
    pub fn current(&self) -> bool {
        self.current
    }

    /// Free-form description of the role.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Serialised form of [`Experience`] used for storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExperienceRecord {
    id: Uuid,
    title: String,
    company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    from: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    to: Option<DateTime<Utc>>,
    #[serde(default)]
    current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl TryFrom<ExperienceRecord> for Experience {
    type Error = ProfileValidationError;

    fn try_from(record: ExperienceRecord) -> Result<Self, Self::Error> {
        if record.title.trim().is_empty() {
            return Err(ProfileValidationError::EmptyExperienceTitle);
        }
        if record.company.trim().is_empty() {
            return Err(ProfileValidationError::EmptyExperienceCompany);
        }
        Ok(Self {
            id: record.id,
            title: record.title,
            company: record.company,
            location: record.location,
            from: record.from,
            to: record.to,
            current: record.current,
            description: record.description,
        })
    }
}

impl From<Experience> for ExperienceRecord {
    fn from(entry: Experience) -> Self {
        Self {
            id: entry.id,
            title: entry.title,
            company: entry.company,
            location: entry.location,
            from: entry.from,
            to: entry.to,
            current: entry.current,
            description: entry.description,
        }
    }
}

/// Input payload for a new education entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationDraft {
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    pub current: bool,
    pub description: Option<String>,
}

/// An education entry with a stable identifier for keyed removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EducationRecord", into = "EducationRecord")]
pub struct Education {
    id: Uuid,
    school: String,
    degree: String,
    field_of_study: String,
    from: DateTime<Utc>,
    to: Option<DateTime<Utc>>,
    current: bool,
    description: Option<String>,
}

impl Education {
    /// Validate a draft and mint an identifier for the new entry.
    ///
    /// # Errors
    /// Returns [`ProfileValidationError`] when the school, degree, or field
    /// of study is empty.
    pub fn new(draft: EducationDraft) -> Result<Self, ProfileValidationError> {
        validate_education(&draft.school, &draft.degree, &draft.field_of_study)?;
        Ok(Self {
            id: Uuid::new_v4(),
            school: draft.school,
            degree: draft.degree,
            field_of_study: draft.field_of_study,
            from: draft.from,
            to: draft.to,
            current: draft.current,
            description: draft.description,
        })
    }

    /// Stable identifier used for removal.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// School or institution name.
    #[must_use]
    pub fn school(&self) -> &str {
        &self.school
    }

    /// Degree or certificate earned.
    #[must_use]
    pub fn degree(&self) -> &str {
        &self.degree
    }

    /// Field of study.
    #[must_use]
    pub fn field_of_study(&self) -> &str {
        &self.field_of_study
    }

    /// Start of the programme.
    #[must_use]
    pub fn from(&self) -> DateTime<Utc> {
        self.from
    }

    /// End of the programme, absent while ongoing.
    #[must_use]
    pub fn to(&self) -> Option<DateTime<Utc>> {
        self.to
    }

    /// Whether the programme is ongoing.
    #[must_use]
    pub fn current(&self) -> bool {
        self.current
    }

    /// Free-form description of the programme.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

fn validate_education(
    school: &str,
    degree: &str,
    field_of_study: &str,
) -> Result<(), ProfileValidationError> {
    if school.trim().is_empty() {
        return Err(ProfileValidationError::EmptySchool);
    }
    if degree.trim().is_empty() {
        return Err(ProfileValidationError::EmptyDegree);
    }
    if field_of_study.trim().is_empty() {
        return Err(ProfileValidationError::EmptyFieldOfStudy);
    }
    Ok(())
}

/// Serialised form of [`Education`] used for storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EducationRecord {
    id: Uuid,
    school: String,
    degree: String,
    field_of_study: String,
    from: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    to: Option<DateTime<Utc>>,
    #[serde(default)]
    current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl TryFrom<EducationRecord> for Education {
    type Error = ProfileValidationError;

    fn try_from(record: EducationRecord) -> Result<Self, Self::Error> {
        validate_education(&record.school, &record.degree, &record.field_of_study)?;
        Ok(Self {
            id: record.id,
            school: record.school,
            degree: record.degree,
            field_of_study: record.field_of_study,
            from: record.from,
            to: record.to,
            current: record.current,
            description: record.description,
        })
    }
}

impl From<Education> for EducationRecord {
    fn from(entry: Education) -> Self {
        Self {
            id: entry.id,
            school: entry.school,
            degree: entry.degree,
            field_of_study: entry.field_of_study,
            from: entry.from,
            to: entry.to,
            current: entry.current,
            description: entry.description,
        }
    }
}

/// Snapshot of the owning user's public identity attached to a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileOwner {
    /// Identifier of the owning account.
    pub id: UserId,
    /// Display name of the owner.
    pub name: String,
    /// Avatar URL of the owner, when set.
    pub avatar: Option<String>,
}

/// Fields accepted by a profile submission.
///
/// `status` and `skills` are required on every submission. Optional fields
/// left `None` keep their stored values on update, while `social` always
/// replaces the stored links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    pub status: String,
    pub skills: Vec<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub social: SocialLinks,
}

/// Developer profile aggregate rooted at the owning user.
///
/// # Examples
/// ```
/// use devfolio_backend::domain::{Profile, ProfileDraft, ProfileOwner, SocialLinks, UserId};
///
/// let owner = ProfileOwner {
///     id: UserId::random(),
///     name: "Ada Lovelace".to_owned(),
///     avatar: None,
/// };
/// let draft = ProfileDraft {
///     status: "Senior Developer".to_owned(),
///     skills: vec!["Rust".to_owned()],
///     company: None,
///     location: None,
///     website: None,
///     bio: None,
///     github_username: None,
///     social: SocialLinks::default(),
/// };
/// let profile = Profile::new(owner, draft).expect("valid profile");
/// assert_eq!(profile.status(), "Senior Developer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    owner: ProfileOwner,
    status: String,
    skills: Vec<String>,
    company: Option<String>,
    location: Option<String>,
    website: Option<String>,
    bio: Option<String>,
    github_username: Option<String>,
    social: SocialLinks,
    experience: Vec<Experience>,
    education: Vec<Education>,
}

impl Profile {
    /// Create a fresh profile for `owner` from a submission.
    ///
    /// # Errors
    /// Returns [`ProfileValidationError`] when the status is empty or the
    /// skill list is empty.
    pub fn new(owner: ProfileOwner, draft: ProfileDraft) -> Result<Self, ProfileValidationError> {
        Self::validate(&draft)?;
        Ok(Self {
            owner,
            status: draft.status,
            skills: draft.skills,
            company: draft.company,
            location: draft.location,
            website: draft.website,
            bio: draft.bio,
            github_username: draft.github_username,
            social: draft.social,
            experience: Vec::new(),
            education: Vec::new(),
        })
    }

    fn validate(draft: &ProfileDraft) -> Result<(), ProfileValidationError> {
        if draft.status.trim().is_empty() {
            return Err(ProfileValidationError::EmptyStatus);
        }
        if draft.skills.is_empty() {
            return Err(ProfileValidationError::EmptySkills);
        }
        Ok(())
    }

    /// Merge a submission into the stored profile.
    ///
    /// Required fields always overwrite. Optional fields only overwrite when
    /// supplied; omitted values persist. Social links are replaced as a
    /// unit.
    ///
    /// # Errors
    /// Returns [`ProfileValidationError`] when the submission fails
    /// validation; the profile is left unchanged.
    pub fn apply(&mut self, draft: ProfileDraft) -> Result<(), ProfileValidationError> {
        Self::validate(&draft)?;
        self.status = draft.status;
        self.skills = draft.skills;
        if let Some(company) = draft.company {
            self.company = Some(company);
        }
        if let Some(location) = draft.location {
            self.location = Some(location);
        }
        if let Some(website) = draft.website {
            self.website = Some(website);
        }
        if let Some(bio) = draft.bio {
            self.bio = Some(bio);
        }
        if let Some(github_username) = draft.github_username {
            self.github_username = Some(github_username);
        }
        self.social = draft.social;
        Ok(())
    }

    /// Insert a work history entry at the front of the list.
    pub fn prepend_experience(&mut self, entry: Experience) {
        self.experience.insert(0, entry);
    }

    /// Remove the work history entry with `id`, keeping the order of the
    /// remaining entries. Returns `false` when no entry matches.
    pub fn remove_experience(&mut self, id: Uuid) -> bool {
        match self.experience.iter().position(|entry| entry.id() == id) {
            Some(index) => {
                self.experience.remove(index);
                true
            }
            None => false,
        }
    }

    /// Insert an education entry at the front of the list.
    pub fn prepend_education(&mut self, entry: Education) {
        self.education.insert(0, entry);
    }

    /// Remove the education entry with `id`, keeping the order of the
    /// remaining entries. Returns `false` when no entry matches.
    pub fn remove_education(&mut self, id: Uuid) -> bool {
        match self.education.iter().position(|entry| entry.id() == id) {
            Some(index) => {
                self.education.remove(index);
                true
            }
            None => false,
        }
    }

    /// Reattach stored work history when materialising from storage.
    #[must_use]
    pub fn with_experience(mut self, experience: Vec<Experience>) -> Self {
        self.experience = experience;
        self
    }

    /// Reattach stored education history when materialising from storage.
    #[must_use]
    pub fn with_education(mut self, education: Vec<Education>) -> Self {
        self.education = education;
        self
    }

    /// Identity of the owning user.
    #[must_use]
    pub fn owner(&self) -> &ProfileOwner {
        &self.owner
    }

    /// Professional status, e.g. "Senior Developer".
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Skills listed on the profile.
    #[must_use]
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Current employer, when given.
    #[must_use]
    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    /// Location, when given.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Personal website, when given.
    #[must_use]
    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    /// Short biography, when given.
    #[must_use]
    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    /// GitHub username, when given.
    #[must_use]
    pub fn github_username(&self) -> Option<&str> {
        self.github_username.as_deref()
    }

    /// Social media links.
    #[must_use]
    pub fn social(&self) -> &SocialLinks {
        &self.social
    }

    /// Work history, newest first.
    #[must_use]
    pub fn experience(&self) -> &[Experience] {
        &self.experience
    }

    /// Education history, newest first.
    #[must_use]
    pub fn education(&self) -> &[Education] {
        &self.education
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn owner() -> ProfileOwner {
        ProfileOwner {
            id: UserId::random(),
            name: "Ada Lovelace".to_owned(),
            avatar: Some("https://example.com/ada.png".to_owned()),
        }
    }

    #[fixture]
    fn draft() -> ProfileDraft {
        ProfileDraft {
            status: "Senior Developer".to_owned(),
            skills: vec!["Rust".to_owned(), "SQL".to_owned()],
            company: Some("Initech".to_owned()),
            location: None,
            website: Some("https://ada.example.com".to_owned()),
            bio: None,
            github_username: Some("ada".to_owned()),
            social: SocialLinks {
                youtube: Some("https://youtube.com/@ada".to_owned()),
                ..SocialLinks::default()
            },
        }
    }

    fn sample_from() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2019, 4, 1, 0, 0, 0).single().expect("valid date")
    }

    fn experience_draft(title: &str) -> ExperienceDraft {
        ExperienceDraft {
            title: title.to_owned(),
            company: "Initech".to_owned(),
            location: None,
            from: sample_from(),
            to: None,
            current: true,
            description: None,
        }
    }

    fn education_draft(school: &str) -> EducationDraft {
        EducationDraft {
            school: school.to_owned(),
            degree: "BSc".to_owned(),
            field_of_study: "Mathematics".to_owned(),
            from: sample_from(),
            to: None,
            current: false,
            description: None,
        }
    }

    #[rstest]
    fn new_builds_profile_without_history(owner: ProfileOwner, draft: ProfileDraft) {
        let profile = Profile::new(owner, draft).expect("valid profile");
        assert_eq!(profile.status(), "Senior Developer");
        assert_eq!(profile.skills(), ["Rust", "SQL"]);
        assert_eq!(profile.company(), Some("Initech"));
        assert!(profile.experience().is_empty());
        assert!(profile.education().is_empty());
    }

    #[rstest]
    fn new_rejects_blank_status(owner: ProfileOwner, mut draft: ProfileDraft) {
        draft.status = "  ".to_owned();
        assert_eq!(
            Profile::new(owner, draft),
            Err(ProfileValidationError::EmptyStatus)
        );
    }

    #[rstest]
    fn new_rejects_empty_skills(owner: ProfileOwner, mut draft: ProfileDraft) {
        draft.skills.clear();
        assert_eq!(
            Profile::new(owner, draft),
            Err(ProfileValidationError::EmptySkills)
        );
    }

    #[rstest]
    fn apply_keeps_omitted_optional_fields(owner: ProfileOwner, draft: ProfileDraft) {
        let mut profile = Profile::new(owner, draft).expect("valid profile");
        let update = ProfileDraft {
            status: "Tech Lead".to_owned(),
            skills: vec!["Rust".to_owned()],
            company: None,
            location: None,
            website: None,
            bio: None,
            github_username: None,
            social: SocialLinks::default(),
        };
        profile.apply(update).expect("valid update");
        assert_eq!(profile.status(), "Tech Lead");
        assert_eq!(profile.skills(), ["Rust"]);
        assert_eq!(profile.company(), Some("Initech"));
        assert_eq!(profile.website(), Some("https://ada.example.com"));
        assert_eq!(profile.github_username(), Some("ada"));
    }

    #[rstest]
    fn apply_replaces_social_links_as_unit(owner: ProfileOwner, draft: ProfileDraft) {
        let mut profile = Profile::new(owner, draft.clone()).expect("valid profile");
        assert!(profile.social().youtube.is_some());
        let update = ProfileDraft {
            social: SocialLinks {
                linkedin: Some("https://linkedin.com/in/ada".to_owned()),
                ..SocialLinks::default()
            },
            ..draft
        };
        profile.apply(update).expect("valid update");
        assert!(profile.social().youtube.is_none());
        assert_eq!(
            profile.social().linkedin.as_deref(),
            Some("https://linkedin.com/in/ada")
        );
    }

    #[rstest]
    fn apply_rejects_invalid_submission_and_keeps_state(
        owner: ProfileOwner,
        draft: ProfileDraft,
    ) {
        let mut profile = Profile::new(owner, draft.clone()).expect("valid profile");
        let update = ProfileDraft {
            status: String::new(),
            ..draft
        };
        assert!(profile.apply(update).is_err());
        assert_eq!(profile.status(), "Senior Developer");
    }

    #[rstest]
    fn prepend_experience_inserts_at_front(owner: ProfileOwner, draft: ProfileDraft) {
        let mut profile = Profile::new(owner, draft).expect("valid profile");
        let first = Experience::new(experience_draft("Engineer")).expect("valid entry");
        let second = Experience::new(experience_draft("Staff Engineer")).expect("valid entry");
        profile.prepend_experience(first);
        profile.prepend_experience(second);
        let titles: Vec<_> = profile.experience().iter().map(Experience::title).collect();
        assert_eq!(titles, ["Staff Engineer", "Engineer"]);
    }

    #[rstest]
    fn remove_experience_keeps_order_of_remaining_entries(
        owner: ProfileOwner,
        draft: ProfileDraft,
    ) {
        let mut profile = Profile::new(owner, draft).expect("valid profile");
        for title in ["Oldest", "Middle", "Newest"] {
            let entry = Experience::new(experience_draft(title)).expect("valid entry");
            profile.prepend_experience(entry);
        }
        let middle_id = profile.experience()[1].id();
        assert!(profile.remove_experience(middle_id));
        let titles: Vec<_> = profile.experience().iter().map(Experience::title).collect();
        assert_eq!(titles, ["Newest", "Oldest"]);
    }

    #[rstest]
    fn remove_experience_returns_false_for_unknown_id(owner: ProfileOwner, draft: ProfileDraft) {
        let mut profile = Profile::new(owner, draft).expect("valid profile");
        let entry = Experience::new(experience_draft("Engineer")).expect("valid entry");
        profile.prepend_experience(entry);
        assert!(!profile.remove_experience(Uuid::new_v4()));
        assert_eq!(profile.experience().len(), 1);
    }

    #[rstest]
    fn education_entries_mirror_experience_behaviour(owner: ProfileOwner, draft: ProfileDraft) {
        let mut profile = Profile::new(owner, draft).expect("valid profile");
        let first = Education::new(education_draft("Cambridge")).expect("valid entry");
        let second = Education::new(education_draft("Oxford")).expect("valid entry");
        profile.prepend_education(first);
        profile.prepend_education(second);
        assert_eq!(profile.education()[0].school(), "Oxford");
        let removed = profile.remove_education(profile.education()[0].id());
        assert!(removed);
        assert_eq!(profile.education()[0].school(), "Cambridge");
    }

    #[test]
    fn experience_new_assigns_distinct_ids() {
        let first = Experience::new(experience_draft("Engineer")).expect("valid entry");
        let second = Experience::new(experience_draft("Engineer")).expect("valid entry");
        assert_ne!(first.id(), second.id());
    }

    #[rstest]
    #[case("", "Initech", ProfileValidationError::EmptyExperienceTitle)]
    #[case("Engineer", " ", ProfileValidationError::EmptyExperienceCompany)]
    fn experience_new_rejects_blank_fields(
        #[case] title: &str,
        #[case] company: &str,
        #[case] expected: ProfileValidationError,
    ) {
        let mut draft = experience_draft(title);
        draft.company = company.to_owned();
        assert_eq!(Experience::new(draft), Err(expected));
    }

    #[rstest]
    #[case("", "BSc", "Maths", ProfileValidationError::EmptySchool)]
    #[case("Cambridge", "", "Maths", ProfileValidationError::EmptyDegree)]
    #[case("Cambridge", "BSc", " ", ProfileValidationError::EmptyFieldOfStudy)]
    fn education_new_rejects_blank_fields(
        #[case] school: &str,
        #[case] degree: &str,
        #[case] field_of_study: &str,
        #[case] expected: ProfileValidationError,
    ) {
        let mut draft = education_draft(school);
        draft.degree = degree.to_owned();
        draft.field_of_study = field_of_study.to_owned();
        assert_eq!(Education::new(draft), Err(expected));
    }

    #[test]
    fn experience_decoding_validates_stored_entries() {
        let entry = Experience::new(experience_draft("Engineer")).expect("valid entry");
        let mut value = serde_json::to_value(&entry).expect("serialise entry");
        let decoded: Experience = serde_json::from_value(value.clone()).expect("decode entry");
        assert_eq!(decoded, entry);
        value["title"] = serde_json::Value::String(String::new());
        assert!(serde_json::from_value::<Experience>(value).is_err());
    }

    #[test]
    fn social_links_tolerate_missing_fields_when_decoding() {
        let links: SocialLinks =
            serde_json::from_value(serde_json::json!({"twitter": "https://x.com/ada"}))
                .expect("decode links");
        assert_eq!(links.twitter.as_deref(), Some("https://x.com/ada"));
        assert!(links.youtube.is_none());
    }
}
