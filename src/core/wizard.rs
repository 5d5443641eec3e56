use thiserror::Error;
use crate::models::{Profile, ProfileDraft, ProfileType};

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 4;
pub const MIN_AGE: u8 = 17;
pub const MAX_AGE: u8 = 99;

const DEFAULT_IMAGE_URL: &str = "https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=500&h=500&fit=crop";

/// Errors from the profile creation wizard
#[derive(Debug, Error, PartialEq)]
pub enum WizardError {
    #[error("Please fill in all required fields: {0}")]
    MissingFields(String),

    #[error("Age must be between 17 and 99")]
    AgeOutOfRange,

    #[error("Select at least one thing you are looking for")]
    NoProfileType,

    #[error("Preferred age range is invalid")]
    InvalidAgeRange,

    #[error("Profile can only be submitted from the last step")]
    NotOnLastStep,
}

/// Tag lists editable on the interests step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagList {
    Interests,
    Clubs,
    Athletics,
}

/// Four-step profile creation flow
///
/// Steps: basic info, looking for, interests and activities, social media
/// and preferences.
#[derive(Debug, Clone)]
pub struct ProfileWizard {
    step: u8,
    draft: ProfileDraft,
}

impl ProfileWizard {
    pub fn new() -> Self {
        Self::from_draft(ProfileDraft::default())
    }

    pub fn from_draft(draft: ProfileDraft) -> Self {
        Self { step: FIRST_STEP, draft }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ProfileDraft {
        &mut self.draft
    }

    /// Validate the current step and move forward
    pub fn next_step(&mut self) -> Result<u8, WizardError> {
        validate_step(&self.draft, self.step)?;
        if self.step < LAST_STEP {
            self.step += 1;
        }
        Ok(self.step)
    }

    pub fn prev_step(&mut self) -> u8 {
        if self.step > FIRST_STEP {
            self.step -= 1;
        }
        self.step
    }

    pub fn toggle_profile_type(&mut self, profile_type: ProfileType) {
        let types = &mut self.draft.profile_type;
        if let Some(pos) = types.iter().position(|t| *t == profile_type) {
            types.remove(pos);
        } else {
            types.push(profile_type);
        }
    }

    /// Add a trimmed, non-empty tag. Returns false for blanks and duplicates.
    pub fn add_tag(&mut self, list: TagList, value: &str) -> bool {
        let value = value.trim();
        let tags = self.tags_mut(list);
        if value.is_empty() || tags.iter().any(|t| t == value) {
            return false;
        }
        tags.push(value.to_string());
        true
    }

    pub fn remove_tag(&mut self, list: TagList, value: &str) -> bool {
        let tags = self.tags_mut(list);
        let before = tags.len();
        tags.retain(|t| t != value);
        tags.len() != before
    }

    /// Finish the wizard, producing the student's profile
    pub fn submit(&self, id: String) -> Result<Profile, WizardError> {
        if self.step != LAST_STEP {
            return Err(WizardError::NotOnLastStep);
        }
        build_profile(&self.draft, id)
    }

    fn tags_mut(&mut self, list: TagList) -> &mut Vec<String> {
        match list {
            TagList::Interests => &mut self.draft.interests,
            TagList::Clubs => &mut self.draft.clubs,
            TagList::Athletics => &mut self.draft.athletics,
        }
    }
}

impl Default for ProfileWizard {
    fn default() -> Self {
        Self::new()
    }
}

/// Check the fields owned by `step`
pub fn validate_step(draft: &ProfileDraft, step: u8) -> Result<(), WizardError> {
    match step {
        1 => {
            let missing: Vec<&str> = [
                ("name", draft.name.trim().is_empty()),
                ("age", draft.age.is_none()),
                ("gender", draft.gender.trim().is_empty()),
                ("major", draft.major.trim().is_empty()),
                ("classYear", draft.class_year.trim().is_empty()),
            ]
            .into_iter()
            .filter(|(_, is_missing)| *is_missing)
            .map(|(field, _)| field)
            .collect();

            if !missing.is_empty() {
                return Err(WizardError::MissingFields(missing.join(", ")));
            }
            match draft.age {
                Some(age) if (MIN_AGE..=MAX_AGE).contains(&age) => Ok(()),
                _ => Err(WizardError::AgeOutOfRange),
            }
        }
        2 => {
            if draft.profile_type.is_empty() {
                Err(WizardError::NoProfileType)
            } else {
                Ok(())
            }
        }
        4 => {
            if draft.profile_type.contains(&ProfileType::Relationship) {
                let range = draft.preferred_age_range;
                if range.min > range.max || range.min < MIN_AGE || range.max > MAX_AGE {
                    return Err(WizardError::InvalidAgeRange);
                }
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Validate every step of a completed draft and build the profile
pub fn build_profile(draft: &ProfileDraft, id: String) -> Result<Profile, WizardError> {
    for step in FIRST_STEP..=LAST_STEP {
        validate_step(draft, step)?;
    }

    let age = draft.age.ok_or_else(|| WizardError::MissingFields("age".to_string()))?;

    Ok(Profile {
        id,
        name: draft.name.trim().to_string(),
        age,
        gender: draft.gender.clone(),
        major: draft.major.trim().to_string(),
        class_year: draft.class_year.clone(),
        profile_type: draft.profile_type.clone(),
        interests: draft.interests.clone(),
        bio: draft.bio.clone().filter(|b| !b.trim().is_empty()),
        image_url: draft
            .image_url
            .clone()
            .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
        similarity: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AgeRange;

    fn basic_draft() -> ProfileDraft {
        ProfileDraft {
            name: "Riley".to_string(),
            age: Some(20),
            gender: "female".to_string(),
            major: "History".to_string(),
            class_year: "sophomore".to_string(),
            ..ProfileDraft::default()
        }
    }

    #[test]
    fn test_step_one_reports_missing_fields() {
        let mut wizard = ProfileWizard::new();
        wizard.draft_mut().name = "Riley".to_string();

        let err = wizard.next_step().unwrap_err();
        assert_eq!(err, WizardError::MissingFields("age, gender, major, classYear".to_string()));
        assert_eq!(wizard.step(), 1);
    }

    #[test]
    fn test_age_bounds() {
        let mut draft = basic_draft();
        draft.age = Some(16);
        assert_eq!(validate_step(&draft, 1), Err(WizardError::AgeOutOfRange));
        draft.age = Some(17);
        assert_eq!(validate_step(&draft, 1), Ok(()));
    }

    #[test]
    fn test_looking_for_required_on_step_two() {
        let mut wizard = ProfileWizard::from_draft(basic_draft());
        assert_eq!(wizard.next_step(), Ok(2));
        assert_eq!(wizard.next_step(), Err(WizardError::NoProfileType));

        wizard.toggle_profile_type(ProfileType::Study);
        assert_eq!(wizard.next_step(), Ok(3));
    }

    #[test]
    fn test_toggle_profile_type() {
        let mut wizard = ProfileWizard::new();
        wizard.toggle_profile_type(ProfileType::Roommate);
        wizard.toggle_profile_type(ProfileType::Friendship);
        wizard.toggle_profile_type(ProfileType::Roommate);
        assert_eq!(wizard.draft().profile_type, vec![ProfileType::Friendship]);
    }

    #[test]
    fn test_tags_trimmed_and_deduplicated() {
        let mut wizard = ProfileWizard::new();
        assert!(wizard.add_tag(TagList::Interests, "  Chess "));
        assert!(!wizard.add_tag(TagList::Interests, "Chess"));
        assert!(!wizard.add_tag(TagList::Interests, "   "));
        assert!(wizard.add_tag(TagList::Clubs, "Chess"));

        assert_eq!(wizard.draft().interests, vec!["Chess".to_string()]);
        assert!(wizard.remove_tag(TagList::Clubs, "Chess"));
        assert!(!wizard.remove_tag(TagList::Clubs, "Chess"));
    }

    #[test]
    fn test_steps_are_clamped() {
        let mut wizard = ProfileWizard::new();
        assert_eq!(wizard.prev_step(), 1);

        let mut draft = basic_draft();
        draft.profile_type = vec![ProfileType::Friendship];
        let mut wizard = ProfileWizard::from_draft(draft);
        for _ in 0..6 {
            wizard.next_step().unwrap();
        }
        assert_eq!(wizard.step(), LAST_STEP);
    }

    #[test]
    fn test_relationship_age_range_checked() {
        let mut draft = basic_draft();
        draft.profile_type = vec![ProfileType::Relationship];
        draft.preferred_age_range = AgeRange { min: 30, max: 20 };
        assert_eq!(
            build_profile(&draft, "me".to_string()),
            Err(WizardError::InvalidAgeRange)
        );

        // Ignored when not looking for a relationship
        draft.profile_type = vec![ProfileType::Study];
        assert!(build_profile(&draft, "me".to_string()).is_ok());
    }

    #[test]
    fn test_submit_only_from_last_step() {
        let mut draft = basic_draft();
        draft.profile_type = vec![ProfileType::Friendship];
        draft.interests = vec!["Hiking".to_string()];
        let mut wizard = ProfileWizard::from_draft(draft);

        assert_eq!(wizard.submit("me".to_string()), Err(WizardError::NotOnLastStep));
        wizard.next_step().unwrap();
        wizard.next_step().unwrap();
        wizard.next_step().unwrap();

        let profile = wizard.submit("me".to_string()).unwrap();
        assert_eq!(profile.name, "Riley");
        assert_eq!(profile.interests, vec!["Hiking".to_string()]);
        assert_eq!(profile.image_url, DEFAULT_IMAGE_URL);
    }
}
