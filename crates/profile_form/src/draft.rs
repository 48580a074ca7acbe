//! The editable working copy of a profile.

use auth::CurrentUser;
use chrono::Utc;
use entities::{Availability, ProfileRecord, ProfileUpdate, Specialty};
use uuid::Uuid;

use crate::{FormError, FormResult};

/// The mutable working copy held while a profile form is open.
///
/// Numeric fields are kept as the text the user typed and coerced at submit
/// time; everything else is typed. Always fully populated: there is no
/// partially-initialized draft.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDraft {
    /// Display name.
    pub name: String,
    /// Years of experience, as entered.
    pub experience: String,
    /// Hourly rate, as entered.
    pub hourly_rate: String,
    /// Specialty tags.
    pub skills: Vec<Specialty>,
    /// Whether the handyman is currently taking work.
    pub is_available: bool,
    /// Weekly availability.
    pub availability: Availability,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            experience: String::new(),
            hourly_rate: String::new(),
            skills: Vec::new(),
            is_available: true,
            availability: Availability::new(),
        }
    }
}

impl ProfileDraft {
    /// Builds a draft from a persisted record.
    ///
    /// This is the one place incoming records are normalized: a missing
    /// `availability` becomes the empty default, and duplicate skills or
    /// days are dropped. Every boundary where an external record enters the
    /// form goes through here.
    pub fn from_record(record: &ProfileRecord) -> Self {
        let mut availability = record.availability.clone().unwrap_or_default();
        availability.dedup_days();

        let mut skills = Vec::with_capacity(record.skills.len());
        for skill in &record.skills {
            if !skills.contains(skill) {
                skills.push(*skill);
            }
        }

        Self {
            name: record.name.clone(),
            experience: record.experience.to_string(),
            hourly_rate: record.hourly_rate.to_string(),
            skills,
            is_available: record.is_available,
            availability,
        }
    }

    /// Names the required fields that are still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.experience.trim().is_empty() {
            missing.push("experience");
        }
        if self.hourly_rate.trim().is_empty() {
            missing.push("hourly rate");
        }
        missing
    }

    /// Fails unless name, experience and hourly rate are all filled in.
    pub fn require_complete(&self) -> FormResult<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingFields(missing))
        }
    }

    fn parsed_experience(&self) -> FormResult<u32> {
        self.experience
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidNumber {
                field: "experience",
                value: self.experience.clone(),
            })
    }

    fn parsed_hourly_rate(&self) -> FormResult<f64> {
        let rate: f64 = self
            .hourly_rate
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidNumber {
                field: "hourly rate",
                value: self.hourly_rate.clone(),
            })?;
        if !rate.is_finite() || rate < 0.0 {
            return Err(FormError::InvalidNumber {
                field: "hourly rate",
                value: self.hourly_rate.clone(),
            });
        }
        Ok(rate)
    }

    /// Shapes the draft into the partial-update payload for an existing
    /// profile, coercing the numeric fields.
    pub fn to_update(&self) -> FormResult<ProfileUpdate> {
        self.require_complete()?;
        Ok(ProfileUpdate {
            name: self.name.clone(),
            experience: self.parsed_experience()?,
            hourly_rate: self.parsed_hourly_rate()?,
            skills: self.skills.clone(),
            is_available: self.is_available,
            availability: self.availability.clone(),
        })
    }

    /// Merges the draft with the signing-up user's identity into a complete
    /// record ready for insertion: rating and review count start at zero,
    /// creation time is now.
    pub fn to_signup_record(&self, user: &CurrentUser) -> FormResult<ProfileRecord> {
        self.require_complete()?;
        Ok(ProfileRecord {
            id: Uuid::new_v4(),
            user_id: user.id.clone(),
            email: user.email.clone(),
            name: self.name.clone(),
            experience: self.parsed_experience()?,
            hourly_rate: self.parsed_hourly_rate()?,
            skills: self.skills.clone(),
            is_available: self.is_available,
            availability: Some(self.availability.clone()),
            rating: 0.0,
            reviews: 0,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use entities::Weekday;

    use super::*;

    fn complete_draft() -> ProfileDraft {
        ProfileDraft {
            name: "Jo".to_string(),
            experience: "3".to_string(),
            hourly_rate: "25".to_string(),
            skills: vec![Specialty::Plumbing],
            ..Default::default()
        }
    }

    #[test]
    fn test_default_draft_is_available() {
        let draft = ProfileDraft::default();
        assert!(draft.is_available);
        assert!(draft.availability.days.is_empty());
        assert!(draft.availability.start_time.is_none());
    }

    #[test]
    fn test_from_record_defaults_missing_availability() {
        let mut record = ProfileRecord::new("u1", "jo@x.com", "Jo");
        record.availability = None;

        let draft = ProfileDraft::from_record(&record);
        assert_eq!(draft.availability, Availability::new());
    }

    #[test]
    fn test_from_record_deduplicates() {
        let mut record = ProfileRecord::new("u1", "jo@x.com", "Jo")
            .with_skills(vec![Specialty::Plumbing, Specialty::Hvac, Specialty::Plumbing]);
        record.availability = Some(Availability {
            days: vec![Weekday::Monday, Weekday::Monday],
            ..Default::default()
        });

        let draft = ProfileDraft::from_record(&record);
        assert_eq!(draft.skills, vec![Specialty::Plumbing, Specialty::Hvac]);
        assert_eq!(draft.availability.days, vec![Weekday::Monday]);
    }

    #[test]
    fn test_each_required_field_is_reported() {
        for field in ["name", "experience", "hourly rate"] {
            let mut draft = complete_draft();
            match field {
                "name" => draft.name.clear(),
                "experience" => draft.experience.clear(),
                _ => draft.hourly_rate.clear(),
            }
            let err = draft.require_complete().unwrap_err();
            match err {
                FormError::MissingFields(missing) => assert_eq!(missing, vec![field]),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_blank_fields_count_as_missing() {
        let mut draft = complete_draft();
        draft.name = "   ".to_string();
        assert!(draft.require_complete().is_err());
    }

    #[test]
    fn test_to_update_coerces_numbers() {
        let update = complete_draft().to_update().unwrap();
        assert_eq!(update.experience, 3);
        assert_eq!(update.hourly_rate, 25.0);
    }

    #[test]
    fn test_to_update_rejects_garbage_numbers() {
        let mut draft = complete_draft();
        draft.experience = "three".to_string();
        assert!(matches!(
            draft.to_update().unwrap_err(),
            FormError::InvalidNumber { field: "experience", .. }
        ));

        let mut draft = complete_draft();
        draft.hourly_rate = "-5".to_string();
        assert!(matches!(
            draft.to_update().unwrap_err(),
            FormError::InvalidNumber { field: "hourly rate", .. }
        ));
    }

    #[test]
    fn test_update_payload_never_carries_immutable_fields() {
        let update = complete_draft().to_update().unwrap();
        let value = serde_json::to_value(&update).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();

        for key in ["id", "userId", "email", "createdAt", "rating", "reviews"] {
            assert!(!keys.contains(&key), "update payload leaked {key}");
        }
        assert_eq!(keys.len(), 6);
    }

    #[test]
    fn test_signup_record_merges_identity_and_defaults() {
        let user = CurrentUser::new("u1", "jo@x.com");
        let record = complete_draft().to_signup_record(&user).unwrap();

        assert_eq!(record.user_id, "u1");
        assert_eq!(record.email, "jo@x.com");
        assert_eq!(record.experience, 3);
        assert_eq!(record.hourly_rate, 25.0);
        assert_eq!(record.rating, 0.0);
        assert_eq!(record.reviews, 0);
        assert_eq!(record.availability, Some(Availability::new()));
    }
}
