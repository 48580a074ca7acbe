//! Handyman profile entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Availability, Specialty};

/// A persisted handyman profile document.
///
/// `user_id`, `email` and `created_at` are set once at creation and never
/// edited afterwards; `rating` and `reviews` start at zero and are owned by
/// the review pipeline, not by profile editing.
///
/// `availability` is optional on the wire: documents created before the
/// availability feature lack the field entirely. Every read path
/// default-fills it before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    /// Unique identifier.
    pub id: Uuid,
    /// Identity of the owning user.
    pub user_id: String,
    /// Email address of the owning user.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Years of experience.
    pub experience: u32,
    /// Hourly rate in dollars.
    pub hourly_rate: f64,
    /// Specialty tags, no duplicates.
    pub skills: Vec<Specialty>,
    /// Whether the handyman is currently taking work.
    pub is_available: bool,
    /// Weekly availability; absent on legacy documents.
    #[serde(default)]
    pub availability: Option<Availability>,
    /// Average rating, owned by the review pipeline.
    pub rating: f64,
    /// Review count, owned by the review pipeline.
    pub reviews: u32,
    /// When this profile was created.
    pub created_at: DateTime<Utc>,
}

impl ProfileRecord {
    /// Creates a new profile for a user, with rating and review count at
    /// zero and an empty availability.
    pub fn new(user_id: impl Into<String>, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            email: email.into(),
            name: name.into(),
            experience: 0,
            hourly_rate: 0.0,
            skills: Vec::new(),
            is_available: true,
            availability: Some(Availability::new()),
            rating: 0.0,
            reviews: 0,
            created_at: Utc::now(),
        }
    }

    /// Sets the years of experience.
    pub fn with_experience(mut self, experience: u32) -> Self {
        self.experience = experience;
        self
    }

    /// Sets the hourly rate.
    pub fn with_hourly_rate(mut self, hourly_rate: f64) -> Self {
        self.hourly_rate = hourly_rate;
        self
    }

    /// Sets the specialty tags.
    pub fn with_skills(mut self, skills: Vec<Specialty>) -> Self {
        self.skills = skills;
        self
    }

    /// Sets the weekly availability.
    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = Some(availability);
        self
    }
}

/// A partial update touching exactly the editable profile fields.
///
/// `id`, `user_id`, `email`, `created_at`, `rating` and `reviews` have no
/// place here; the type is the guarantee that an edit can never reach them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// Display name.
    pub name: String,
    /// Years of experience.
    pub experience: u32,
    /// Hourly rate in dollars.
    pub hourly_rate: f64,
    /// Specialty tags.
    pub skills: Vec<Specialty>,
    /// Whether the handyman is currently taking work.
    pub is_available: bool,
    /// Weekly availability, always concrete in an update.
    pub availability: Availability,
}

impl ProfileUpdate {
    /// Applies this update to a persisted record, leaving the immutable
    /// fields untouched.
    pub fn apply_to(&self, record: &mut ProfileRecord) {
        record.name = self.name.clone();
        record.experience = self.experience;
        record.hourly_rate = self.hourly_rate;
        record.skills = self.skills.clone();
        record.is_available = self.is_available;
        record.availability = Some(self.availability.clone());
    }
}
