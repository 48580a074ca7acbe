//! Draft ownership and the editing state machine.

use chrono::NaiveTime;
use entities::{ProfileRecord, Specialty, Weekday};
use uuid::Uuid;

use crate::{FormMode, ProfileDraft};

/// A single scalar field replacement on the draft.
#[derive(Debug, Clone)]
pub enum DraftField {
    /// Display name.
    Name(String),
    /// Years of experience, as entered.
    Experience(String),
    /// Hourly rate, as entered.
    HourlyRate(String),
    /// Specialty tags, replaced wholesale.
    Skills(Vec<Specialty>),
    /// Whether the handyman is currently taking work.
    IsAvailable(bool),
}

/// Which end of the daily availability window to set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBound {
    /// The start time.
    Start,
    /// The end time.
    End,
}

/// The in-memory form state: the current draft and the editing flag.
///
/// Pure data and transitions; all I/O lives in the controller. Mutations
/// perform no validation; validation happens at submit.
#[derive(Debug, Default)]
pub struct ProfileState {
    draft: Option<ProfileDraft>,
    record_id: Option<Uuid>,
    is_editing: bool,
}

impl ProfileState {
    /// Initializes state for a mode, seeding the draft from a record when
    /// one is supplied.
    ///
    /// Without a seed, edit and signup get the well-typed empty draft; view
    /// leaves the draft unset until a load succeeds.
    pub fn initialize(mode: FormMode, seed: Option<&ProfileRecord>) -> Self {
        let mut state = Self {
            draft: None,
            record_id: None,
            is_editing: mode.starts_editing(),
        };
        match seed {
            Some(record) => state.seed_from_record(record),
            None if mode != FormMode::View => state.draft = Some(ProfileDraft::default()),
            None => {}
        }
        state
    }

    /// Seeds the draft from a persisted record, normalizing it on the way
    /// in, and remembers the record id for later updates.
    pub fn seed_from_record(&mut self, record: &ProfileRecord) {
        self.draft = Some(ProfileDraft::from_record(record));
        self.record_id = Some(record.id);
    }

    /// Replaces one scalar field of the draft. Ignored while no draft is
    /// open.
    pub fn set_field(&mut self, field: DraftField) {
        let Some(draft) = &mut self.draft else { return };
        match field {
            DraftField::Name(name) => draft.name = name,
            DraftField::Experience(experience) => draft.experience = experience,
            DraftField::HourlyRate(rate) => draft.hourly_rate = rate,
            DraftField::Skills(skills) => draft.skills = skills,
            DraftField::IsAvailable(available) => draft.is_available = available,
        }
    }

    /// Toggles a weekday in or out of the availability set.
    pub fn toggle_day(&mut self, day: Weekday) {
        if let Some(draft) = &mut self.draft {
            draft.availability.toggle_day(day);
        }
    }

    /// Sets one end of the daily availability window.
    pub fn set_time(&mut self, bound: TimeBound, value: Option<NaiveTime>) {
        if let Some(draft) = &mut self.draft {
            match bound {
                TimeBound::Start => draft.availability.start_time = value,
                TimeBound::End => draft.availability.end_time = value,
            }
        }
    }

    /// Transitions from read-only into editing. Returns whether the
    /// transition happened; already-editing state is left alone.
    pub fn begin_editing(&mut self) -> bool {
        if self.is_editing {
            false
        } else {
            self.is_editing = true;
            true
        }
    }

    /// Leaves editing, back to the read-only state.
    pub fn end_editing(&mut self) {
        self.is_editing = false;
    }

    /// The current draft, if a form is open.
    pub fn draft(&self) -> Option<&ProfileDraft> {
        self.draft.as_ref()
    }

    /// The persisted record id backing the draft, if any.
    pub fn record_id(&self) -> Option<Uuid> {
        self.record_id
    }

    /// Whether the form is in the editing state.
    pub fn is_editing(&self) -> bool {
        self.is_editing
    }
}

#[cfg(test)]
mod tests {
    use entities::Availability;

    use super::*;

    #[test]
    fn test_initialize_view_without_seed_has_no_draft() {
        let state = ProfileState::initialize(FormMode::View, None);
        assert!(state.draft().is_none());
        assert!(!state.is_editing());
    }

    #[test]
    fn test_initialize_signup_gets_default_draft() {
        let state = ProfileState::initialize(FormMode::Signup, None);
        let draft = state.draft().unwrap();
        assert!(draft.name.is_empty());
        assert!(draft.is_available);
        assert!(state.is_editing());
    }

    #[test]
    fn test_initialize_with_legacy_seed_defaults_availability() {
        let mut record = ProfileRecord::new("u1", "jo@x.com", "Jo");
        record.availability = None;

        let state = ProfileState::initialize(FormMode::Edit, Some(&record));
        let draft = state.draft().unwrap();
        assert_eq!(draft.availability, Availability::new());
        assert_eq!(state.record_id(), Some(record.id));
    }

    #[test]
    fn test_set_field_replaces_one_scalar() {
        let mut state = ProfileState::initialize(FormMode::Edit, None);
        state.set_field(DraftField::Name("Jo".to_string()));
        state.set_field(DraftField::HourlyRate("25".to_string()));

        let draft = state.draft().unwrap();
        assert_eq!(draft.name, "Jo");
        assert_eq!(draft.hourly_rate, "25");
        assert!(draft.experience.is_empty());
    }

    #[test]
    fn test_set_field_without_draft_is_ignored() {
        let mut state = ProfileState::initialize(FormMode::View, None);
        state.set_field(DraftField::Name("Jo".to_string()));
        assert!(state.draft().is_none());
    }

    #[test]
    fn test_toggle_day_twice_is_idempotent() {
        let mut state = ProfileState::initialize(FormMode::Edit, None);
        state.toggle_day(Weekday::Monday);
        let before = state.draft().unwrap().availability.days.clone();

        state.toggle_day(Weekday::Saturday);
        state.toggle_day(Weekday::Saturday);

        assert_eq!(state.draft().unwrap().availability.days, before);
    }

    #[test]
    fn test_set_time_sets_each_bound_independently() {
        let mut state = ProfileState::initialize(FormMode::Edit, None);
        let nine = NaiveTime::from_hms_opt(9, 0, 0);
        state.set_time(TimeBound::Start, nine);

        let draft = state.draft().unwrap();
        assert_eq!(draft.availability.start_time, nine);
        assert!(draft.availability.end_time.is_none());

        state.set_time(TimeBound::Start, None);
        assert!(state.draft().unwrap().availability.start_time.is_none());
    }

    #[test]
    fn test_begin_editing_only_from_read_only() {
        let mut state = ProfileState::initialize(FormMode::View, None);
        assert!(state.begin_editing());
        assert!(!state.begin_editing());
        assert!(state.is_editing());

        state.end_editing();
        assert!(!state.is_editing());
    }
}
