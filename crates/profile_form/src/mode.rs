//! Form operating modes.

/// The operating mode a profile form is hosted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Read-only display of the current user's profile, with an explicit
    /// transition into editing.
    View,
    /// Editing an existing profile supplied by the host.
    Edit,
    /// First-time profile creation.
    Signup,
}

impl FormMode {
    /// Whether a form in this mode starts out editing.
    pub fn starts_editing(&self) -> bool {
        matches!(self, FormMode::Edit | FormMode::Signup)
    }
}
