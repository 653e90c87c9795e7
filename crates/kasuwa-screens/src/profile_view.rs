//! Profile screen state.
//!
//! Edits happen on a draft copy: save validates and commits the draft,
//! cancel resets it from the saved profile. A failed save leaves both
//! the saved profile and the editing flag untouched, so the form stays
//! open with the user's input intact.

use kasuwa_commerce::error::CommerceError;
use kasuwa_commerce::profile::Profile;

/// State of the profile screen.
#[derive(Debug, Clone)]
pub struct ProfileEditor {
    saved: Profile,
    draft: Profile,
    editing: bool,
}

impl ProfileEditor {
    /// Create the editor over the current profile.
    pub fn new(profile: Profile) -> Self {
        Self {
            draft: profile.clone(),
            saved: profile,
            editing: false,
        }
    }

    /// The last saved profile.
    pub fn saved(&self) -> &Profile {
        &self.saved
    }

    /// The draft being edited.
    pub fn draft(&self) -> &Profile {
        &self.draft
    }

    /// Mutable access to the draft, for form field bindings.
    pub fn draft_mut(&mut self) -> &mut Profile {
        &mut self.draft
    }

    /// Whether the form is open.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Open the form with a fresh draft.
    pub fn begin_edit(&mut self) {
        self.draft = self.saved.clone();
        self.editing = true;
    }

    /// Validate and commit the draft.
    pub fn save(&mut self) -> Result<(), CommerceError> {
        self.draft.validate()?;
        self.saved = self.draft.clone();
        self.editing = false;
        tracing::debug!("profile saved");
        Ok(())
    }

    /// Discard the draft and close the form.
    pub fn cancel(&mut self) {
        self.draft = self.saved.clone();
        self.editing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> ProfileEditor {
        ProfileEditor::new(Profile::new("Aïcha Oumarou", "+227 90 11 22 33"))
    }

    #[test]
    fn test_save_commits_draft() {
        let mut editor = editor();
        editor.begin_edit();
        editor.draft_mut().email = "aicha@example.ne".to_string();
        editor.save().unwrap();

        assert!(!editor.is_editing());
        assert_eq!(editor.saved().email, "aicha@example.ne");
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut editor = editor();
        editor.begin_edit();
        editor.draft_mut().name = "Quelqu'un d'autre".to_string();
        editor.cancel();

        assert!(!editor.is_editing());
        assert_eq!(editor.saved().name, "Aïcha Oumarou");
        assert_eq!(editor.draft().name, "Aïcha Oumarou");
    }

    #[test]
    fn test_failed_save_keeps_form_open() {
        let mut editor = editor();
        editor.begin_edit();
        editor.draft_mut().name = String::new();

        let err = editor.save().unwrap_err();
        assert!(matches!(err, CommerceError::Validation(_)));

        // Still editing, saved profile untouched, input preserved
        assert!(editor.is_editing());
        assert_eq!(editor.saved().name, "Aïcha Oumarou");
        assert!(editor.draft().name.is_empty());
    }

    #[test]
    fn test_begin_edit_reseeds_draft() {
        let mut editor = editor();
        editor.begin_edit();
        editor.draft_mut().phone = "+227 00 00 00 00".to_string();
        editor.cancel();

        editor.begin_edit();
        assert_eq!(editor.draft().phone, "+227 90 11 22 33");
    }
}
