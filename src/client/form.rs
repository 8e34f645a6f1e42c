//! Typed state for the two configuration-form interactions: the database
//! profile picker and the generated-password modal.

use crate::error::VaultError;
use crate::service::profiles;

/// State of the JDBC configuration form fields.
///
/// Selecting a database populates the driver and URL fields from the catalog,
/// clears any previously entered credentials (stale once the backend
/// changes), and recomputes the separate-driver warning.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    pub driver: String,
    pub url: String,
    pub username: String,
    pub password: String,
    pub driver_warning: bool,
}

impl ProfileForm {
    pub fn select(&mut self, ordinal: usize) -> Result<(), VaultError> {
        let profile = profiles::profile(ordinal).ok_or(VaultError::UnknownProfile(ordinal))?;
        self.driver = profile.driver.to_string();
        self.url = profile.url.to_string();
        self.username.clear();
        self.password.clear();
        self.driver_warning = profiles::requires_separate_driver(ordinal);
        Ok(())
    }
}

/// State of the password-entry fields and the generated-password modal.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CredentialForm {
    generated: Option<String>,
    modal_visible: bool,
    pub password_1: String,
    pub password_2: String,
}

impl CredentialForm {
    /// Display a freshly generated password and open the modal.
    pub fn show_generated(&mut self, password: String) {
        self.generated = Some(password);
        self.modal_visible = true;
    }

    /// The password currently on display, if any.
    pub fn displayed(&self) -> Option<&str> {
        self.generated.as_deref()
    }

    pub fn modal_visible(&self) -> bool {
        self.modal_visible
    }

    /// Copy the displayed password into both confirmation fields and close
    /// the modal. Both fields hold the identical text afterwards.
    pub fn use_generated(&mut self) -> Result<(), VaultError> {
        let password = self.generated.as_ref().ok_or(VaultError::NoGeneratedPassword)?;
        self.password_1 = password.clone();
        self.password_2 = password.clone();
        self.modal_visible = false;
        Ok(())
    }

    /// Close the modal without touching the password fields.
    pub fn dismiss(&mut self) {
        self.modal_visible = false;
    }
}
