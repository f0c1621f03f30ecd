//! Account settings: the profile form

use std::sync::Arc;

use crate::error::{AuthError, Error};
use crate::profile::Profile;
use crate::session::SessionContext;
use crate::traits::TaskStore;
use crate::views::{LoadState, Notice};

/// The profile row of the signed-in identity, with its one editable field
pub struct SettingsView<S: TaskStore> {
    store: Arc<S>,
    session: SessionContext,
    state: LoadState,
    profile: Option<Profile>,
    /// The form value, which may differ from the stored row while editing
    full_name: String,
    notice: Option<Notice>,
}

impl<S: TaskStore> SettingsView<S> {
    pub fn new(store: Arc<S>, session: SessionContext) -> Self {
        Self {
            store,
            session,
            state: LoadState::Loading,
            profile: None,
            full_name: String::new(),
            notice: None,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// The current form value of the full-name field
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Bind the full-name form field
    pub fn set_full_name<T: ToString>(&mut self, value: T) {
        self.full_name = value.to_string();
    }

    /// The read-only email display. Email cannot be changed here.
    pub fn email(&self) -> Option<&str> {
        self.profile.as_ref().map(|p| p.email())
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Fetch the profile row matching the session identity
    pub async fn load(&mut self) -> Result<(), AuthError> {
        let session = self.session.require()?;
        self.state = LoadState::Loading;

        match self.store.get_profile(&session).await {
            Ok(profile) => {
                self.full_name = profile.full_name().to_string();
                self.profile = Some(profile);
            }
            Err(Error::Auth(err)) => {
                self.state = LoadState::Ready;
                return Err(err);
            }
            Err(err) => {
                log::warn!("Could not fetch the profile: {}", err);
                self.notice = Some(Notice::error("Error fetching profile", err));
            }
        }
        self.state = LoadState::Ready;
        Ok(())
    }

    /// Submit the single editable field.
    ///
    /// A failure keeps the entered value in the form (no silent revert to the
    /// last-saved one); a success confirms and updates the displayed row.
    pub async fn update_profile(&mut self) -> Result<(), AuthError> {
        let session = self.session.require()?;

        match self.store.update_profile(&session, &self.full_name).await {
            Ok(()) => {
                if let Some(profile) = &mut self.profile {
                    profile.set_full_name(&self.full_name);
                }
                self.notice = Some(Notice::info(
                    "Profile updated",
                    "Your profile has been updated successfully.",
                ));
            }
            Err(Error::Auth(err)) => return Err(err),
            Err(err) => {
                self.notice = Some(Notice::error("Error updating profile", err));
            }
        }
        Ok(())
    }
}
