//! Session lifecycle over the auth slot.
//!
//! Mirrors the ledger's storage posture: loads degrade to logged-out instead
//! of failing, and write problems are logged and swallowed.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::catalog::DEFAULT_AVATAR;
use crate::clock::Clock;
use crate::domain::{AuthSnapshot, LoginDetails, ProfilePatch, UserProfile};
use crate::storage::{SlotStore, AUTH_SLOT};

pub struct SessionManager {
    store: Arc<dyn SlotStore>,
    clock: Arc<dyn Clock>,
    state: AuthSnapshot,
    ready: bool,
}

impl SessionManager {
    pub fn new(store: Arc<dyn SlotStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            state: AuthSnapshot::default(),
            ready: false,
        }
    }

    /// Restores the stored session. Anything short of an authenticated
    /// snapshot with a user degrades to logged-out.
    pub fn init(&mut self) {
        match self.store.read(AUTH_SLOT) {
            Ok(Some(raw)) => match serde_json::from_str::<AuthSnapshot>(&raw) {
                Ok(snapshot) if snapshot.is_authenticated && snapshot.user.is_some() => {
                    debug!("restored session");
                    self.state = snapshot;
                }
                Ok(_) => debug!("stored session is logged out"),
                Err(error) => warn!(%error, "auth slot unreadable, starting logged out"),
            },
            Ok(None) => {}
            Err(error) => warn!(%error, "auth slot unavailable, starting logged out"),
        }
        self.ready = true;
    }

    /// True once [`init`](SessionManager::init) has run.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.state.user.as_ref()
    }

    /// Opens a session for the given account, filling profile defaults, and
    /// persists the snapshot immediately.
    pub fn login(&mut self, details: LoginDetails) -> UserProfile {
        let now = self.clock.stamp();
        let profile = UserProfile {
            id: details.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            email: details.email,
            name: details.name,
            avatar_id: details
                .avatar_id
                .unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
            created_at: details.created_at.unwrap_or_else(|| now.clone()),
            updated_at: Some(now),
        };
        debug!(email = %profile.email, "opening session");
        self.state = AuthSnapshot {
            is_authenticated: true,
            user: Some(profile.clone()),
        };
        self.persist();
        profile
    }

    /// Ends the session and removes the auth slot. The expense slot is not
    /// touched; the ledger belongs to the device, not the session.
    pub fn logout(&mut self) {
        debug!("closing session");
        self.state = AuthSnapshot::default();
        if let Err(error) = self.store.remove(AUTH_SLOT) {
            warn!(%error, "could not remove auth slot");
        }
    }

    /// Merges a profile edit onto the active user and stamps `updated_at`.
    /// Ignored with a warning when logged out.
    pub fn update_user(&mut self, patch: ProfilePatch) {
        let now = self.clock.stamp();
        let user = match self.state.user.as_mut() {
            Some(user) => user,
            None => {
                warn!("profile update ignored, no active session");
                return;
            }
        };
        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(avatar_id) = patch.avatar_id {
            user.avatar_id = avatar_id;
        }
        user.updated_at = Some(now);
        self.persist();
    }

    /// Re-reads the slot, replacing in-memory state. Lets a long-lived
    /// manager pick up writes made by another process.
    pub fn refresh(&mut self) {
        match self.store.read(AUTH_SLOT) {
            Ok(Some(raw)) => match serde_json::from_str::<AuthSnapshot>(&raw) {
                Ok(snapshot) => self.state = snapshot,
                Err(error) => warn!(%error, "auth slot unreadable on refresh"),
            },
            Ok(None) => self.state = AuthSnapshot::default(),
            Err(error) => warn!(%error, "auth slot unavailable on refresh"),
        }
    }

    fn persist(&self) {
        let payload = match serde_json::to_string(&self.state) {
            Ok(payload) => payload,
            Err(error) => {
                warn!(%error, "could not serialize session snapshot");
                return;
            }
        };
        if let Err(error) = self.store.write(AUTH_SLOT, &payload) {
            warn!(%error, "could not persist session snapshot");
        }
    }
}
