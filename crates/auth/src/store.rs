//! The identity store: zero-or-one current identity, mirrored to a slot.

use serde::{Deserialize, Serialize};

use ideaboard_events::{EventBus, InMemoryEventBus, Subscription};

use crate::error::AuthError;
use crate::identity::Identity;
use crate::provider::{IdentityProvider, MockIdentityProvider};
use crate::slot::SessionSlot;

/// Notification published when the current identity changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionChange {
    SignedIn { identity: Identity },
    SignedOut,
}

/// Holds the session identity.
///
/// login/signup replace whatever identity was current. The slot is written on
/// login/signup, cleared on logout and read by [`IdentityStore::restore`].
/// Slot failures are logged and never fail the operation: the in-memory
/// identity stays authoritative for the running process.
#[derive(Debug)]
pub struct IdentityStore<S, P = MockIdentityProvider> {
    slot: S,
    provider: P,
    current: Option<Identity>,
    changes: InMemoryEventBus<SessionChange>,
}

impl<S: SessionSlot> IdentityStore<S> {
    /// Store backed by the mock provider.
    pub fn new(slot: S) -> Self {
        Self::with_provider(slot, MockIdentityProvider)
    }
}

impl<S, P> IdentityStore<S, P>
where
    S: SessionSlot,
    P: IdentityProvider,
{
    pub fn with_provider(slot: S, provider: P) -> Self {
        Self {
            slot,
            provider,
            current: None,
            changes: InMemoryEventBus::new(),
        }
    }

    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let identity = self.provider.authenticate(email, password)?;
        Ok(self.sign_in(identity))
    }

    pub fn signup(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthError> {
        let identity = self
            .provider
            .register(first_name, last_name, email, password)?;
        Ok(self.sign_in(identity))
    }

    pub fn logout(&mut self) {
        let previous = self.current.take();
        if let Err(err) = self.slot.clear() {
            tracing::warn!("failed to clear session slot: {err}");
        }
        if let Some(identity) = previous {
            tracing::info!(identity_id = %identity.id, "signed out");
            self.publish(SessionChange::SignedOut);
        }
    }

    /// Load the identity saved in the slot and make it current.
    ///
    /// Unreadable or malformed content counts as no session; it is logged and
    /// left in the slot untouched.
    pub fn restore(&mut self) -> Option<Identity> {
        let raw = match self.slot.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!("failed to read session slot: {err}");
                return None;
            }
        };

        let identity: Identity = match serde_json::from_str(&raw) {
            Ok(identity) => identity,
            Err(err) => {
                tracing::warn!("ignoring malformed session slot: {err}");
                return None;
            }
        };

        tracing::info!(identity_id = %identity.id, "session restored");
        self.current = Some(identity.clone());
        self.publish(SessionChange::SignedIn {
            identity: identity.clone(),
        });
        Some(identity)
    }

    pub fn subscribe(&self) -> Subscription<SessionChange> {
        self.changes.subscribe()
    }

    fn sign_in(&mut self, identity: Identity) -> Identity {
        match serde_json::to_string(&identity) {
            Ok(raw) => {
                if let Err(err) = self.slot.write(&raw) {
                    tracing::warn!(identity_id = %identity.id, "failed to persist session: {err}");
                }
            }
            Err(err) => tracing::warn!(identity_id = %identity.id, "failed to encode session: {err}"),
        }

        tracing::info!(identity_id = %identity.id, "signed in");
        self.current = Some(identity.clone());
        self.publish(SessionChange::SignedIn {
            identity: identity.clone(),
        });
        identity
    }

    fn publish(&self, change: SessionChange) {
        if let Err(err) = self.changes.publish(change) {
            tracing::warn!("failed to publish session change: {err}");
        }
    }
}
