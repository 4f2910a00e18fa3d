use ideaboard_auth::{
    AuthError, Identity, IdentityStore, SessionSlot, validate_login, validate_signup,
};
use ideaboard_core::{DomainError, DomainResult, IdeaId};
use ideaboard_ideas::{Idea, IdeaDraft, IdeaRegistry, sample_ideas};
use ideaboard_infra::FileSlot;

use crate::config::AppConfig;
use crate::dashboard::Dashboard;

/// Both stores plus the form-boundary checks the pages apply.
///
/// The stores stay permissive; this layer is where a missing idea or a
/// malformed draft becomes an error the user sees.
#[derive(Debug)]
pub struct App<S: SessionSlot = FileSlot> {
    ideas: IdeaRegistry,
    session: IdentityStore<S>,
}

impl App<FileSlot> {
    /// Build from configuration with a file-backed session, restoring any
    /// saved identity.
    pub fn bootstrap(config: &AppConfig) -> Self {
        let slot = FileSlot::new(config.session_file.clone());
        tracing::info!(session_file = %slot.path().display(), seed = config.seed, "bootstrapping");
        Self::with_slot(config, slot)
    }
}

impl<S: SessionSlot> App<S> {
    pub fn with_slot(config: &AppConfig, slot: S) -> Self {
        let ideas = if config.seed {
            IdeaRegistry::with_ideas(config.reference.clone(), sample_ideas(chrono::Utc::now()))
        } else {
            IdeaRegistry::new(config.reference.clone())
        };

        let mut session = IdentityStore::new(slot);
        session.restore();

        Self { ideas, session }
    }

    pub fn ideas(&self) -> &IdeaRegistry {
        &self.ideas
    }

    pub fn ideas_mut(&mut self) -> &mut IdeaRegistry {
        &mut self.ideas
    }

    pub fn session(&self) -> &IdentityStore<S> {
        &self.session
    }

    pub fn current_user(&self) -> Option<&Identity> {
        self.session.current()
    }

    /// "Create idea" form submit.
    pub fn submit_new_idea(&mut self, draft: IdeaDraft) -> DomainResult<Idea> {
        draft.validate()?;
        Ok(self.ideas.create(draft))
    }

    /// "Edit idea" form submit.
    pub fn submit_edit(&mut self, id: IdeaId, draft: IdeaDraft) -> DomainResult<Idea> {
        draft.validate()?;
        self.ideas.update(id, draft).ok_or(DomainError::NotFound)
    }

    /// Confirmed delete from the detail page.
    pub fn confirm_delete(&mut self, id: IdeaId) -> DomainResult<Idea> {
        self.ideas.delete(id).ok_or(DomainError::NotFound)
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<Identity, AuthError> {
        validate_login(email, password)?;
        self.session.login(email, password)
    }

    pub fn signup(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthError> {
        validate_signup(first_name, last_name, email, password)?;
        self.session.signup(first_name, last_name, email, password)
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::build(&self.ideas, self.session.current())
    }
}
