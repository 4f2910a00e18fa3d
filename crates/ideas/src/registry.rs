//! The idea registry: authoritative in-memory collection of ideas.

use serde::{Deserialize, Serialize};

use ideaboard_core::IdeaId;
use ideaboard_events::{EventBus, InMemoryEventBus, Subscription};

use crate::idea::{Idea, IdeaDraft};
use crate::reference::ReferenceLists;
use crate::stats::{self, PersonTotals, StatusTotals};

/// Notification published after an effective mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum IdeaChange {
    Created(IdeaId),
    Updated(IdeaId),
    Deleted(IdeaId),
}

/// Point-in-time copy of the collection for pollers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub version: u64,
    pub ideas: Vec<Idea>,
}

/// Owns the idea collection and the people/groups reference lists.
///
/// Unknown ids are never an error: `get` returns `None`, `update` and
/// `delete` do nothing and return `None`. Input is stored as given.
#[derive(Debug, Default)]
pub struct IdeaRegistry {
    ideas: Vec<Idea>,
    reference: ReferenceLists,
    version: u64,
    changes: InMemoryEventBus<IdeaChange>,
}

impl IdeaRegistry {
    pub fn new(reference: ReferenceLists) -> Self {
        Self {
            reference,
            ..Default::default()
        }
    }

    /// Start from existing drafts, listed in the given order.
    ///
    /// Seeding assigns ids but publishes nothing and leaves the version at 0.
    pub fn with_ideas(reference: ReferenceLists, drafts: impl IntoIterator<Item = IdeaDraft>) -> Self {
        let ideas = drafts
            .into_iter()
            .map(|draft| Idea::new(IdeaId::new(), draft))
            .collect();
        Self {
            ideas,
            reference,
            ..Default::default()
        }
    }

    /// Store a new idea at the front of the list.
    pub fn create(&mut self, input: IdeaDraft) -> Idea {
        let idea = Idea::new(IdeaId::new(), input);
        self.ideas.insert(0, idea.clone());
        tracing::debug!(idea_id = %idea.id, "idea created");
        self.record(IdeaChange::Created(idea.id));
        idea
    }

    /// Replace the idea with `id` in place; `None` if there is no such idea.
    pub fn update(&mut self, id: IdeaId, input: IdeaDraft) -> Option<Idea> {
        let Some(slot) = self.ideas.iter_mut().find(|idea| idea.id == id) else {
            tracing::debug!(idea_id = %id, "update ignored: unknown idea");
            return None;
        };
        *slot = Idea::new(id, input);
        let updated = slot.clone();
        tracing::debug!(idea_id = %id, "idea updated");
        self.record(IdeaChange::Updated(id));
        Some(updated)
    }

    /// Remove the idea with `id`, returning it; `None` if there is no such idea.
    pub fn delete(&mut self, id: IdeaId) -> Option<Idea> {
        let Some(index) = self.ideas.iter().position(|idea| idea.id == id) else {
            tracing::debug!(idea_id = %id, "delete ignored: unknown idea");
            return None;
        };
        let removed = self.ideas.remove(index);
        tracing::debug!(idea_id = %id, "idea deleted");
        self.record(IdeaChange::Deleted(id));
        Some(removed)
    }

    pub fn get(&self, id: IdeaId) -> Option<Idea> {
        self.ideas.iter().find(|idea| idea.id == id).cloned()
    }

    pub fn list(&self) -> &[Idea] {
        &self.ideas
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    /// Ideas whose title or creator name contains `query`, ignoring case.
    ///
    /// A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<Idea> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.ideas.clone();
        }
        self.ideas
            .iter()
            .filter(|idea| {
                idea.title().to_lowercase().contains(&needle)
                    || idea.creator_name().to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    pub fn people(&self) -> &[String] {
        self.reference.people()
    }

    pub fn groups(&self) -> &[String] {
        self.reference.groups()
    }

    pub fn totals_by_status(&self) -> StatusTotals {
        stats::totals_by_status(&self.ideas)
    }

    pub fn totals_by_user(&self) -> Vec<PersonTotals> {
        stats::totals_by_user(self.reference.people(), &self.ideas)
    }

    /// Count of effective mutations since construction.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            version: self.version,
            ideas: self.ideas.clone(),
        }
    }

    /// Receive a [`IdeaChange`] for every mutation made after this call.
    pub fn subscribe(&self) -> Subscription<IdeaChange> {
        self.changes.subscribe()
    }

    fn record(&mut self, change: IdeaChange) {
        self.version += 1;
        if let Err(err) = self.changes.publish(change) {
            tracing::warn!(?change, "failed to publish idea change: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use proptest::prelude::*;

    use super::*;
    use crate::idea::Status;
    use crate::reference::sample_ideas;

    fn draft(title: &str, status: Status) -> IdeaDraft {
        let now = Utc::now();
        IdeaDraft {
            title: title.to_string(),
            description: "Some description".to_string(),
            creator_first_name: "Alice".to_string(),
            creator_last_name: "Martin".to_string(),
            start_date: now,
            due_date: now,
            status,
            groups: vec![],
            assignees: vec![],
        }
    }

    #[test]
    fn create_returns_stored_record_at_front() {
        let mut registry = IdeaRegistry::default();
        let first = registry.create(draft("First", Status::Todo));
        let second = registry.create(draft("Second", Status::Done));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.list()[0], second);
        assert_eq!(registry.list()[1], first);
        assert_eq!(registry.get(first.id), Some(first));
    }

    #[test]
    fn single_todo_idea_totals() {
        let mut registry = IdeaRegistry::new(ReferenceLists::new(vec![], vec![]));
        registry.create(draft("X", Status::Todo));

        let totals = registry.totals_by_status();
        assert_eq!(totals.todo, 1);
        assert_eq!(totals.in_progress, 0);
        assert_eq!(totals.done, 0);
    }

    #[test]
    fn update_replaces_whole_record_and_keeps_position() {
        let mut registry = IdeaRegistry::default();
        let target = registry.create(draft("Old", Status::Todo));
        registry.create(draft("Newer", Status::Todo));

        let replacement = draft("Renamed", Status::Done);
        let updated = registry.update(target.id, replacement.clone());

        let expected = Idea::new(target.id, replacement);
        assert_eq!(updated.as_ref(), Some(&expected));
        assert_eq!(registry.get(target.id), Some(expected.clone()));
        assert_eq!(registry.list()[1], expected);
    }

    #[test]
    fn update_unknown_id_is_a_no_op() {
        let mut registry = IdeaRegistry::default();
        registry.create(draft("Kept", Status::Todo));
        let before = registry.snapshot();

        assert!(registry.update(IdeaId::new(), draft("Ghost", Status::Done)).is_none());

        assert_eq!(registry.snapshot(), before);
    }

    #[test]
    fn delete_removes_and_unknown_delete_is_a_no_op() {
        let mut registry = IdeaRegistry::default();
        let idea = registry.create(draft("Doomed", Status::Todo));

        assert_eq!(registry.delete(idea.id), Some(idea.clone()));
        assert_eq!(registry.get(idea.id), None);
        assert!(registry.is_empty());

        assert!(registry.delete(idea.id).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn search_matches_title_or_creator_ignoring_case() {
        let mut registry = IdeaRegistry::default();
        registry.create(draft("Onboarding MVP", Status::Todo));
        let mut other = draft("Newsletter", Status::Todo);
        other.creator_first_name = "Diane".to_string();
        other.creator_last_name = "Leroy".to_string();
        registry.create(other);

        assert_eq!(registry.search("onboard").len(), 1);
        assert_eq!(registry.search("LEROY")[0].title(), "Newsletter");
        assert_eq!(registry.search("diane leroy").len(), 1);
        assert_eq!(registry.search("   ").len(), 2);
        assert!(registry.search("nothing like this").is_empty());
    }

    #[test]
    fn seeded_registry_keeps_draft_order_and_version_zero() {
        let registry = IdeaRegistry::with_ideas(ReferenceLists::default(), sample_ideas(Utc::now()));

        let titles: Vec<&str> = registry.list().iter().map(|i| i.title()).collect();
        assert_eq!(titles, vec!["Homepage redesign", "Onboarding MVP", "Q3 email campaign"]);
        assert_eq!(registry.version(), 0);
        assert_eq!(registry.people().len(), 4);
        assert_eq!(registry.groups().len(), 4);
    }

    #[test]
    fn subscribers_see_effective_mutations_only() {
        let mut registry = IdeaRegistry::default();
        let changes = registry.subscribe();

        let idea = registry.create(draft("Tracked", Status::Todo));
        registry.update(idea.id, draft("Tracked", Status::InProgress));
        registry.update(IdeaId::new(), draft("Ghost", Status::Done));
        registry.delete(IdeaId::new());
        registry.delete(idea.id);

        assert_eq!(
            changes.drain(),
            vec![
                IdeaChange::Created(idea.id),
                IdeaChange::Updated(idea.id),
                IdeaChange::Deleted(idea.id),
            ]
        );
        assert_eq!(registry.version(), 3);
    }

    #[test]
    fn per_user_totals_include_reference_people() {
        let mut registry = IdeaRegistry::default();
        let mut d = draft("X", Status::Todo);
        d.assignees = vec!["Bob Durand".to_string()];
        registry.create(d);

        let totals = registry.totals_by_user();
        let alice = totals.iter().find(|t| t.name == "Alice Martin").unwrap();
        let bob = totals.iter().find(|t| t.name == "Bob Durand").unwrap();
        let charlie = totals.iter().find(|t| t.name == "Charlie Dupont").unwrap();

        assert_eq!((alice.created, alice.assigned), (1, 0));
        assert_eq!((bob.created, bob.assigned), (0, 1));
        assert_eq!((charlie.created, charlie.assigned), (0, 0));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Create(Status),
        Update(usize, Status),
        Delete(usize),
        UpdateMissing,
        DeleteMissing,
    }

    fn status_strategy() -> impl Strategy<Value = Status> {
        prop_oneof![Just(Status::Todo), Just(Status::InProgress), Just(Status::Done)]
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => status_strategy().prop_map(Op::Create),
            2 => (any::<usize>(), status_strategy()).prop_map(|(i, s)| Op::Update(i, s)),
            1 => any::<usize>().prop_map(Op::Delete),
            1 => Just(Op::UpdateMissing),
            1 => Just(Op::DeleteMissing),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: n creates yield n ideas with pairwise distinct ids.
        #[test]
        fn creates_yield_distinct_ids(statuses in prop::collection::vec(status_strategy(), 0..40)) {
            let mut registry = IdeaRegistry::default();
            let mut ids = std::collections::HashSet::new();

            for status in &statuses {
                ids.insert(registry.create(draft("P", *status)).id);
            }

            prop_assert_eq!(registry.len(), statuses.len());
            prop_assert_eq!(ids.len(), statuses.len());
        }

        /// Property: status totals always sum to the collection size.
        #[test]
        fn status_totals_sum_to_len(ops in prop::collection::vec(op_strategy(), 0..60)) {
            let mut registry = IdeaRegistry::default();

            for op in ops {
                match op {
                    Op::Create(status) => {
                        registry.create(draft("P", status));
                    }
                    Op::Update(i, status) if !registry.is_empty() => {
                        let id = registry.list()[i % registry.len()].id;
                        registry.update(id, draft("P", status));
                    }
                    Op::Delete(i) if !registry.is_empty() => {
                        let id = registry.list()[i % registry.len()].id;
                        registry.delete(id);
                    }
                    Op::UpdateMissing => {
                        let before = registry.len();
                        registry.update(IdeaId::new(), draft("P", Status::Done));
                        prop_assert_eq!(registry.len(), before);
                    }
                    Op::DeleteMissing => {
                        let before = registry.len();
                        registry.delete(IdeaId::new());
                        prop_assert_eq!(registry.len(), before);
                    }
                    _ => {}
                }

                prop_assert_eq!(registry.totals_by_status().total(), registry.len());
            }
        }
    }
}
