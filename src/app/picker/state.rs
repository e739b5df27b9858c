//! User Picker State
//!
//! This module contains the state management for the user picker widget:
//! the candidate set, the search query with its derived match list, and the
//! committed selection. All transitions are synchronous; the only
//! asynchronous input is the one-shot directory load polled via
//! [`UserPickerState::poll_pending_load`].

use std::sync::mpsc::{Receiver, TryRecvError};

use crate::app::directory::LoadUsersResult;
use crate::shared::user::User;

/// Notification emitted when the committed selection changes.
///
/// Both fields populated means "this user is now selected"; both empty means
/// "no selection".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub email: String,
    pub name: String,
}

impl SelectionChange {
    /// Notification for a newly committed user
    pub fn selected(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }

    /// Notification for a cleared selection
    pub fn cleared() -> Self {
        Self {
            email: String::new(),
            name: String::new(),
        }
    }

    /// Whether this notification means "no selection"
    pub fn is_cleared(&self) -> bool {
        self.email.is_empty() && self.name.is_empty()
    }
}

/// Whether a user matches a search query.
///
/// Case-insensitive substring match against name, short name (when present),
/// and email. An empty query matches nothing: the widget never shows the
/// full directory unprompted.
pub fn matches_query(user: &User, query: &str) -> bool {
    if query.is_empty() {
        return false;
    }
    let query = query.to_lowercase();

    user.name.to_lowercase().contains(query.as_str())
        || user
            .short_name
            .as_ref()
            .map(|n| n.to_lowercase().contains(query.as_str()))
            .unwrap_or(false)
        || user.email.to_lowercase().contains(query.as_str())
}

/// Filter a candidate set by a query, preserving the set's original order.
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    users.iter().filter(|u| matches_query(u, query)).collect()
}

/// The state for one user picker instance.
///
/// Each instance owns its own copy of the candidate set; nothing here is
/// shared across widgets.
pub struct UserPickerState {
    /// Loaded candidate set (empty until the background load lands)
    users: Vec<User>,
    /// Current search text
    query: String,
    /// Indices into `users` matching the current query, in set order
    filtered: Vec<usize>,
    /// Whether the match list is currently shown
    show_dropdown: bool,
    /// The committed selection, if any
    selected: Option<User>,
    /// Pending background directory load
    pending_load: Option<Receiver<LoadUsersResult>>,
}

impl Default for UserPickerState {
    fn default() -> Self {
        Self::new()
    }
}

impl UserPickerState {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            query: String::new(),
            filtered: Vec::new(),
            show_dropdown: false,
            selected: None,
            pending_load: None,
        }
    }

    /// Build a picker over an already loaded candidate set (mainly for tests
    /// and previews).
    pub fn with_users(users: Vec<User>) -> Self {
        let mut state = Self::new();
        state.users = users;
        state
    }

    /// Attach a background directory load started with
    /// [`spawn_load_users`](crate::app::directory::spawn_load_users).
    pub fn begin_load(&mut self, rx: Receiver<LoadUsersResult>) {
        self.pending_load = Some(rx);
    }

    /// Whether the initial directory load is still in flight
    pub fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }

    /// Check for a completed directory load. Call once per frame.
    ///
    /// On failure the error is logged and the candidate set stays empty; the
    /// widget keeps working and simply never matches anything.
    pub fn poll_pending_load(&mut self) {
        if let Some(ref rx) = self.pending_load {
            match rx.try_recv() {
                Ok(Ok(users)) => {
                    self.pending_load = None;
                    self.users = users;
                    self.refilter();
                }
                Ok(Err(e)) => {
                    self.pending_load = None;
                    tracing::error!("Failed to load user directory: {}", e);
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.pending_load = None;
                    tracing::error!("User directory load was abandoned");
                }
            }
        }
    }

    /// Current search text
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The committed selection, if any
    pub fn selected_user(&self) -> Option<&User> {
        self.selected.as_ref()
    }

    /// Whether the match list is currently shown
    pub fn dropdown_open(&self) -> bool {
        self.show_dropdown && !self.filtered.is_empty()
    }

    /// Users matching the current query, in candidate-set order
    pub fn filtered_users(&self) -> impl Iterator<Item = &User> {
        self.filtered.iter().map(|&i| &self.users[i])
    }

    /// Number of loaded candidates
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Replace the search text.
    ///
    /// Editing while a user is committed drops the commitment first, which
    /// produces a cleared notification.
    pub fn set_query(&mut self, text: String) -> Option<SelectionChange> {
        let change = if self.selected.take().is_some() {
            Some(SelectionChange::cleared())
        } else {
            None
        };
        self.query = text;
        self.refilter();
        change
    }

    /// Commit a user from the match list.
    ///
    /// Clears the search text, hides the list, and returns the selection
    /// notification. Re-committing the already committed user is a no-op.
    pub fn commit(&mut self, user: User) -> Option<SelectionChange> {
        if self.selected.as_ref() == Some(&user) {
            return None;
        }
        let change = SelectionChange::selected(&user);
        self.selected = Some(user);
        self.query.clear();
        self.refilter();
        Some(change)
    }

    /// Drop the committed selection, returning the cleared notification.
    pub fn clear_selection(&mut self) -> Option<SelectionChange> {
        self.selected.take()?;
        self.query.clear();
        self.refilter();
        Some(SelectionChange::cleared())
    }

    /// Hide the match list without touching query or selection.
    pub fn dismiss(&mut self) {
        self.show_dropdown = false;
    }

    /// Re-open the match list, if the current query still has matches.
    /// Called when the search field regains focus.
    pub fn reopen(&mut self) {
        if !self.query.is_empty() && !self.filtered.is_empty() {
            self.show_dropdown = true;
        }
    }

    /// Recompute the match list and the derived visibility flag.
    fn refilter(&mut self) {
        self.filtered = self
            .users
            .iter()
            .enumerate()
            .filter(|(_, u)| matches_query(u, &self.query))
            .map(|(i, _)| i)
            .collect();
        self.show_dropdown = !self.query.is_empty() && !self.filtered.is_empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::user::Role;
    use chrono::{TimeZone, Utc};
    use std::sync::mpsc;

    fn user(id: &str, name: &str, short_name: Option<&str>, email: &str, role: Role) -> User {
        User {
            id: id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            short_name: short_name.map(|s| s.to_string()),
            role,
            created_at: Utc.with_ymd_and_hms(2024, 9, 1, 10, 0, 0).unwrap(),
        }
    }

    fn directory() -> Vec<User> {
        vec![
            user("u-1", "Alice Wu", None, "alice@x.org", Role::Member),
            user("u-2", "Bob", None, "bob@x.org", Role::Core),
        ]
    }

    #[test]
    fn test_query_matches_name_prefix() {
        let users = directory();
        let matched = filter_users(&users, "ali");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Alice Wu");
    }

    #[test]
    fn test_query_matches_email_preserving_order() {
        let users = directory();
        let matched = filter_users(&users, "x.org");
        let names: Vec<_> = matched.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Alice Wu", "Bob"]);
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let users = directory();
        assert!(filter_users(&users, "").is_empty());

        let mut state = UserPickerState::with_users(users);
        state.set_query(String::new());
        assert!(!state.dropdown_open());
    }

    #[test]
    fn test_query_matches_short_name() {
        let users = vec![user(
            "u-3",
            "Charlotte Ng",
            Some("Charlie"),
            "cng@x.org",
            Role::Ec,
        )];
        assert_eq!(filter_users(&users, "charlie").len(), 1);
        assert!(filter_users(&users, "zzz").is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let users = directory();
        assert_eq!(filter_users(&users, "ALICE").len(), 1);
        assert_eq!(filter_users(&users, "X.ORG").len(), 2);
    }

    #[test]
    fn test_typing_opens_dropdown() {
        let mut state = UserPickerState::with_users(directory());
        assert!(!state.dropdown_open());

        let change = state.set_query("ali".to_string());
        assert!(change.is_none());
        assert!(state.dropdown_open());
        assert_eq!(state.filtered_users().count(), 1);
    }

    #[test]
    fn test_commit_clears_query_and_notifies() {
        let mut state = UserPickerState::with_users(directory());
        state.set_query("ali".to_string());
        let alice = state.filtered_users().next().unwrap().clone();

        let change = state.commit(alice).unwrap();
        assert_eq!(change.email, "alice@x.org");
        assert_eq!(change.name, "Alice Wu");
        assert_eq!(state.query(), "");
        assert!(!state.dropdown_open());
        assert_eq!(state.selected_user().unwrap().id, "u-1");
    }

    #[test]
    fn test_commit_is_idempotent() {
        let mut state = UserPickerState::with_users(directory());
        state.set_query("ali".to_string());
        let alice = state.filtered_users().next().unwrap().clone();

        assert!(state.commit(alice.clone()).is_some());
        assert!(state.commit(alice).is_none());
        assert_eq!(state.selected_user().unwrap().id, "u-1");
    }

    #[test]
    fn test_clear_selection_notifies_with_empty_values() {
        let mut state = UserPickerState::with_users(directory());
        state.set_query("ali".to_string());
        let alice = state.filtered_users().next().unwrap().clone();
        state.commit(alice);

        let change = state.clear_selection().unwrap();
        assert!(change.is_cleared());
        assert!(state.selected_user().is_none());
        assert_eq!(state.query(), "");

        // Clearing again is a no-op
        assert!(state.clear_selection().is_none());
    }

    #[test]
    fn test_editing_while_committed_drops_commitment() {
        let mut state = UserPickerState::with_users(directory());
        state.set_query("bob".to_string());
        let bob = state.filtered_users().next().unwrap().clone();
        state.commit(bob);

        let change = state.set_query("al".to_string()).unwrap();
        assert!(change.is_cleared());
        assert!(state.selected_user().is_none());
        assert_eq!(state.query(), "al");
        assert!(state.dropdown_open());
    }

    #[test]
    fn test_dismiss_keeps_query_and_selection() {
        let mut state = UserPickerState::with_users(directory());
        state.set_query("x.org".to_string());
        assert!(state.dropdown_open());

        state.dismiss();
        assert!(!state.dropdown_open());
        assert_eq!(state.query(), "x.org");
        assert_eq!(state.filtered_users().count(), 2);

        // Refocusing with a live query re-opens the list
        state.reopen();
        assert!(state.dropdown_open());
    }

    #[test]
    fn test_reopen_requires_matches() {
        let mut state = UserPickerState::with_users(directory());
        state.set_query("nobody".to_string());
        state.dismiss();
        state.reopen();
        assert!(!state.dropdown_open());
    }

    #[test]
    fn test_load_success_refilters_existing_query() {
        let mut state = UserPickerState::new();
        state.set_query("ali".to_string());
        assert!(!state.dropdown_open());

        let (tx, rx) = mpsc::channel();
        state.begin_load(rx);
        assert!(state.is_loading());

        tx.send(Ok(directory())).unwrap();
        state.poll_pending_load();
        assert!(!state.is_loading());
        assert_eq!(state.user_count(), 2);
        assert!(state.dropdown_open());
    }

    #[test]
    fn test_load_failure_leaves_set_empty() {
        let mut state = UserPickerState::new();
        let (tx, rx) = mpsc::channel();
        state.begin_load(rx);

        tx.send(Err(crate::shared::error::DirectoryError::network(
            "connection refused",
        )))
        .unwrap();
        state.poll_pending_load();

        assert!(!state.is_loading());
        assert_eq!(state.user_count(), 0);
        state.set_query("ali".to_string());
        assert!(!state.dropdown_open());
    }

    #[test]
    fn test_abandoned_load_is_dropped() {
        let mut state = UserPickerState::new();
        let (tx, rx) = mpsc::channel::<LoadUsersResult>();
        state.begin_load(rx);
        drop(tx);

        state.poll_pending_load();
        assert!(!state.is_loading());
        assert_eq!(state.user_count(), 0);
    }
}
