use payloads::{DocumentId, Post, User};
use yewdux::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum AuthState {
    /// The startup session probe has not finished yet.
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn(User),
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Authentication (managed by use_authentication) ===
    pub auth_state: AuthState,

    // === Bookmarks (kept for the session only) ===
    pub bookmarks: Vec<Post>,
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth_state, AuthState::LoggedIn(_))
    }

    pub fn current_user(&self) -> Option<&User> {
        match &self.auth_state {
            AuthState::LoggedIn(user) => Some(user),
            _ => None,
        }
    }

    pub fn sign_in(&mut self, user: User) {
        self.auth_state = AuthState::LoggedIn(user);
    }

    pub fn is_bookmarked(&self, post_id: &DocumentId) -> bool {
        self.bookmarks.iter().any(|post| &post.id == post_id)
    }

    /// Bookmark the post, or remove the bookmark if it exists. Returns
    /// whether the post is bookmarked afterwards.
    pub fn toggle_bookmark(&mut self, post: &Post) -> bool {
        if self.is_bookmarked(&post.id) {
            self.bookmarks.retain(|p| p.id != post.id);
            false
        } else {
            self.bookmarks.insert(0, post.clone());
            true
        }
    }

    /// Forget a deleted post everywhere it is cached.
    pub fn forget_post(&mut self, post_id: &DocumentId) {
        self.bookmarks.retain(|p| &p.id != post_id);
    }

    pub fn logout(&mut self) {
        self.auth_state = AuthState::LoggedOut;
        self.bookmarks.clear();
    }
}
