use std::sync::Arc;

use crate::auth::repo::UserStore;
use crate::views::Views;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub views: Views,
}

impl AppState {
    pub fn from_parts(users: Arc<dyn UserStore>, views: Views) -> Self {
        Self { users, views }
    }
}
