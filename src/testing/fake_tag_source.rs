use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, GitHubRepo};
use crate::ports::TagSource;

#[derive(Clone, Default)]
pub struct FakeTagSource {
    pub tags: HashMap<String, String>,
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl FakeTagSource {
    pub fn with_tag(mut self, repository: &str, tag: &str) -> Self {
        self.tags.insert(repository.to_string(), tag.to_string());
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl TagSource for FakeTagSource {
    fn latest_tag(&self, repo: &GitHubRepo) -> Result<Option<String>, AppError> {
        let key = format!("{}/{}", repo.owner, repo.name);
        self.requested.lock().unwrap().push(key.clone());
        Ok(self.tags.get(&key).cloned())
    }
}
