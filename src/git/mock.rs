use crate::error::Result;
use crate::git::TagSource;

/// Mock repository for testing without a git checkout
pub struct MockRepository {
    head_tags: Vec<String>,
}

impl MockRepository {
    /// Create a mock whose HEAD carries no tags
    pub fn new() -> Self {
        MockRepository {
            head_tags: Vec::new(),
        }
    }

    /// Attach a tag to HEAD
    pub fn add_head_tag(&mut self, name: impl Into<String>) {
        self.head_tags.push(name.into());
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TagSource for MockRepository {
    fn tags_at_head(&self) -> Result<Vec<String>> {
        Ok(self.head_tags.clone())
    }
}
