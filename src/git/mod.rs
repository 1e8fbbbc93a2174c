//! Git access for locating the release tag when no reference is supplied
//!
//! The [TagSource] trait keeps the lookup testable. Implementations:
//!
//! - [repository::Git2Repository]: a real repository opened with `git2`
//! - [mock::MockRepository]: an in-memory list of tags for tests

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Source of tags attached to the checked-out commit
pub trait TagSource: Send + Sync {
    /// Names of all tags (without `refs/tags/`) that point at HEAD.
    ///
    /// Annotated tags are peeled to the commit they reference.
    fn tags_at_head(&self) -> Result<Vec<String>>;
}

/// Full reference of the tag at HEAD, e.g. `refs/tags/v0.1.5`.
///
/// With several tags on the same commit the lexicographically last one
/// wins. Returns `None` when HEAD is untagged.
pub fn head_tag_reference<S: TagSource + ?Sized>(source: &S) -> Result<Option<String>> {
    let mut tags = source.tags_at_head()?;
    tags.sort();
    Ok(tags.pop().map(|name| format!("refs/tags/{}", name)))
}
