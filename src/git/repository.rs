use crate::error::Result;
use crate::git::TagSource;
use git2::Repository as Git2Repo;
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl TagSource for Git2Repository {
    fn tags_at_head(&self) -> Result<Vec<String>> {
        let head = self.repo.head()?.peel_to_commit()?.id();
        let names = self.repo.tag_names(None)?;

        let mut tags = Vec::new();
        for name in names.iter().flatten() {
            let object = self.repo.revparse_single(&format!("refs/tags/{}", name))?;
            // Tags on trees or blobs cannot mark a release commit
            let Ok(commit) = object.peel_to_commit() else {
                continue;
            };
            if commit.id() == head {
                tags.push(name.to_string());
            }
        }

        Ok(tags)
    }
}

// SAFETY: Git2Repository is only read from; libgit2 allows concurrent reads
// of a repository handle.
unsafe impl Sync for Git2Repository {}
