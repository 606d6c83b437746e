/// Represents a GitHub repository with owner and name components.
///
/// This struct ensures consistent handling of repository identifiers throughout
/// the application, providing utilities to construct and deconstruct the
/// "owner/repo" format used by the `gh` CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    /// Creates a new Repository instance.
    ///
    /// # Arguments
    ///
    /// * `owner` - The repository owner (username or organization)
    /// * `name` - The repository name
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Returns the repository in "owner/repo" format.
    ///
    /// This format is what `gh -R` expects and is used for display.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Parses a "owner/repo" string into a Repository.
    ///
    /// # Arguments
    ///
    /// * `full_name` - Repository in "owner/repo" format
    ///
    /// # Returns
    ///
    /// Returns `Some(Repository)` if the format is valid, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use roadmap::repository::Repository;
    ///
    /// let repo = Repository::parse("octocat/Hello-World").unwrap();
    /// assert_eq!(repo.owner, "octocat");
    /// assert_eq!(repo.name, "Hello-World");
    ///
    /// assert!(Repository::parse("invalid").is_none());
    /// ```
    pub fn parse(full_name: &str) -> Option<Self> {
        let parts: Vec<&str> = full_name.splitn(2, '/').collect();
        if parts.len() == 2
            && !parts[0].is_empty()
            && !parts[1].is_empty()
            && !parts[1].contains('/')
        {
            Some(Self::new(parts[0], parts[1]))
        } else {
            None
        }
    }

    /// Returns the owner component.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the name component.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_name())
    }
}

impl From<&Repository> for String {
    fn from(repo: &Repository) -> Self {
        repo.full_name()
    }
}

impl From<Repository> for String {
    fn from(repo: Repository) -> Self {
        repo.full_name()
    }
}
