/// One row of the course catalog
///
/// # Invariants
/// - `id` and `name` cannot be empty
/// - `prerequisite` may be empty (course has no prerequisite)
///
/// # Example
/// ```
/// use catalog_api::domain::catalog::CatalogEntry;
///
/// let entry = CatalogEntry::new("C101", "Intro", "").expect("valid entry");
///
/// assert_eq!(entry.id(), "C101");
/// assert_eq!(entry.line(), "C101 Intro \n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    id: String,
    name: String,
    prerequisite: String,
}

impl CatalogEntry {
    /// Creates a new catalog entry
    ///
    /// # Arguments
    /// * `id` - Course id (cannot be empty)
    /// * `name` - Course name (cannot be empty)
    /// * `prerequisite` - Prerequisite course id, empty string for none
    ///
    /// # Returns
    /// * `Ok(CatalogEntry)` - New entry
    /// * `Err(String)` - Validation error message
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        prerequisite: impl Into<String>,
    ) -> Result<Self, String> {
        let id = id.into();
        let name = name.into();

        if id.is_empty() || name.is_empty() {
            return Err("Course id and name must be specified".to_string());
        }

        Ok(Self {
            id,
            name,
            prerequisite: prerequisite.into(),
        })
    }

    /// Rebuilds an entry from a database row, bypassing validation
    pub fn from_persistence(id: String, name: String, prerequisite: String) -> Self {
        Self {
            id,
            name,
            prerequisite,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prerequisite(&self) -> &str {
        &self.prerequisite
    }

    /// Renders the entry as its wire format: `"{cid} {cname} {cprereq}\n"`.
    /// Field order and spacing are load-bearing for existing clients.
    pub fn line(&self) -> String {
        format!("{} {} {}\n", self.id, self.name, self.prerequisite)
    }
}
