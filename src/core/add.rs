use crate::core::repository::Repository;
use crate::errors::AppResult;
use crate::models::{LessonInput, LessonRecord, Table, validate};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate the form input, append it to a freshly loaded table and
    /// write the whole table back. Returns the saved record.
    ///
    /// Invalid input fails before the store is touched.
    pub fn apply(repo: &mut Repository, input: LessonInput) -> AppResult<LessonRecord> {
        let record = validate(input)?;

        let table = repo.load()?;
        let table: Table = Repository::append(&table, record.clone());
        repo.save(&table)?;

        Ok(record)
    }
}
