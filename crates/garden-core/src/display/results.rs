//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Garden, GardenNote, Plant, PlantCompanions, PlantingRecord};

fn write_changes(f: &mut fmt::Formatter<'_>, changes: &[String]) -> fmt::Result {
    if changes.is_empty() {
        return Ok(());
    }
    writeln!(f)?;
    writeln!(f, "Changes made:")?;
    for change in changes {
        writeln!(f, "- {change}")?;
    }
    Ok(())
}

/// The result of a create operation.
///
/// ```rust
/// use garden_core::{display::CreateResult, models::Plant};
///
/// let plant = Plant {
///     id: 3,
///     name: "Tomato".to_string(),
///     latin_name: None,
///     timing: None,
/// };
/// let output = CreateResult::new(plant).to_string();
/// assert!(output.starts_with("Added plant with ID: 3"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
    /// Values set or derived while creating the resource
    pub changes: Vec<String>,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for CreateResult<Garden> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created garden with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Plant> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added plant with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<PlantingRecord> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Placed planting {} at {} in garden {}",
            self.resource.id, self.resource.position, self.resource.garden_id
        )?;
        write_changes(f, &self.changes)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<GardenNote> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added note {} to garden {}",
            self.resource.id, self.resource.garden_id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// The result of an update, listing what changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Plant> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated plant with ID: {}", self.resource.id)?;
        write_changes(f, &self.changes)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<PlantingRecord> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated planting with ID: {}", self.resource.id)?;
        if self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "No changes.")?;
        }
        write_changes(f, &self.changes)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<PlantCompanions> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated companions of {}", self.resource.plant.name)?;
        write_changes(f, &self.changes)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// The result of a delete operation.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Garden> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted garden '{}' (ID: {}) and its plantings",
            self.resource.name, self.resource.id
        )
    }
}

impl fmt::Display for DeleteResult<PlantingRecord> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Cleared cell {} in garden {} (planting {})",
            self.resource.position, self.resource.garden_id, self.resource.id
        )
    }
}

impl fmt::Display for DeleteResult<GardenNote> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted note {} from garden {}",
            self.resource.id, self.resource.garden_id
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::Position;

    #[test]
    fn test_update_result_lists_changes() {
        let mut record = PlantingRecord::new(1, 2, Position::new(0, 0));
        record.id = 5;
        record.planted_date = Some(date(2025, 5, 1));
        let result = UpdateResult::with_changes(
            record,
            vec!["Set planted date to 2025-05-01".to_string()],
        );
        let output = result.to_string();
        assert!(output.starts_with("Updated planting with ID: 5"));
        assert!(output.contains("Changes made:\n- Set planted date to 2025-05-01"));
    }

    #[test]
    fn test_clear_cell_message() {
        let mut record = PlantingRecord::new(7, 2, Position::new(1, 3));
        record.id = 11;
        assert_eq!(
            DeleteResult::new(record).to_string(),
            "Cleared cell (1, 3) in garden 7 (planting 11)\n"
        );
    }
}
