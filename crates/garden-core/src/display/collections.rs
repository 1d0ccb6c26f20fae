//! Collection wrapper types for displaying groups of domain objects.

use std::{collections::HashMap, fmt};

use jiff::civil::Date;

use super::datetime::LocalDateTime;
use crate::models::{Garden, GardenNote, GardenSnapshot, Plant, Position, ScheduledPlanting};

/// A list of gardens.
pub struct Gardens(pub Vec<Garden>);

impl Gardens {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Gardens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No gardens found.");
        }
        for garden in &self.0 {
            writeln!(f, "## {} (ID: {})", garden.name, garden.id)?;
            writeln!(f)?;
            writeln!(f, "- **Owner**: {}", garden.owner)?;
            writeln!(f, "- **Grid**: {} x {}", garden.rows, garden.cols)?;
            if let Some(desc) = &garden.description {
                writeln!(f, "- **Description**: {desc}")?;
            }
            writeln!(f, "- **Created**: {}", LocalDateTime(&garden.created_at))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The plant catalog.
pub struct Plants(pub Vec<Plant>);

impl Plants {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Plants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plants found.");
        }
        for plant in &self.0 {
            write!(f, "{plant}")?;
        }
        Ok(())
    }
}

/// A garden's journal, newest first.
pub struct Notes(pub Vec<GardenNote>);

impl fmt::Display for Notes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No notes found.");
        }
        for note in &self.0 {
            write!(f, "{note}")?;
        }
        Ok(())
    }
}

/// Plantings of one garden with their harvest status as of `today`.
pub struct PlantingList {
    pub plantings: Vec<ScheduledPlanting>,
    pub today: Date,
}

impl fmt::Display for PlantingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.plantings.is_empty() {
            return writeln!(f, "No plantings found.");
        }
        for planting in &self.plantings {
            let record = &planting.record;
            write!(
                f,
                "- {} **{}** (ID: {}): {}",
                record.position,
                planting.plant_name,
                record.id,
                record.harvest_status(self.today)
            )?;
            match (record.actual_harvest_date, record.expected_harvest_date) {
                (Some(harvested), _) => write!(f, ", harvested {harvested}")?,
                (None, Some(expected)) => write!(f, ", harvest {expected}")?,
                (None, None) => {}
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A garden with its grid map and plantings.
pub struct GardenView {
    pub garden: Garden,
    pub plantings: PlantingList,
}

impl GardenView {
    pub fn new(snapshot: GardenSnapshot, today: Date) -> Self {
        Self {
            garden: snapshot.garden,
            plantings: PlantingList {
                plantings: snapshot.plantings,
                today,
            },
        }
    }

    fn fmt_grid(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: HashMap<Position, &str> = self
            .plantings
            .plantings
            .iter()
            .map(|p| (p.record.position, p.plant_name.as_str()))
            .collect();

        write!(f, "|   |")?;
        for col in 0..self.garden.cols {
            write!(f, " {col} |")?;
        }
        writeln!(f)?;
        write!(f, "|:-:|")?;
        for _ in 0..self.garden.cols {
            write!(f, ":-:|")?;
        }
        writeln!(f)?;
        for row in 0..self.garden.rows {
            write!(f, "| {row} |")?;
            for col in 0..self.garden.cols {
                let name = cells.get(&Position::new(row, col)).copied().unwrap_or("·");
                write!(f, " {name} |")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for GardenView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.garden)?;
        writeln!(f)?;
        writeln!(f, "## Grid")?;
        writeln!(f)?;
        self.fmt_grid(f)?;
        writeln!(f)?;
        writeln!(f, "## Plantings")?;
        writeln!(f)?;
        write!(f, "{}", self.plantings)
    }
}
