//! Display implementations for domain models.
//!
//! Everything renders as markdown for the terminal renderer.

use std::fmt;

use super::datetime::{Days, LocalDateTime};
use crate::models::{
    Garden, GardenNote, HarvestStatus, Plant, PlantCompanions, PlantTimingProfile,
    PlantingRecord, Position, StartMethod,
};

impl fmt::Display for StartMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for HarvestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.with_icon())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Garden {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Owner: {}", self.owner)?;
        writeln!(f, "- Grid: {} x {}", self.rows, self.cols)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }
        Ok(())
    }
}

impl fmt::Display for PlantTimingProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_direct_sow {
            writeln!(f, "- **Sowing**: direct in ground")?;
        }
        if let Some(days) = self.days_to_germination {
            writeln!(f, "- **Germination**: {}", Days(days))?;
        }
        if let Some(days) = self.days_from_germination_to_transplant_ready {
            writeln!(f, "- **Germination to transplant**: {}", Days(days))?;
        }
        if let Some(days) = self.days_to_harvest_from_transplant {
            writeln!(f, "- **Harvest after transplant**: {}", Days(days))?;
        }
        if let Some(days) = self.days_to_harvest_direct {
            writeln!(f, "- **Harvest after direct sowing**: {}", Days(days))?;
        }
        Ok(())
    }
}

impl fmt::Display for Plant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        if let Some(latin) = &self.latin_name {
            writeln!(f, "*{latin}*")?;
            writeln!(f)?;
        }
        match &self.timing {
            Some(timing) => write!(f, "{timing}")?,
            None => writeln!(f, "- No timing profile")?,
        }
        writeln!(f)
    }
}

impl fmt::Display for PlantingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### Planting {} at {}", self.id, self.position)?;
        writeln!(f)?;
        writeln!(f, "- **Garden**: {}", self.garden_id)?;
        writeln!(f, "- **Plant**: {}", self.plant_id)?;
        if let Some(method) = self.start_method {
            writeln!(f, "- **Start method**: {method}")?;
        }

        let dates = [
            ("Planned seed start", self.planned_seed_start_date),
            ("Planned planting", self.planned_planting_date),
            ("Seed started", self.seed_started_date),
            ("Planted", self.planted_date),
            ("Expected harvest", self.expected_harvest_date),
            ("Harvested", self.actual_harvest_date),
        ];
        for (label, date) in dates {
            if let Some(date) = date {
                writeln!(f, "- **{label}**: {date}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for PlantCompanions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## Companions of {} (ID: {})",
            self.plant.name, self.plant.id
        )?;
        writeln!(f)?;
        if self.companions.is_empty() {
            return writeln!(f, "- None listed");
        }
        for companion in &self.companions {
            writeln!(f, "- {} (ID: {})", companion.name, companion.id)?;
        }
        Ok(())
    }
}

impl fmt::Display for GardenNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.title {
            Some(title) => writeln!(f, "### {}: {title} (ID: {})", self.note_date, self.id)?,
            None => writeln!(f, "### {} (ID: {})", self.note_date, self.id)?,
        }
        writeln!(f)?;
        if let Some(plant) = &self.plant_name {
            writeln!(f, "- **Plant**: {plant}")?;
        }
        if let Some(position) = self.position {
            writeln!(f, "- **Cell**: {position}")?;
        }
        if self.plant_name.is_some() || self.position.is_some() {
            writeln!(f)?;
        }
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_planting_lists_only_set_dates() {
        let mut record = PlantingRecord::new(2, 3, Position::new(1, 4));
        record.id = 9;
        record.start_method = Some(StartMethod::Container);
        record.seed_started_date = Some(date(2025, 3, 1));

        let output = record.to_string();
        assert!(output.contains("### Planting 9 at (1, 4)"));
        assert!(output.contains("- **Start method**: container"));
        assert!(output.contains("- **Seed started**: 2025-03-01"));
        assert!(!output.contains("Planted"));
    }

    #[test]
    fn test_plant_without_timing() {
        let plant = Plant {
            id: 1,
            name: "Basil".to_string(),
            latin_name: Some("Ocimum basilicum".to_string()),
            timing: None,
        };
        let output = plant.to_string();
        assert!(output.contains("## Basil (ID: 1)"));
        assert!(output.contains("*Ocimum basilicum*"));
        assert!(output.contains("No timing profile"));
    }

    #[test]
    fn test_timing_profile_lines() {
        let timing = PlantTimingProfile {
            days_to_harvest_direct: Some(1),
            is_direct_sow: true,
            ..Default::default()
        };
        assert_eq!(
            timing.to_string(),
            "- **Sowing**: direct in ground\n- **Harvest after direct sowing**: 1 day\n"
        );
    }

    #[test]
    fn test_companions_list() {
        let plant = |id: u64, name: &str| Plant {
            id,
            name: name.to_string(),
            latin_name: None,
            timing: None,
        };
        let companions = PlantCompanions {
            plant: plant(1, "Tomato"),
            companions: vec![plant(2, "Basil"), plant(3, "Marigold")],
        };
        assert_eq!(
            companions.to_string(),
            "## Companions of Tomato (ID: 1)\n\n- Basil (ID: 2)\n- Marigold (ID: 3)\n"
        );

        let lonely = PlantCompanions {
            plant: plant(4, "Sage"),
            companions: Vec::new(),
        };
        assert!(lonely.to_string().ends_with("- None listed\n"));
    }

    #[test]
    fn test_note_heading_and_context() {
        let note = GardenNote {
            id: 3,
            garden_id: 1,
            plant_id: Some(2),
            plant_name: Some("Kale".to_string()),
            title: Some("Aphids".to_string()),
            text: "Sprayed with soapy water".to_string(),
            position: Some(Position::new(1, 2)),
            note_date: date(2025, 4, 9),
            created_at: jiff::Timestamp::UNIX_EPOCH,
            updated_at: jiff::Timestamp::UNIX_EPOCH,
        };
        let output = note.to_string();
        assert!(output.starts_with("### 2025-04-09: Aphids (ID: 3)\n"));
        assert!(output.contains("- **Plant**: Kale\n- **Cell**: (1, 2)\n\nSprayed with soapy water\n"));
    }
}
