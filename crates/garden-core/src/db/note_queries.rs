//! Garden journal operations.

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, OptionalExtension};

use super::{
    plant_queries::ensure_plant_exists,
    planting_queries::{ensure_in_grid, load_garden},
    utils::{note_from_row, NOTE_COLUMNS},
};
use crate::{
    error::{DatabaseResultExt, GardenError, Result},
    models::{GardenNote, Position},
};

const INSERT_NOTE_SQL: &str = "INSERT INTO garden_notes (garden_id, plant_id, title, note_text, row_index, col_index, note_date, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const DELETE_NOTE_SQL: &str = "DELETE FROM garden_notes WHERE id = ?1";

fn select_notes_sql(filter: &str) -> String {
    format!(
        "SELECT {NOTE_COLUMNS} FROM garden_notes n LEFT JOIN plants pl ON pl.id = n.plant_id {filter}"
    )
}

/// A note as entered, before it is stored.
#[derive(Debug, Clone, Copy)]
pub struct NewNote<'a> {
    pub plant_id: Option<u64>,
    pub title: Option<&'a str>,
    pub text: &'a str,
    pub position: Option<Position>,
    pub note_date: Date,
}

impl super::Database {
    /// Adds a note to a garden's journal.
    ///
    /// A referenced cell must lie inside the grid; a referenced plant must
    /// exist but need not be planted in the garden.
    pub fn add_note(&mut self, garden_id: u64, note: &NewNote<'_>) -> Result<GardenNote> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let garden = load_garden(&tx, garden_id)?;
        if let Some(position) = note.position {
            ensure_in_grid(&garden, position)?;
        }
        if let Some(plant_id) = note.plant_id {
            ensure_plant_exists(&tx, plant_id)?;
        }

        let now = Timestamp::now().to_string();
        tx.execute(
            INSERT_NOTE_SQL,
            params![
                garden_id as i64,
                note.plant_id.map(|id| id as i64),
                note.title,
                note.text,
                note.position.map(|p| p.row),
                note.position.map(|p| p.col),
                note.note_date.to_string(),
                &now,
                &now,
            ],
        )
        .db_context("Failed to insert note")?;
        let id = tx.last_insert_rowid() as u64;
        tx.commit().db_context("Failed to commit transaction")?;

        self.get_note(id)?.ok_or(GardenError::NoteNotFound { id })
    }

    pub fn get_note(&self, id: u64) -> Result<Option<GardenNote>> {
        self.connection
            .query_row(
                &select_notes_sql("WHERE n.id = ?1"),
                params![id as i64],
                note_from_row,
            )
            .optional()
            .db_context("Failed to load note")
    }

    /// A garden's notes, newest first.
    pub fn list_notes(&self, garden_id: u64) -> Result<Vec<GardenNote>> {
        if self.get_garden(garden_id)?.is_none() {
            return Err(GardenError::GardenNotFound { id: garden_id });
        }
        let sql = select_notes_sql(
            "WHERE n.garden_id = ?1 ORDER BY n.note_date DESC, n.created_at DESC, n.id DESC",
        );
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare note query")?;
        let notes = stmt
            .query_map(params![garden_id as i64], note_from_row)
            .db_context("Failed to query notes")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read note rows")?;
        Ok(notes)
    }

    /// Deletes a note, returning it.
    pub fn delete_note(&mut self, id: u64) -> Result<GardenNote> {
        let note = self.get_note(id)?.ok_or(GardenError::NoteNotFound { id })?;
        self.connection
            .execute(DELETE_NOTE_SQL, params![id as i64])
            .db_context("Failed to delete note")?;
        Ok(note)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::NewNote;
    use crate::{db::Database, error::GardenError, models::Position};

    fn note(text: &str, note_date: jiff::civil::Date) -> NewNote<'_> {
        NewNote {
            plant_id: None,
            title: None,
            text,
            position: None,
            note_date,
        }
    }

    #[test]
    fn test_notes_newest_first() {
        let mut db = Database::in_memory().unwrap();
        let garden = db.create_garden("alice", "Back Yard", None, 3, 3).unwrap();
        let kale = db.add_plant("Kale", None, None).unwrap();

        db.add_note(garden.id, &note("Turned the compost", date(2025, 4, 2)))
            .unwrap();
        let aphids = db
            .add_note(
                garden.id,
                &NewNote {
                    plant_id: Some(kale.id),
                    title: Some("Aphids"),
                    position: Some(Position::new(1, 2)),
                    ..note("Sprayed with soapy water", date(2025, 4, 9))
                },
            )
            .unwrap();
        assert_eq!(aphids.plant_name.as_deref(), Some("Kale"));
        assert_eq!(aphids.position, Some(Position::new(1, 2)));

        let texts: Vec<String> = db
            .list_notes(garden.id)
            .unwrap()
            .into_iter()
            .map(|n| n.text)
            .collect();
        assert_eq!(texts, vec!["Sprayed with soapy water", "Turned the compost"]);
    }

    #[test]
    fn test_note_cell_must_be_in_grid() {
        let mut db = Database::in_memory().unwrap();
        let garden = db.create_garden("alice", "Balcony", None, 1, 2).unwrap();
        let err = db
            .add_note(
                garden.id,
                &NewNote {
                    position: Some(Position::new(1, 0)),
                    ..note("Too far", date(2025, 4, 2))
                },
            )
            .unwrap_err();
        assert!(matches!(err, GardenError::InvalidInput { ref field, .. } if field == "position"));

        let err = db
            .add_note(
                garden.id,
                &NewNote {
                    plant_id: Some(9),
                    ..note("Unknown plant", date(2025, 4, 2))
                },
            )
            .unwrap_err();
        assert!(matches!(err, GardenError::PlantNotFound { id: 9 }));
    }

    #[test]
    fn test_delete_note_and_garden_cascade() {
        let mut db = Database::in_memory().unwrap();
        let garden = db.create_garden("alice", "Back Yard", None, 2, 2).unwrap();
        let first = db
            .add_note(garden.id, &note("Mulched", date(2025, 4, 2)))
            .unwrap();
        let second = db
            .add_note(garden.id, &note("Watered", date(2025, 4, 3)))
            .unwrap();

        assert_eq!(db.delete_note(first.id).unwrap().text, "Mulched");
        assert!(matches!(
            db.delete_note(first.id).unwrap_err(),
            GardenError::NoteNotFound { .. }
        ));

        db.delete_garden(garden.id).unwrap();
        assert!(db.get_note(second.id).unwrap().is_none());
        assert!(matches!(
            db.list_notes(garden.id).unwrap_err(),
            GardenError::GardenNotFound { .. }
        ));
    }
}
