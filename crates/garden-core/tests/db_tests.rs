use garden_core::{
    models::{PlantTimingProfile, PlantingField, Position, StartMethod, UpdatePlantingRequest},
    Database, GardenError,
};
use jiff::civil::date;
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn pepper() -> PlantTimingProfile {
    PlantTimingProfile {
        days_to_harvest_from_transplant: Some(80),
        days_to_germination: Some(10),
        days_from_germination_to_transplant_ready: Some(50),
        ..Default::default()
    }
}

#[test]
fn test_records_survive_reopen() {
    let (temp_file, mut db) = create_test_db();
    let garden = db
        .create_garden("alice", "Back Yard", Some("south facing"), 3, 5)
        .unwrap();
    let plant = db.add_plant("Pepper", None, Some(&pepper())).unwrap();
    let request = UpdatePlantingRequest {
        start_method: Some(StartMethod::Container),
        seed_started_date: Some(date(2025, 2, 20)),
        planned_planting_date: Some(date(2025, 5, 15)),
        ..Default::default()
    };
    let (record, _) = db
        .place_plant(garden.id, plant.id, Position::new(2, 4), &request)
        .unwrap();
    drop(db);

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    let stored = db.get_planting(record.id).unwrap().expect("Planting should exist");
    assert_eq!(stored.start_method, Some(StartMethod::Container));
    assert_eq!(stored.seed_started_date, Some(date(2025, 2, 20)));
    assert_eq!(stored.planned_planting_date, Some(date(2025, 5, 15)));
    assert_eq!(stored.planted_date, None);
    assert_eq!(stored.position, Position::new(2, 4));

    let garden = db.get_garden(garden.id).unwrap().unwrap();
    assert_eq!(garden.description.as_deref(), Some("south facing"));
}

#[test]
fn test_expected_harvest_written_when_planted() {
    let (_temp_file, mut db) = create_test_db();
    let garden = db.create_garden("alice", "Back Yard", None, 2, 2).unwrap();
    let plant = db.add_plant("Pepper", None, Some(&pepper())).unwrap();
    let (record, _) = db
        .place_plant(garden.id, plant.id, Position::new(0, 0), &Default::default())
        .unwrap();
    assert_eq!(record.expected_harvest_date, None);

    let planted = UpdatePlantingRequest {
        planted_date: Some(date(2025, 5, 20)),
        ..Default::default()
    };
    db.update_planting(record.id, &planted).unwrap();

    // 2025-05-20 + 80 days
    let stored = db.get_planting(record.id).unwrap().unwrap();
    assert_eq!(stored.expected_harvest_date, Some(date(2025, 8, 8)));

    // Saving again with nothing new leaves the stored value alone
    let (again, changes) = db
        .update_planting(record.id, &UpdatePlantingRequest::default())
        .unwrap();
    assert_eq!(again.expected_harvest_date, Some(date(2025, 8, 8)));
    assert!(changes.is_empty());
}

#[test]
fn test_clear_and_set_in_one_request() {
    let (_temp_file, mut db) = create_test_db();
    let garden = db.create_garden("alice", "Back Yard", None, 2, 2).unwrap();
    let plant = db.add_plant("Pepper", None, None).unwrap();
    let initial = UpdatePlantingRequest {
        planted_date: Some(date(2025, 5, 20)),
        ..Default::default()
    };
    let (record, _) = db
        .place_plant(garden.id, plant.id, Position::new(1, 1), &initial)
        .unwrap();

    let request = UpdatePlantingRequest {
        planted_date: Some(date(2025, 5, 22)),
        clear: vec![PlantingField::Planted],
        ..Default::default()
    };
    let (updated, changes) = db.update_planting(record.id, &request).unwrap();
    assert_eq!(updated.planted_date, Some(date(2025, 5, 22)));
    assert_eq!(
        changes,
        vec!["Cleared planted", "Set planted date to 2025-05-22"]
    );
}

#[test]
fn test_update_missing_planting() {
    let (_temp_file, mut db) = create_test_db();
    let err = db
        .update_planting(404, &UpdatePlantingRequest::default())
        .unwrap_err();
    assert!(matches!(err, GardenError::PlantingNotFound { id: 404 }));
}

#[test]
fn test_snapshot_reads_current_timing() {
    let (_temp_file, mut db) = create_test_db();
    let garden = db.create_garden("alice", "Back Yard", None, 2, 2).unwrap();
    let plant = db.add_plant("Pepper", None, None).unwrap();
    db.place_plant(garden.id, plant.id, Position::new(0, 1), &Default::default())
        .unwrap();

    let snapshot = db.garden_snapshot(garden.id).unwrap().unwrap();
    assert_eq!(snapshot.plantings[0].timing, None);

    db.set_plant_timing(plant.id, Some(&pepper())).unwrap();
    let snapshot = db.garden_snapshot(garden.id).unwrap().unwrap();
    assert_eq!(snapshot.plantings[0].timing, Some(pepper()));
    assert_eq!(snapshot.plantings[0].plant_name, "Pepper");
}
