use garden_core::{
    params::{CreateGarden, CreatePlant, PlacePlant, PlantTiming, PlantingDates},
    GardenPlanner, GardenPlannerBuilder,
};
use jiff::civil::Date;
use tempfile::TempDir;

/// Helper function to create a test planner pinned to `today`
pub async fn create_test_planner(today: Date) -> (TempDir, GardenPlanner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = GardenPlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_today(Some(today))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

pub async fn create_garden(planner: &GardenPlanner, owner: &str, name: &str) -> u64 {
    planner
        .create_garden(&CreateGarden {
            owner: owner.to_string(),
            name: name.to_string(),
            description: None,
            rows: 4,
            cols: 4,
        })
        .await
        .expect("Failed to create garden")
        .id
}

pub async fn add_plant(planner: &GardenPlanner, name: &str, timing: PlantTiming) -> u64 {
    planner
        .add_plant(&CreatePlant {
            name: name.to_string(),
            latin_name: None,
            timing,
        })
        .await
        .expect("Failed to add plant")
        .id
}

pub async fn place(
    planner: &GardenPlanner,
    garden_id: u64,
    plant: &str,
    (row, col): (u32, u32),
    dates: PlantingDates,
) -> u64 {
    planner
        .place_plant(&PlacePlant {
            garden_id,
            plant: plant.to_string(),
            row,
            col,
            dates,
        })
        .await
        .expect("Failed to place plant")
        .0
        .id
}
