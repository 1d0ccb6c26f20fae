//! Tests for the planner module.

use jiff::civil::date;
use tempfile::TempDir;

use super::*;
use crate::{
    error::GardenError,
    models::{MilestoneKind, Timing},
    params::{
        Cell, CompanionParams, CreateGarden, CreateNote, CreatePlant, DigestParams, HarvestQuery,
        Id, ListGardens, NotificationQuery, PlacePlant, PlantRef, PlantTiming, PlantingDates,
        UpdatePlanting, WindowParams,
    },
};

async fn create_test_planner() -> (TempDir, GardenPlanner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = GardenPlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_today(Some(date(2025, 4, 11)))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

async fn create_garden(planner: &GardenPlanner, owner: &str, name: &str) -> u64 {
    planner
        .create_garden(&CreateGarden {
            owner: owner.to_string(),
            name: name.to_string(),
            description: None,
            rows: 3,
            cols: 3,
        })
        .await
        .expect("Failed to create garden")
        .id
}

async fn add_tomato(planner: &GardenPlanner) {
    planner
        .add_plant(&CreatePlant {
            name: "Tomato".to_string(),
            latin_name: Some("Solanum lycopersicum".to_string()),
            timing: PlantTiming {
                days_to_harvest_from_transplant: Some(70),
                days_to_germination: Some(7),
                days_to_transplant_ready: Some(35),
                ..Default::default()
            },
        })
        .await
        .expect("Failed to add plant");
}

fn place(garden_id: u64, row: u32, col: u32, dates: PlantingDates) -> PlacePlant {
    PlacePlant {
        garden_id,
        plant: "tomato".to_string(),
        row,
        col,
        dates,
    }
}

fn owner_query(owner: &str) -> NotificationQuery {
    NotificationQuery {
        owner: owner.to_string(),
        window: WindowParams::default(),
    }
}

#[tokio::test]
async fn test_builder_pins_today() {
    let (_dir, planner) = create_test_planner().await;
    assert_eq!(planner.today(), date(2025, 4, 11));
}

#[tokio::test]
async fn test_gardens_by_owner() {
    let (_dir, planner) = create_test_planner().await;
    create_garden(&planner, "bob", "Allotment").await;
    let back = create_garden(&planner, "alice", "Back Yard").await;

    let alice = planner
        .list_gardens(&ListGardens {
            owner: Some("alice".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(alice.len(), 1);
    assert_eq!(alice[0].id, back);
    assert_eq!(planner.list_owners().await.unwrap(), vec!["alice", "bob"]);

    let deleted = planner.delete_garden(&Id { id: back }).await.unwrap();
    assert_eq!(deleted.name, "Back Yard");
    assert!(planner.get_garden(&Id { id: back }).await.unwrap().is_none());
}

#[tokio::test]
async fn test_tomato_transplant_window() {
    let (_dir, planner) = create_test_planner().await;
    let garden = create_garden(&planner, "alice", "Back Yard").await;
    add_tomato(&planner).await;
    planner
        .place_plant(&place(
            garden,
            0,
            0,
            PlantingDates {
                start_method: Some("container".to_string()),
                seed_started: Some("2025-03-01".to_string()),
                ..Default::default()
            },
        ))
        .await
        .unwrap();

    let query = owner_query("alice");
    let set = planner
        .notifications_for_owner(&query, date(2025, 4, 11))
        .await
        .unwrap();
    assert_eq!(set.total_coming_up, 1);
    let item = &set.gardens[0].coming_up[0];
    assert_eq!(item.kind(), MilestoneKind::Transplant);
    assert_eq!(item.timing, Timing::ComingUp { days_until: 1 });

    let set = planner
        .notifications_for_owner(&query, date(2025, 4, 12))
        .await
        .unwrap();
    assert_eq!(set.total_due_today, 1);

    let set = planner
        .notifications_for_owner(&query, date(2025, 4, 20))
        .await
        .unwrap();
    assert!(!set.has_notifications);
    assert!(set.gardens.is_empty());
}

#[tokio::test]
async fn test_harvested_planting_is_silent() {
    let (_dir, planner) = create_test_planner().await;
    let garden = create_garden(&planner, "alice", "Back Yard").await;
    add_tomato(&planner).await;
    let (record, _) = planner
        .place_plant(&place(
            garden,
            1,
            1,
            PlantingDates {
                planted: Some("2025-05-01".to_string()),
                ..Default::default()
            },
        ))
        .await
        .unwrap();

    let today = date(2025, 7, 10);
    let set = planner
        .notifications_for_owner(&owner_query("alice"), today)
        .await
        .unwrap();
    assert_eq!(set.total_due_today, 1);

    planner
        .update_planting(&UpdatePlanting {
            id: record.id,
            dates: PlantingDates {
                harvested: Some("2025-07-10".to_string()),
                ..Default::default()
            },
            clear: vec![],
        })
        .await
        .unwrap();
    let set = planner
        .notifications_for_owner(&owner_query("alice"), today)
        .await
        .unwrap();
    assert!(!set.has_notifications);
}

#[tokio::test]
async fn test_harvest_view() {
    let (_dir, planner) = create_test_planner().await;
    let garden = create_garden(&planner, "alice", "Back Yard").await;
    add_tomato(&planner).await;
    for (col, planted) in [(0, "2025-05-01"), (1, "2025-05-04"), (2, "2025-04-28")] {
        planner
            .place_plant(&place(
                garden,
                0,
                col,
                PlantingDates {
                    planted: Some(planted.to_string()),
                    ..Default::default()
                },
            ))
            .await
            .unwrap();
    }

    let query = HarvestQuery {
        garden_id: garden,
        window: WindowParams::default(),
    };
    let harvests = planner
        .harvest_notifications(&query, date(2025, 7, 10))
        .await
        .unwrap();
    assert_eq!(harvests.harvest_ready.len(), 1);
    assert_eq!(harvests.harvest_soon.len(), 1);
    assert_eq!(harvests.harvest_overdue.len(), 1);
    assert!(harvests.planting_ready.is_empty());

    let missing = HarvestQuery {
        garden_id: 99,
        window: WindowParams::default(),
    };
    let err = planner
        .harvest_notifications(&missing, date(2025, 7, 10))
        .await
        .unwrap_err();
    assert!(matches!(err, GardenError::GardenNotFound { id: 99 }));
}

#[tokio::test]
async fn test_weekly_digest_covers_every_owner() {
    let (_dir, planner) = create_test_planner().await;
    let garden = create_garden(&planner, "bob", "Allotment").await;
    create_garden(&planner, "alice", "Balcony").await;
    add_tomato(&planner).await;
    planner
        .place_plant(&place(
            garden,
            2,
            2,
            PlantingDates {
                planned_planting: Some("2025-04-08".to_string()),
                ..Default::default()
            },
        ))
        .await
        .unwrap();

    let digests = planner
        .weekly_digest(&DigestParams::default(), date(2025, 4, 11))
        .await
        .unwrap();
    let owners: Vec<&str> = digests.iter().map(|d| d.owner.as_str()).collect();
    assert_eq!(owners, vec!["alice", "bob"]);
    assert!(!digests[0].notifications.has_notifications);
    assert_eq!(digests[1].notifications.total_overdue, 1);
    assert_eq!(
        digests[1].notifications.gardens[0].overdue[0].timing,
        Timing::Overdue { days_overdue: 3 }
    );
}

#[tokio::test]
async fn test_weekly_digest_for_owner_without_gardens() {
    let (_dir, planner) = create_test_planner().await;
    let digests = planner
        .weekly_digest(
            &DigestParams {
                owner: Some("carol".to_string()),
                ..Default::default()
            },
            date(2025, 4, 11),
        )
        .await
        .unwrap();
    assert_eq!(digests.len(), 1);
    assert!(!digests[0].notifications.has_notifications);
}

#[tokio::test]
async fn test_clearing_expected_harvest_recomputes() {
    let (_dir, planner) = create_test_planner().await;
    let garden = create_garden(&planner, "alice", "Back Yard").await;
    add_tomato(&planner).await;
    let (record, _) = planner
        .place_plant(&place(
            garden,
            0,
            0,
            PlantingDates {
                planted: Some("2025-05-01".to_string()),
                expected_harvest: Some("2025-08-01".to_string()),
                ..Default::default()
            },
        ))
        .await
        .unwrap();
    assert_eq!(record.expected_harvest_date, Some(date(2025, 8, 1)));

    let (record, changes) = planner
        .update_planting(&UpdatePlanting {
            id: record.id,
            dates: PlantingDates::default(),
            clear: vec!["expected_harvest".to_string()],
        })
        .await
        .unwrap();
    assert_eq!(record.expected_harvest_date, Some(date(2025, 7, 10)));
    assert_eq!(changes[0], "Cleared expected harvest");
}

#[tokio::test]
async fn test_clear_cell_and_missing_planting() {
    let (_dir, planner) = create_test_planner().await;
    let garden = create_garden(&planner, "alice", "Back Yard").await;
    add_tomato(&planner).await;
    let (record, _) = planner
        .place_plant(&place(garden, 2, 1, PlantingDates::default()))
        .await
        .unwrap();

    let removed = planner
        .clear_cell(&Cell {
            garden_id: garden,
            row: 2,
            col: 1,
        })
        .await
        .unwrap();
    assert_eq!(removed.id, record.id);

    let err = planner.get_planting(&Id { id: record.id }).await.unwrap_err();
    assert!(matches!(err, GardenError::PlantingNotFound { .. }));
}

#[tokio::test]
async fn test_place_unknown_plant_name() {
    let (_dir, planner) = create_test_planner().await;
    let garden = create_garden(&planner, "alice", "Back Yard").await;
    let mut params = place(garden, 0, 0, PlantingDates::default());
    params.plant = "Kohlrabi".to_string();
    let err = planner.place_plant(&params).await.unwrap_err();
    assert!(matches!(err, GardenError::InvalidInput { ref field, .. } if field == "plant"));
}

#[tokio::test]
async fn test_show_garden_handler() {
    let (_dir, planner) = create_test_planner().await;
    let garden = create_garden(&planner, "alice", "Back Yard").await;
    add_tomato(&planner).await;
    planner
        .place_plant(&place(garden, 1, 2, PlantingDates::default()))
        .await
        .unwrap();

    let view = planner
        .show_garden(&Id { id: garden }, date(2025, 4, 11))
        .await
        .unwrap();
    let output = view.to_string();
    assert!(output.contains("# 1. Back Yard"));
    assert!(output.contains("| 1 | · | · | Tomato |"));
}

#[tokio::test]
async fn test_companions_by_name() {
    let (_dir, planner) = create_test_planner().await;
    add_tomato(&planner).await;
    planner
        .add_plant(&CreatePlant {
            name: "Basil".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let companions = CompanionParams {
        plant: "tomato".to_string(),
        companion: "BASIL".to_string(),
        mutual: false,
    };
    let result = planner.add_companion_result(&companions).await.unwrap();
    assert_eq!(result.changes, vec!["Tomato now lists Basil as a companion"]);
    assert_eq!(result.resource.companions.len(), 1);

    // Listing again changes nothing
    let (_, changes) = planner.add_companion(&companions).await.unwrap();
    assert_eq!(changes, vec!["Tomato already lists Basil as a companion"]);

    let basil = planner
        .list_companions(&PlantRef {
            plant: "Basil".to_string(),
        })
        .await
        .unwrap();
    assert!(basil.companions.is_empty());

    planner.remove_companion(&companions).await.unwrap();
    let err = planner.remove_companion(&companions).await.unwrap_err();
    assert!(matches!(err, GardenError::InvalidInput { ref field, .. } if field == "companion"));
}

#[tokio::test]
async fn test_note_dated_by_planner_clock() {
    let (_dir, planner) = create_test_planner().await;
    let garden = create_garden(&planner, "alice", "Back Yard").await;
    add_tomato(&planner).await;

    let note = planner
        .add_note(&CreateNote {
            garden_id: garden,
            text: "  First true leaves  ".to_string(),
            title: Some("   ".to_string()),
            plant: Some("tomato".to_string()),
            row: Some(2),
            col: Some(2),
        })
        .await
        .unwrap();
    assert_eq!(note.note_date, date(2025, 4, 11));
    assert_eq!(note.text, "First true leaves");
    assert_eq!(note.title, None);
    assert_eq!(note.plant_name.as_deref(), Some("Tomato"));

    let notes = planner.notes_display(&Id { id: garden }).await.unwrap();
    assert!(notes.to_string().starts_with("### 2025-04-11 (ID: 1)"));

    planner.delete_note(&Id { id: note.id }).await.unwrap();
    let err = planner.delete_note(&Id { id: note.id }).await.unwrap_err();
    assert!(matches!(err, GardenError::NoteNotFound { id } if id == note.id));
}
