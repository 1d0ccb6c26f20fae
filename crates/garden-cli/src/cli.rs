//! Command-line argument wrappers.
//!
//! Each wrapper carries the clap attributes for one command and converts into
//! the matching core parameter struct with `From`, so parsing and help text
//! stay here while validation stays in the core.

use clap::{Args, Subcommand, ValueEnum};
use garden_core::params::*;

/// How a planting was or will be started
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StartMethodArg {
    /// Seeds started in a container and transplanted later
    Container,
    /// Seeds sown directly in the ground
    Direct,
}

impl std::fmt::Display for StartMethodArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartMethodArg::Container => write!(f, "container"),
            StartMethodArg::Direct => write!(f, "direct"),
        }
    }
}

/// Lookback and lookahead overrides shared by the notification commands
#[derive(Args, Clone, Copy)]
pub struct WindowArgs {
    /// Report overdue tasks up to this many days old (default 7)
    #[arg(long, value_name = "DAYS")]
    pub lookback_days: Option<u32>,
    /// Report tasks due up to this many days ahead (default 7)
    #[arg(long, value_name = "DAYS")]
    pub lookahead_days: Option<u32>,
}

impl From<WindowArgs> for WindowParams {
    fn from(val: WindowArgs) -> Self {
        WindowParams {
            lookback_days: val.lookback_days,
            lookahead_days: val.lookahead_days,
        }
    }
}

// ============================================================================
// Gardens
// ============================================================================

/// Create a new garden
#[derive(Args)]
pub struct CreateGardenArgs {
    /// Name of the garden
    pub name: String,
    /// Username of the gardener who owns it
    #[arg(short, long)]
    pub owner: String,
    /// Number of grid rows
    #[arg(short, long, default_value_t = 4)]
    pub rows: u32,
    /// Number of grid columns
    #[arg(short, long, default_value_t = 4)]
    pub cols: u32,
    /// Optional description of the garden
    #[arg(short, long)]
    pub description: Option<String>,
}

impl From<CreateGardenArgs> for CreateGarden {
    fn from(val: CreateGardenArgs) -> Self {
        CreateGarden {
            owner: val.owner,
            name: val.name,
            description: val.description,
            rows: val.rows,
            cols: val.cols,
        }
    }
}

/// List gardens
#[derive(Args)]
pub struct ListGardensArgs {
    /// Only list gardens belonging to this owner
    #[arg(short, long)]
    pub owner: Option<String>,
}

impl From<ListGardensArgs> for ListGardens {
    fn from(val: ListGardensArgs) -> Self {
        ListGardens { owner: val.owner }
    }
}

/// Identify a garden by ID
#[derive(Args)]
pub struct GardenIdArgs {
    /// ID of the garden
    pub id: u64,
}

impl From<GardenIdArgs> for Id {
    fn from(val: GardenIdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum GardenCommands {
    /// Create a new garden
    #[command(alias = "c")]
    Create(CreateGardenArgs),
    /// List gardens
    #[command(aliases = ["l", "ls"])]
    List(ListGardensArgs),
    /// Show a garden with its grid and plantings
    #[command(alias = "s")]
    Show(GardenIdArgs),
    /// Delete a garden and all its plantings
    #[command(aliases = ["d", "rm"])]
    Delete(GardenIdArgs),
}

// ============================================================================
// Plants
// ============================================================================

/// Timing values for a plant
#[derive(Args)]
pub struct TimingArgs {
    /// Days from transplanting to harvest
    #[arg(long, value_name = "DAYS")]
    pub harvest_after_transplant: Option<u32>,
    /// Days from direct sowing to harvest
    #[arg(long, value_name = "DAYS")]
    pub harvest_after_direct: Option<u32>,
    /// The plant is normally sown directly in the ground
    #[arg(long)]
    pub direct_sow: bool,
    /// Days from seed start to germination
    #[arg(long, value_name = "DAYS")]
    pub germination: Option<u32>,
    /// Days from germination until seedlings are ready to transplant
    #[arg(long, value_name = "DAYS")]
    pub transplant_ready: Option<u32>,
}

impl From<TimingArgs> for PlantTiming {
    fn from(val: TimingArgs) -> Self {
        PlantTiming {
            days_to_harvest_from_transplant: val.harvest_after_transplant,
            days_to_harvest_direct: val.harvest_after_direct,
            direct_sow: val.direct_sow,
            days_to_germination: val.germination,
            days_to_transplant_ready: val.transplant_ready,
        }
    }
}

/// Add a plant to the catalog
#[derive(Args)]
pub struct AddPlantArgs {
    /// Common name, unique ignoring case
    pub name: String,
    /// Botanical name
    #[arg(short, long)]
    pub latin_name: Option<String>,
    #[command(flatten)]
    pub timing: TimingArgs,
}

impl From<AddPlantArgs> for CreatePlant {
    fn from(val: AddPlantArgs) -> Self {
        CreatePlant {
            name: val.name,
            latin_name: val.latin_name,
            timing: val.timing.into(),
        }
    }
}

/// Identify a plant by ID
#[derive(Args)]
pub struct PlantIdArgs {
    /// ID of the plant
    pub id: u64,
}

impl From<PlantIdArgs> for Id {
    fn from(val: PlantIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Replace or remove a plant's timing profile
#[derive(Args)]
pub struct SetTimingArgs {
    /// ID of the plant
    pub id: u64,
    #[command(flatten)]
    pub timing: TimingArgs,
    /// Remove the timing profile; plantings of this plant stop raising tasks
    #[arg(long)]
    pub clear: bool,
}

impl From<SetTimingArgs> for SetPlantTiming {
    fn from(val: SetTimingArgs) -> Self {
        SetPlantTiming {
            id: val.id,
            timing: val.timing.into(),
            clear: val.clear,
        }
    }
}

/// Two plants for a companion listing
#[derive(Args)]
pub struct CompanionArgs {
    /// Plant whose companion list changes (ID or name)
    pub plant: String,
    /// Plant that grows well beside it (ID or name)
    pub companion: String,
    /// Apply the change in both directions
    #[arg(short, long)]
    pub mutual: bool,
}

impl From<CompanionArgs> for CompanionParams {
    fn from(val: CompanionArgs) -> Self {
        CompanionParams {
            plant: val.plant,
            companion: val.companion,
            mutual: val.mutual,
        }
    }
}

/// A plant given by ID or name
#[derive(Args)]
pub struct PlantRefArgs {
    /// ID or name of the plant
    pub plant: String,
}

impl From<PlantRefArgs> for PlantRef {
    fn from(val: PlantRefArgs) -> Self {
        PlantRef { plant: val.plant }
    }
}

#[derive(Subcommand)]
pub enum CompanionCommands {
    /// List a plant as growing well beside another
    #[command(alias = "a")]
    Add(CompanionArgs),
    /// Remove a companion listing
    #[command(aliases = ["r", "rm"])]
    Remove(CompanionArgs),
    /// Show a plant's companions
    #[command(aliases = ["l", "ls"])]
    List(PlantRefArgs),
}

#[derive(Subcommand)]
pub enum PlantCommands {
    /// Add a plant to the catalog
    #[command(alias = "a")]
    Add(AddPlantArgs),
    /// List the plant catalog
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a plant and its timing profile
    #[command(alias = "s")]
    Show(PlantIdArgs),
    /// Replace or remove a plant's timing profile
    #[command(alias = "t")]
    Timing(SetTimingArgs),
    /// Manage which plants grow well together
    #[command(alias = "c")]
    Companion {
        #[command(subcommand)]
        command: CompanionCommands,
    },
}

// ============================================================================
// Plantings
// ============================================================================

/// Dates and start method for a planting
#[derive(Args)]
pub struct DatesArgs {
    /// How the planting is started
    #[arg(long, value_enum)]
    pub start_method: Option<StartMethodArg>,
    /// Date seeds are planned to be started (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub planned_seed_start: Option<String>,
    /// Date the plant is planned to go in the ground (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub planned_planting: Option<String>,
    /// Date seeds were started (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub seed_started: Option<String>,
    /// Date the plant went in the ground (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub planted: Option<String>,
    /// Expected harvest date; derived from the plant's timing when omitted
    #[arg(long, value_name = "DATE")]
    pub expected_harvest: Option<String>,
    /// Date the crop was harvested; closes the planting (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub harvested: Option<String>,
}

impl From<DatesArgs> for PlantingDates {
    fn from(val: DatesArgs) -> Self {
        PlantingDates {
            start_method: val.start_method.map(|m| m.to_string()),
            planned_seed_start: val.planned_seed_start,
            planned_planting: val.planned_planting,
            seed_started: val.seed_started,
            planted: val.planted,
            expected_harvest: val.expected_harvest,
            harvested: val.harvested,
        }
    }
}

/// Place a plant in an empty grid cell
#[derive(Args)]
pub struct PlaceArgs {
    /// ID of the garden
    pub garden_id: u64,
    /// Plant ID or name
    pub plant: String,
    /// Grid row, starting at 0
    #[arg(short, long)]
    pub row: u32,
    /// Grid column, starting at 0
    #[arg(short, long)]
    pub col: u32,
    #[command(flatten)]
    pub dates: DatesArgs,
}

impl From<PlaceArgs> for PlacePlant {
    fn from(val: PlaceArgs) -> Self {
        PlacePlant {
            garden_id: val.garden_id,
            plant: val.plant,
            row: val.row,
            col: val.col,
            dates: val.dates.into(),
        }
    }
}

/// Update a planting's dates or start method
#[derive(Args)]
pub struct UpdatePlantingArgs {
    /// ID of the planting
    pub id: u64,
    #[command(flatten)]
    pub dates: DatesArgs,
    /// Clear a field before setting new values (e.g. expected-harvest)
    #[arg(long, value_name = "FIELD", value_delimiter = ',')]
    pub clear: Vec<String>,
}

impl From<UpdatePlantingArgs> for UpdatePlanting {
    fn from(val: UpdatePlantingArgs) -> Self {
        UpdatePlanting {
            id: val.id,
            dates: val.dates.into(),
            clear: val.clear,
        }
    }
}

/// Identify a grid cell
#[derive(Args)]
pub struct CellArgs {
    /// ID of the garden
    pub garden_id: u64,
    /// Grid row, starting at 0
    #[arg(short, long)]
    pub row: u32,
    /// Grid column, starting at 0
    #[arg(short, long)]
    pub col: u32,
}

impl From<CellArgs> for Cell {
    fn from(val: CellArgs) -> Self {
        Cell {
            garden_id: val.garden_id,
            row: val.row,
            col: val.col,
        }
    }
}

/// Identify a planting by ID
#[derive(Args)]
pub struct PlantingIdArgs {
    /// ID of the planting
    pub id: u64,
}

impl From<PlantingIdArgs> for Id {
    fn from(val: PlantingIdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum PlantingCommands {
    /// Place a plant in an empty grid cell
    #[command(alias = "p")]
    Place(PlaceArgs),
    /// Update a planting's dates or start method
    #[command(alias = "u")]
    Update(UpdatePlantingArgs),
    /// Remove the planting from a grid cell
    #[command(alias = "c")]
    Clear(CellArgs),
    /// List a garden's plantings
    #[command(aliases = ["l", "ls"])]
    List(GardenIdArgs),
    /// Show a planting
    #[command(alias = "s")]
    Show(PlantingIdArgs),
}

// ============================================================================
// Notes
// ============================================================================

/// Add a dated note to a garden's journal
#[derive(Args)]
pub struct AddNoteArgs {
    /// ID of the garden
    pub garden_id: u64,
    /// Note text
    pub text: String,
    /// Short title shown in the heading
    #[arg(short, long)]
    pub title: Option<String>,
    /// Plant the note is about (ID or name)
    #[arg(short, long)]
    pub plant: Option<String>,
    /// Row of the cell the note is about
    #[arg(short, long, requires = "col")]
    pub row: Option<u32>,
    /// Column of the cell the note is about
    #[arg(short, long, requires = "row")]
    pub col: Option<u32>,
}

impl From<AddNoteArgs> for CreateNote {
    fn from(val: AddNoteArgs) -> Self {
        CreateNote {
            garden_id: val.garden_id,
            text: val.text,
            title: val.title,
            plant: val.plant,
            row: val.row,
            col: val.col,
        }
    }
}

#[derive(Args)]
pub struct NoteIdArgs {
    /// ID of the note
    pub id: u64,
}

impl From<NoteIdArgs> for Id {
    fn from(val: NoteIdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum NoteCommands {
    /// Add a note dated today
    #[command(alias = "a")]
    Add(AddNoteArgs),
    /// List a garden's notes, newest first
    #[command(aliases = ["l", "ls"])]
    List(GardenIdArgs),
    /// Delete a note
    #[command(aliases = ["d", "rm"])]
    Delete(NoteIdArgs),
}

// ============================================================================
// Notifications
// ============================================================================

/// Show pending tasks across an owner's gardens
#[derive(Args)]
pub struct NotifyArgs {
    /// Username of the garden owner
    #[arg(short, long)]
    pub owner: String,
    #[command(flatten)]
    pub window: WindowArgs,
    /// Print the notifications as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<NotifyArgs> for NotificationQuery {
    fn from(val: NotifyArgs) -> Self {
        NotificationQuery {
            owner: val.owner,
            window: val.window.into(),
        }
    }
}

/// Show harvests in one garden
#[derive(Args)]
pub struct HarvestArgs {
    /// ID of the garden
    pub garden_id: u64,
    #[command(flatten)]
    pub window: WindowArgs,
    /// Print the harvest view as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<HarvestArgs> for HarvestQuery {
    fn from(val: HarvestArgs) -> Self {
        HarvestQuery {
            garden_id: val.garden_id,
            window: val.window.into(),
        }
    }
}

/// Build the weekly digest
///
/// Digests are printed, never sent.
#[derive(Args)]
pub struct DigestArgs {
    /// Only this owner; every owner with a garden when omitted
    #[arg(short, long)]
    pub owner: Option<String>,
    /// Print one summary line per owner instead of the full digest
    #[arg(long, conflicts_with = "preview")]
    pub dry_run: bool,
    /// Print each digest in full with its subject line (the default)
    #[arg(long)]
    pub preview: bool,
    #[command(flatten)]
    pub window: WindowArgs,
    /// Print the digests as JSON
    #[arg(long, conflicts_with_all = ["dry_run", "preview"])]
    pub json: bool,
}

impl From<&DigestArgs> for DigestParams {
    fn from(val: &DigestArgs) -> Self {
        DigestParams {
            owner: val.owner.clone(),
            window: val.window.into(),
        }
    }
}
