use std::{fs, path::PathBuf};

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use esmap_core::{
    cluster::{render_map, MapView},
    entities::{Id, ThemeEntry, Venue},
    usecases::{self, search_venues},
    util::sort::{sort_theme_entries, SortKey},
};
use esmap_frontend_api::PublicApi;
use esmap_gateways::{HttpGeocoder, JsonFileStorage};

mod app;
mod config;
mod flows;


use self::{app::AppState, config::Config};

#[derive(Debug, Parser)]
#[command(name = "escapemap", version, about = "Escape-room venue directory client")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch the approved venues from the backend
    Fetch,
    /// Render the map view at a zoom level
    Map {
        #[arg(long, default_value_t = 14.0)]
        zoom: f64,
        /// Text search over brand, branch and theme names
        #[arg(long)]
        query: Option<String>,
    },
    /// List all themes across the approved venues
    List {
        #[arg(long, value_enum, default_value_t = SortArg::Recommendation)]
        sort: SortArg,
        #[arg(long)]
        query: Option<String>,
    },
    /// Report a new venue with a single theme
    Report(ReportArgs),
    /// List the pending reports
    Pending,
    /// Approve a pending report (admin)
    Approve { id: String },
    /// Reject a pending report (admin)
    Reject { id: String },
    /// Delete an approved venue (admin)
    Delete { id: String },
    /// Manage the favorite themes
    #[command(subcommand)]
    Favorite(FavoriteCommand),
    /// Show the reviews of a theme
    Reviews { theme_id: String },
    /// Submit a review
    Review(ReviewArgs),
    /// Show the current advertisements
    Ads,
    /// Show or change the user profile
    Profile {
        #[arg(long)]
        nickname: Option<String>,
        #[arg(long)]
        toggle_admin: bool,
        #[arg(long)]
        toggle_notifications: bool,
    },
}

#[derive(Debug, Subcommand)]
enum FavoriteCommand {
    Add { theme_id: String },
    Remove { theme_id: String },
    List,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Recommendation,
    Difficulty,
    Fear,
    Activity,
    Name,
}

impl From<SortArg> for SortKey {
    fn from(from: SortArg) -> Self {
        match from {
            SortArg::Recommendation => SortKey::Recommendation,
            SortArg::Difficulty => SortKey::Difficulty,
            SortArg::Fear => SortKey::Fear,
            SortArg::Activity => SortKey::Activity,
            SortArg::Name => SortKey::Name,
        }
    }
}

#[derive(Debug, Args)]
struct ReportArgs {
    #[arg(long)]
    brand: String,
    #[arg(long)]
    branch: String,
    /// Street address, resolved through the geocoding service
    #[arg(long)]
    address: String,
    #[arg(long)]
    website: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    theme_name: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long, value_delimiter = ',')]
    tags: Vec<String>,
    #[arg(long, default_value_t = 5)]
    difficulty: i64,
    #[arg(long, default_value_t = 5)]
    fear: i64,
    #[arg(long, default_value_t = 5)]
    activity: i64,
    #[arg(long, default_value_t = 5)]
    recommendation: i64,
}

#[derive(Debug, Args)]
struct ReviewArgs {
    #[arg(long)]
    theme_id: String,
    /// Defaults to the profile nickname
    #[arg(long)]
    nickname: Option<String>,
    #[arg(long)]
    comment: String,
    #[arg(long, default_value_t = 5)]
    difficulty: i64,
    #[arg(long, default_value_t = 5)]
    fear: i64,
    #[arg(long, default_value_t = 5)]
    activity: i64,
    #[arg(long, default_value_t = 5)]
    recommendation: i64,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let cli = Cli::parse();
    let config = Config::try_load_from_file_or_default(cli.config.as_deref())?;
    fs::create_dir_all(&config.data_dir)?;
    let storage = JsonFileStorage::try_new(&config.data_dir)?;
    let mut app = AppState::load(&storage)?;
    let api = PublicApi::new(config.api_base_url.clone());
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match cli.command {
        Command::Fetch => {
            let count = runtime.block_on(flows::fetch_venues(&api, &mut app, &storage))?;
            println!("Fetched {count} venues");
        }
        Command::Map { zoom, query } => {
            runtime.block_on(flows::fetch_venues(&api, &mut app, &storage))?;
            let venues: Vec<Venue> = match &query {
                Some(query) => search_venues(app.store.approved(), query)
                    .into_iter()
                    .cloned()
                    .collect(),
                None => app.store.approved().to_vec(),
            };
            print_map(&render_map(&venues, zoom, &config.cluster), zoom, &app);
        }
        Command::List { sort, query } => {
            runtime.block_on(flows::fetch_venues(&api, &mut app, &storage))?;
            let mut entries: Vec<ThemeEntry> = match &query {
                Some(query) => search_venues(app.store.approved(), query)
                    .into_iter()
                    .flat_map(Venue::theme_entries)
                    .collect(),
                None => app.store.all_themes(),
            };
            sort_theme_entries(&mut entries, sort.into());
            for entry in &entries {
                print_theme_entry(entry, &app);
            }
            println!("{} themes", entries.len());
        }
        Command::Report(args) => {
            let geocoder = HttpGeocoder::try_new(config.geocoding_endpoint.clone())?;
            let ReportArgs {
                brand,
                branch,
                address,
                website,
                phone,
                theme_name,
                description,
                tags,
                difficulty,
                fear,
                activity,
                recommendation,
            } = args;
            let report = usecases::NewVenueReport {
                brand_name: brand,
                branch_name: branch,
                address,
                website_url: website,
                phone,
                theme: usecases::NewThemeReport {
                    name: theme_name,
                    description,
                    tags,
                    difficulty,
                    fear,
                    activity,
                    recommendation,
                },
            };
            let id = flows::submit_report(&geocoder, &mut app, &storage, report)?;
            println!("Report {id} submitted and awaiting approval");
        }
        Command::Pending => {
            for venue in app.store.pending() {
                println!(
                    "{}: {} {} — {}",
                    venue.id, venue.brand_name, venue.branch_name, venue.address
                );
            }
            println!("{} pending reports", app.store.pending().len());
        }
        Command::Approve { id } => {
            ensure_admin(&app)?;
            let id = Id::from(id);
            if flows::approve_report(&mut app, &storage, &id)? {
                println!("Report {id} approved");
            } else {
                println!("Report {id} is not pending");
            }
        }
        Command::Reject { id } => {
            ensure_admin(&app)?;
            let id = Id::from(id);
            if flows::reject_report(&mut app, &storage, &id)? {
                println!("Report {id} rejected");
            } else {
                println!("Report {id} is not pending");
            }
        }
        Command::Delete { id } => {
            ensure_admin(&app)?;
            runtime.block_on(flows::fetch_venues(&api, &mut app, &storage))?;
            let id = Id::from(id);
            if flows::delete_venue(&mut app, &storage, &id)? {
                println!("Venue {id} deleted");
            } else {
                println!("Venue {id} is not approved");
            }
        }
        Command::Favorite(action) => match action {
            FavoriteCommand::Add { theme_id } => {
                flows::add_favorite(&mut app, &storage, theme_id.as_str().into())?;
                println!("Added {theme_id} to the favorites");
            }
            FavoriteCommand::Remove { theme_id } => {
                flows::remove_favorite(&mut app, &storage, &theme_id.as_str().into())?;
                println!("Removed {theme_id} from the favorites");
            }
            FavoriteCommand::List => {
                runtime.block_on(flows::fetch_venues(&api, &mut app, &storage))?;
                let favorites = app.store.favorite_themes();
                for entry in &favorites {
                    print_theme_entry(entry, &app);
                }
                println!("{} favorite themes", favorites.len());
            }
        },
        Command::Reviews { theme_id } => {
            let theme_id = Id::from(theme_id);
            runtime.block_on(flows::load_reviews(&api, &mut app, &theme_id))?;
            for review in app.reviews.reviews_of_theme(&theme_id) {
                println!(
                    "[{}] {}: {} (D:{} F:{} A:{} R:{})",
                    review.created_at,
                    review.nickname,
                    review.comment,
                    u8::from(review.scores.difficulty),
                    u8::from(review.scores.fear),
                    u8::from(review.scores.activity),
                    u8::from(review.scores.recommendation),
                );
            }
            match app.reviews.average_scores(&theme_id) {
                Some(avg) => println!(
                    "{} reviews, averages: D:{:.1} F:{:.1} A:{:.1} R:{:.1}",
                    avg.count,
                    f64::from(avg.difficulty),
                    f64::from(avg.fear),
                    f64::from(avg.activity),
                    f64::from(avg.recommendation),
                ),
                None => println!("No reviews yet"),
            }
        }
        Command::Review(args) => {
            let ReviewArgs {
                theme_id,
                nickname,
                comment,
                difficulty,
                fear,
                activity,
                recommendation,
            } = args;
            let new_review = usecases::NewReview {
                theme_id: theme_id.as_str().into(),
                nickname: nickname.unwrap_or_else(|| app.prefs.nickname.clone()),
                comment,
                difficulty,
                fear,
                activity,
                recommendation,
            };
            let review = runtime.block_on(flows::submit_review(&api, &mut app, new_review))?;
            println!("Review {} created", review.id);
        }
        Command::Ads => {
            let advertisements = runtime.block_on(flows::fetch_advertisements(&api))?;
            for ad in &advertisements {
                let link = ad
                    .link_url
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                println!("{}: {} — {} {}", ad.display_order, ad.title, ad.link_text, link);
            }
        }
        Command::Profile {
            nickname,
            toggle_admin,
            toggle_notifications,
        } => {
            if let Some(nickname) = nickname {
                flows::set_nickname(&mut app, &storage, nickname)?;
            }
            if toggle_notifications {
                flows::toggle_notifications(&mut app, &storage)?;
            }
            if toggle_admin {
                flows::toggle_admin(&mut app, &storage)?;
            }
            println!(
                "{} (notifications: {}, admin: {})",
                app.prefs.nickname, app.prefs.notifications_enabled, app.prefs.is_admin
            );
        }
    }
    Ok(())
}

fn ensure_admin(app: &AppState) -> Result<()> {
    if !app.prefs.is_admin {
        bail!("Admin mode is disabled. Enable it with `escapemap profile --toggle-admin`.");
    }
    Ok(())
}

fn print_map(view: &MapView, zoom: f64, app: &AppState) {
    match view {
        MapView::Hidden => {
            println!("Nothing to show at zoom {zoom}; zoom in further");
        }
        MapView::Clusters(clusters) => {
            for cluster in clusters {
                let (lat, lng) = cluster.centroid.to_lat_lng_deg();
                println!("({lat:.6},{lng:.6}) {} venues in this area:", cluster.len());
                for id in &cluster.venue_ids {
                    if let Some(venue) = app.store.venue(id) {
                        println!(
                            "  {} {} ({} themes)",
                            venue.brand_name,
                            venue.branch_name,
                            venue.themes.len()
                        );
                    }
                }
            }
            println!("{} clusters", clusters.len());
        }
        MapView::Markers(markers) => {
            for marker in markers {
                if let Some(venue) = app.store.venue(&marker.venue_id) {
                    let (lat, lng) = marker.pos.to_lat_lng_deg();
                    println!(
                        "({lat:.6},{lng:.6}) {} {} — {}",
                        venue.brand_name, venue.branch_name, venue.address
                    );
                }
            }
            println!("{} markers", markers.len());
        }
    }
}

fn print_theme_entry(entry: &ThemeEntry, app: &AppState) {
    let star = if app.store.is_favorite(&entry.theme.id) {
        "★"
    } else {
        " "
    };
    println!(
        "{star} {}: {} ({} {}) D:{} F:{} A:{} R:{} [{}]",
        entry.theme.id,
        entry.theme.name,
        entry.brand_name,
        entry.branch_name,
        u8::from(entry.theme.scores.difficulty),
        u8::from(entry.theme.scores.fear),
        u8::from(entry.theme.scores.activity),
        u8::from(entry.theme.scores.recommendation),
        entry.theme.tags.join(","),
    );
}
