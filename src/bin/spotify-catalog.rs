use clap::{Parser, Subcommand};
use serde::Serialize;
use spotify_catalog::{ApiConfig, Page, SpotifyApi};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "spotify-catalog")]
#[command(about = "Query the Spotify catalog and print the result as JSON", long_about = None)]
struct Cli {
    /// OAuth access token (can also be set via SPOTIFY_ACCESS_TOKEN env var)
    #[arg(long, env = "SPOTIFY_ACCESS_TOKEN", hide_env_values = true)]
    token: String,

    /// API base URL
    #[arg(long, env = "SPOTIFY_API_URL", default_value = spotify_catalog::config::DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

/// Page selection shared by paginated commands.
#[derive(clap::Args)]
struct PageArgs {
    /// Page size
    #[arg(short, long, default_value_t = spotify_catalog::api::DEFAULT_LIMIT)]
    limit: u32,

    /// Index of the first item
    #[arg(short, long, default_value_t = 0)]
    offset: u32,
}

impl From<&PageArgs> for Page {
    fn from(args: &PageArgs) -> Self {
        Page::new(args.limit, args.offset)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Get an album
    Album { id: String },
    /// Get several albums
    Albums {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },
    /// Get one page of an album's tracks
    AlbumTracks {
        id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Get an artist
    Artist { id: String },
    /// Get several artists
    Artists {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },
    /// Get one page of an artist's albums
    ArtistAlbums {
        id: String,
        /// Market code, e.g. SE
        #[arg(long, default_value = "")]
        country: String,
        /// Album types to include (album, single, appears_on, compilation)
        #[arg(long = "album-type", value_delimiter = ',')]
        album_types: Vec<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Get an artist's top tracks in a market
    TopTracks {
        id: String,
        #[arg(long)]
        country: String,
    },
    /// Get artists related to an artist
    RelatedArtists { id: String },
    /// Get a track
    Track { id: String },
    /// Get several tracks
    Tracks {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },
    /// Get a user's public profile
    User { id: String },
    /// Get the profile of the token's owner
    Me,
    /// Get a playlist
    Playlist {
        user: String,
        id: String,
        /// Restrict the response to these fields
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,
    },
    /// Get one page of a playlist's tracks
    PlaylistTracks {
        user: String,
        id: String,
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Get one page of a user's playlists
    UserPlaylists {
        user: String,
        #[command(flatten)]
        page: PageArgs,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spotify_catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = ApiConfig::new().with_base_url(cli.base_url);
    let api = SpotifyApi::with_config(&config, cli.token)?;

    match &cli.command {
        Commands::Album { id } => print_json(&api.get_album(id).await?)?,
        Commands::Albums { ids } => print_json(&api.get_albums(ids.as_slice()).await?)?,
        Commands::AlbumTracks { id, page } => {
            print_json(&api.get_album_tracks(id, page.into()).await?)?
        }
        Commands::Artist { id } => print_json(&api.get_artist(id).await?)?,
        Commands::Artists { ids } => print_json(&api.get_artists(ids.as_slice()).await?)?,
        Commands::ArtistAlbums {
            id,
            country,
            album_types,
            page,
        } => print_json(
            &api.get_artist_albums(id, country, album_types.as_slice(), page.into())
                .await?,
        )?,
        Commands::TopTracks { id, country } => {
            print_json(&api.get_artist_top_tracks(id, country).await?)?
        }
        Commands::RelatedArtists { id } => {
            print_json(&api.get_artist_related_artists(id).await?)?
        }
        Commands::Track { id } => print_json(&api.get_track(id).await?)?,
        Commands::Tracks { ids } => print_json(&api.get_tracks(ids.as_slice()).await?)?,
        Commands::User { id } => print_json(&api.get_user_profile(id).await?)?,
        Commands::Me => print_json(&api.get_current_user().await?)?,
        Commands::Playlist { user, id, fields } => {
            print_json(&api.get_playlist(user, id, fields.as_slice()).await?)?
        }
        Commands::PlaylistTracks {
            user,
            id,
            fields,
            page,
        } => print_json(
            &api.get_playlist_tracks(user, id, fields.as_slice(), page.into())
                .await?,
        )?,
        Commands::UserPlaylists { user, page } => {
            print_json(&api.get_user_playlists(user, page.into()).await?)?
        }
    }

    Ok(())
}
