mod storage;
mod transport;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use session::api;
use session::types::{Announcement, AnnouncementDraft, Blog, BlogDraft, PasswordChange, Profile, RecordId};
use session::{ApiConfig, ApiError, DEFAULT_API_BASE_URL, RequestHelper, SessionStore, SignupForm};
use tracing_subscriber::EnvFilter;

use crate::storage::FileStore;
use crate::transport::ReqwestTransport;

type CliSession = SessionStore<ReqwestTransport, FileStore>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("no {kind} with id {id}")]
    NotFound { kind: &'static str, id: RecordId },
    #[error("profile update must be a JSON object")]
    NotAnObject,
    #[error("refusing to delete the account without --yes")]
    ConfirmationRequired,
}

#[derive(Parser, Debug)]
#[command(name = "amsa", about = "AMSA member portal CLI")]
struct Cli {
    #[arg(long, env = "AMSA_API_URL", default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    /// Directory holding the stored session.
    #[arg(long, env = "AMSA_STATE_DIR", default_value = ".amsa")]
    state_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and keep the session in the state directory.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "AMSA_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Register a new member account.
    Signup(SignupArgs),
    Logout,
    /// Print the signed-in user.
    Whoami,
    Blogs(BlogsCommand),
    Announcements(AnnouncementsCommand),
    Profile(ProfileCommand),
    /// Leadership roster.
    Members,
    PublicProfile {
        id: String,
    },
}

#[derive(Args, Debug)]
struct SignupArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    personal_email: String,
    #[arg(long, env = "AMSA_PASSWORD", hide_env_values = true)]
    password: String,
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
}

#[derive(Args, Debug)]
struct BlogsCommand {
    #[command(subcommand)]
    command: BlogsSubcommand,
}

#[derive(Subcommand, Debug)]
enum BlogsSubcommand {
    List,
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        cover: Option<String>,
    },
    /// Change the given fields; the rest keep their current values.
    Update {
        id: RecordId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        /// Pass an empty string to clear the cover image.
        #[arg(long)]
        cover: Option<String>,
    },
    Delete {
        id: RecordId,
    },
}

#[derive(Args, Debug)]
struct AnnouncementsCommand {
    #[command(subcommand)]
    command: AnnouncementsSubcommand,
}

#[derive(Subcommand, Debug)]
enum AnnouncementsSubcommand {
    List,
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
    },
    Update {
        id: RecordId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        body: Option<String>,
    },
    Delete {
        id: RecordId,
    },
}

#[derive(Args, Debug)]
struct ProfileCommand {
    #[command(subcommand)]
    command: ProfileSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProfileSubcommand {
    Show,
    /// Merge a JSON object of camelCase profile fields into the profile.
    Update {
        #[arg(long)]
        data: String,
    },
    Password {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
    },
    /// Delete the account and forget the local session.
    Delete {
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ApiConfig::from_setting(Some(&cli.base_url));
    let client = reqwest::Client::builder().build()?;
    let store = SessionStore::new(
        RequestHelper::new(&config, ReqwestTransport::new(client)),
        FileStore::new(&cli.state_dir),
    );
    let status = store.restore();
    tracing::debug!(?status, base_url = %config.base_url, "session restored");

    match cli.command {
        Command::Login { email, password } => {
            let user = store.login(&email, &password).await?;
            print_json(&user)
        }
        Command::Signup(args) => run_signup(&store, args).await,
        Command::Logout => {
            store.logout();
            println!("logged out");
            Ok(())
        }
        Command::Whoami => {
            let user = store.user().ok_or(ApiError::NotAuthenticated)?;
            print_json(&user)
        }
        Command::Blogs(blogs) => run_blogs(&store, blogs).await,
        Command::Announcements(announcements) => run_announcements(&store, announcements).await,
        Command::Profile(profile) => run_profile(&store, profile).await,
        Command::Members => print_json(&api::list_members(store.http()).await?),
        Command::PublicProfile { id } => print_json(&api::fetch_public_profile(store.http(), &id).await?),
    }
}

async fn run_signup(store: &CliSession, args: SignupArgs) -> Result<(), CliError> {
    let form = SignupForm {
        email: Some(args.email),
        edu_email: None,
        personal_email: args.personal_email,
        password: args.password,
        first_name: args.first_name,
        last_name: args.last_name,
    };
    let user = store.signup(&form).await?;
    print_json(&user)
}

async fn run_blogs(store: &CliSession, blogs: BlogsCommand) -> Result<(), CliError> {
    match blogs.command {
        BlogsSubcommand::List => print_json(&api::list_blogs(store.http()).await?),
        BlogsSubcommand::Create { title, content, cover } => {
            let draft = BlogDraft { title, content, cover_image_url: cover.filter(|c| !c.trim().is_empty()) };
            print_json(&api::create_blog(&store.authed(), &draft).await?)
        }
        BlogsSubcommand::Update { id, title, content, cover } => {
            let current = api::list_blogs(&store.authed()).await?;
            let blog = current
                .iter()
                .find(|b| b.id == id)
                .ok_or_else(|| CliError::NotFound { kind: "blog", id: id.clone() })?;
            let draft = merge_blog(blog, title, content, cover);
            print_json(&api::update_blog(&store.authed(), &id, &draft).await?)
        }
        BlogsSubcommand::Delete { id } => {
            api::delete_blog(&store.authed(), &id).await?;
            println!("deleted blog {id}");
            Ok(())
        }
    }
}

async fn run_announcements(store: &CliSession, announcements: AnnouncementsCommand) -> Result<(), CliError> {
    match announcements.command {
        AnnouncementsSubcommand::List => print_json(&api::list_announcements(store.http()).await?),
        AnnouncementsSubcommand::Create { title, body } => {
            let draft = AnnouncementDraft { title, body };
            print_json(&api::create_announcement(&store.authed(), &draft).await?)
        }
        AnnouncementsSubcommand::Update { id, title, body } => {
            let current = api::list_announcements(&store.authed()).await?;
            let item = current
                .iter()
                .find(|a| a.id == id)
                .ok_or_else(|| CliError::NotFound { kind: "announcement", id: id.clone() })?;
            let draft = merge_announcement(item, title, body);
            print_json(&api::update_announcement(&store.authed(), &id, &draft).await?)
        }
        AnnouncementsSubcommand::Delete { id } => {
            api::delete_announcement(&store.authed(), &id).await?;
            println!("deleted announcement {id}");
            Ok(())
        }
    }
}

async fn run_profile(store: &CliSession, profile: ProfileCommand) -> Result<(), CliError> {
    match profile.command {
        ProfileSubcommand::Show => print_json(&api::fetch_profile(&store.authed()).await?),
        ProfileSubcommand::Update { data } => {
            let patch = serde_json::from_str::<Value>(&data)?;
            let current = api::fetch_profile(&store.authed()).await?;
            let merged = merge_profile(&current, patch)?;
            print_json(&api::update_profile(&store.authed(), &merged).await?)
        }
        ProfileSubcommand::Password { current, new } => {
            let change = PasswordChange { current_password: current, new_password: new };
            api::change_password(&store.authed(), &change).await?;
            println!("password changed");
            Ok(())
        }
        ProfileSubcommand::Delete { yes } => {
            if !yes {
                return Err(CliError::ConfirmationRequired);
            }
            api::delete_account(&store.authed()).await?;
            store.logout();
            println!("account deleted");
            Ok(())
        }
    }
}

/// Fields left as `None` keep the post's current value. An empty cover clears it.
fn merge_blog(blog: &Blog, title: Option<String>, content: Option<String>, cover: Option<String>) -> BlogDraft {
    let mut draft = BlogDraft::from(blog);
    if let Some(title) = title {
        draft.title = title;
    }
    if let Some(content) = content {
        draft.content = content;
    }
    if let Some(cover) = cover {
        draft.cover_image_url = (!cover.trim().is_empty()).then_some(cover);
    }
    draft
}

fn merge_announcement(item: &Announcement, title: Option<String>, body: Option<String>) -> AnnouncementDraft {
    let current = AnnouncementDraft::from(item);
    AnnouncementDraft { title: title.unwrap_or(current.title), body: body.unwrap_or(current.body) }
}

fn merge_profile(profile: &Profile, patch: Value) -> Result<Profile, CliError> {
    let Value::Object(patch) = patch else {
        return Err(CliError::NotAnObject);
    };
    let mut merged = serde_json::to_value(profile)?;
    if let Value::Object(fields) = &mut merged {
        fields.extend(patch);
    }
    Ok(serde_json::from_value(merged)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
