use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use gost::commands::validators;
use gost::{
    Config, GistClient, SystemDesktop,
    commands::{self, Command as _, CommandContext},
};
use std::{path::PathBuf, sync::Arc};

#[derive(Parser)]
#[command(name = "gost")]
#[command(about = "A command-line client for managing gists")]
#[command(version)]
struct Cli {
    /// Gist API base URL (default: https://api.github.com)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Access token (default: GITHUB_TOKEN environment variable)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Configuration file path (default: ~/.gost.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print each API request to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List gists
    #[command(alias = "ls")]
    List {
        /// List this user's public gists
        #[arg(short, long)]
        user: Option<String>,

        /// Output in JSON format for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// Create a gist from a file ("-" reads stdin)
    Post {
        /// File to upload
        file: String,

        /// Name of the file in the gist (defaults to the file's name)
        #[arg(short, long)]
        name: Option<String>,

        /// Gist description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Make the gist public
        #[arg(long, conflicts_with = "private")]
        public: bool,

        /// Make the gist secret
        #[arg(long)]
        private: bool,

        /// Open the new gist in the browser
        #[arg(short, long)]
        open: bool,
    },

    /// Replace a file in an existing gist
    Update {
        /// Gist URL or id
        gist: String,

        /// File with the new content
        file: String,

        /// Name of the file in the gist (defaults to the file's name)
        #[arg(short, long)]
        name: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// Open the gist in the browser
        #[arg(short, long)]
        open: bool,
    },

    /// Delete a gist
    #[command(alias = "rm")]
    Delete {
        /// Gist URL or id
        gist: String,
    },

    /// Download every file of a gist
    Download {
        /// Gist URL or id
        gist: String,

        /// Directory to write the files to
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{}", format!("{e:#}").red());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;

    let base_url = config.resolve_base_url(cli.base_url);
    validators::validate_base_url(&base_url)?;
    let token = config.resolve_token(cli.token);

    let client = GistClient::new(base_url, token).with_debug(cli.debug);
    let context = CommandContext::new(client, Arc::new(SystemDesktop));

    execute_command(cli.command, &config, &context).await
}

async fn execute_command(
    command: Commands,
    config: &Config,
    context: &CommandContext,
) -> Result<()> {
    match command {
        Commands::List { user, json } => {
            validators::validate_user(&user)?;
            commands::ListCommand { user, json }.execute(context).await?;
        }
        Commands::Post {
            file,
            name,
            description,
            public,
            private,
            open,
        } => {
            let file = commands::read_gist_file(&file, name)?;
            let public = if public {
                true
            } else if private {
                false
            } else {
                config.public
            };

            commands::PostCommand {
                file,
                description,
                public,
                open_browser: open || config.open_browser,
            }
            .execute(context)
            .await?;
        }
        Commands::Update {
            gist,
            file,
            name,
            description,
            open,
        } => {
            validators::validate_gist_reference(&gist)?;
            let file = commands::read_gist_file(&file, name)?;

            commands::UpdateCommand {
                gist,
                file,
                description,
                open_browser: open || config.open_browser,
            }
            .execute(context)
            .await?;
        }
        Commands::Delete { gist } => {
            validators::validate_gist_reference(&gist)?;
            commands::DeleteCommand { gist }.execute(context).await?;
        }
        Commands::Download { gist, output_dir } => {
            validators::validate_gist_reference(&gist)?;
            commands::DownloadCommand { gist, output_dir }
                .execute(context)
                .await?;
        }
    }

    Ok(())
}
