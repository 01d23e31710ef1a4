use clap::{Args, Parser, Subcommand};
use jira_ticket_search::{
    ConfigError, SearchConfig, SearchError, SearchSettings, SearchTypeSelector, SettingsManager,
    SettingsOverrides, TicketSearch, ToolRegistry,
};
use log::{error, info};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "jira-ticket-search", version, about = "Search Jira tickets through agent tools")]
struct Cli {
    #[command(flatten)]
    settings: SettingsArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct SettingsArgs {
    /// Jira instance URL, e.g. https://your-domain.atlassian.net
    #[arg(long, global = true, env = "JIRA_INSTANCE")]
    instance: Option<String>,

    /// Jira username or email
    #[arg(long, global = true, env = "JIRA_USERNAME")]
    username: Option<String>,

    /// Jira API token (never persisted)
    #[arg(long, global = true, env = "JIRA_API_TOKEN", hide_env_values = true)]
    api_token: Option<String>,

    /// jql, text, key, specific_id, assignee, reporter, status or all
    #[arg(long, global = true, env = "JIRA_SEARCH_TYPE")]
    search_type: Option<SearchTypeSelector>,

    #[arg(long, global = true, env = "JIRA_MAX_RESULTS")]
    max_results: Option<u32>,

    #[arg(long, global = true, env = "JIRA_INCLUDE_COMMENTS")]
    include_comments: Option<bool>,

    #[arg(long, global = true, env = "JIRA_INCLUDE_ATTACHMENTS")]
    include_attachments: Option<bool>,
}

impl SettingsArgs {
    fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            jira_instance: self.instance.clone(),
            username: self.username.clone(),
            search_type: self.search_type,
            max_results: self.max_results,
            include_comments: self.include_comments,
            include_attachments: self.include_attachments,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List the tools enabled by the current search type
    Tools,
    /// Invoke one tool and print its output
    Run {
        /// Tool name, e.g. Jira_Search_Key
        tool: String,
        /// Free-text tool input
        input: String,
    },
    /// Inspect or persist the non-secret settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
enum ConfigCommand {
    Show,
    Save,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), SearchError> {
    let manager = SettingsManager::new()?;
    let settings = manager.load().merge(cli.settings.overrides());

    match cli.command {
        Command::Tools => {
            for tool in ToolRegistry::for_selector(settings.search_type).tools() {
                println!("{}\t{}", tool.name(), tool.description());
            }
        }
        Command::Run { tool, input } => {
            let token = cli
                .settings
                .api_token
                .ok_or(ConfigError::Missing("api_token"))?;
            let config = SearchConfig::from_settings(settings, token)?;
            let registry = ToolRegistry::from_config(&config);
            let search = TicketSearch::new(&config)?;
            info!("Running {} against {}", tool, config.jira_instance);
            println!("{}", registry.invoke(&search, &tool, &input).await?);
        }
        Command::Config(ConfigCommand::Show) => print_settings(&settings)?,
        Command::Config(ConfigCommand::Save) => {
            manager.save(&settings)?;
            info!("Saved settings to {}", manager.path().display());
        }
    }
    Ok(())
}

fn print_settings(settings: &SearchSettings) -> Result<(), ConfigError> {
    println!("{}", serde_json::to_string_pretty(settings)?);
    Ok(())
}
