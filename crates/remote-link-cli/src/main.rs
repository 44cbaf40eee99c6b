//! jira-remote-link - link GitHub issues to the Jira issues they mention.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use remote_link_core::{Config, JiraConfig, Linker, Metadata, Outcome, Reporter, Result};
use remote_link_github::{load_event, ActionsReporter, EVENT_NAME_VAR, EVENT_PATH_VAR};
use remote_link_jira::JiraClient;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jira-remote-link")]
#[command(author, version, about = "Link GitHub issues to the Jira issues they mention", long_about = None)]
struct Cli {
    /// Jira host, e.g. acme.atlassian.net
    #[arg(long, env = "INPUT_JIRA-URL")]
    jira_url: Option<String>,

    /// Email of the Jira account used to create links
    #[arg(long, env = "INPUT_JIRA-EMAIL")]
    jira_email: Option<String>,

    /// Jira API token
    #[arg(long, env = "INPUT_JIRA-TOKEN", hide_env_values = true)]
    jira_token: Option<String>,

    /// Name of the triggering event
    #[arg(long, env = EVENT_NAME_VAR)]
    event_name: String,

    /// Path of the JSON event payload
    #[arg(long, env = EVENT_PATH_VAR)]
    event_path: PathBuf,

    /// Config file with Jira settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn jira_overrides(&self) -> JiraConfig {
        JiraConfig {
            url: self.jira_url.clone(),
            email: self.jira_email.clone(),
            token: self.jira_token.clone(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for workflow commands
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    let reporter = ActionsReporter::stdout();

    match run(&cli, &reporter).await {
        Ok(outcome) => tracing::info!(?outcome, "jira-remote-link finished"),
        Err(err) => reporter.failure(&err, &Metadata::new()),
    }

    if reporter.has_failed() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

async fn run(cli: &Cli, reporter: &dyn Reporter) -> Result<Outcome> {
    let config = load_config(cli.config.as_deref())?.merge(cli.jira_overrides());
    let settings = config.jira_settings()?;
    tracing::debug!(?settings, "Jira settings resolved");

    let event = load_event(&cli.event_name, &cli.event_path)?;
    let client = JiraClient::new(&settings.url, settings.email, settings.token)?;

    Ok(Linker::new(&client, reporter).handle(&event).await)
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => match Config::config_path() {
            Ok(path) => Config::load_from(&path),
            Err(_) => Ok(Config::default()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec![
            "jira-remote-link",
            "--event-name",
            "issues",
            "--event-path",
            "event.json",
        ];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_become_overrides() {
        let cli = parse(&[
            "--jira-url",
            "acme.atlassian.net",
            "--jira-email",
            "bot@acme.com",
            "--jira-token",
            "secret",
        ]);

        let overrides = cli.jira_overrides();
        assert_eq!(overrides.url.as_deref(), Some("acme.atlassian.net"));
        assert_eq!(overrides.email.as_deref(), Some("bot@acme.com"));
        assert_eq!(overrides.token.as_deref(), Some("secret"));
        assert_eq!(cli.event_name, "issues");
        assert_eq!(cli.event_path, PathBuf::from("event.json"));
    }

    #[test]
    fn test_explicit_config_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[jira]\nurl = \"acme.atlassian.net\"\n").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(
            config.jira.unwrap().url.as_deref(),
            Some("acme.atlassian.net")
        );
    }
}
