/*
[INPUT]:  CLI arguments, YAML configuration file, interactive credentials
[OUTPUT]: An authenticated session and a printed board snapshot
[POS]:    Binary entry point - demo surface over the controller
[UPDATE]: When changing CLI flags or the startup flow
*/

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use console::style;
use dialoguer::{Input, Password};
use taskboard_client::{StatusFilter, TaskboardClient};
use tracing::info;
use tracing_subscriber::EnvFilter;

use taskboard_app::{AppConfig, AppController};

#[derive(Parser, Debug)]
#[command(name = "taskboard", version, about = "Taskboard session and board snapshot")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,
    #[arg(long = "filter", value_name = "FILTER", default_value = "all")]
    filter: StatusFilter,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let mut config = match &args.config_path {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    info!(base_url = %config.base_url, "starting taskboard");

    let client = TaskboardClient::with_config(config.client_config(), &config.base_url)
        .context("build HTTP client")?;
    let mut controller = AppController::new(client);

    controller.check_session().await;
    if controller.state().identity.is_none() {
        login_interactively(&mut controller).await?;
    }

    controller.set_filter(args.filter);
    print_board(&controller);
    Ok(())
}

async fn login_interactively(controller: &mut AppController) -> Result<()> {
    let email: String = Input::new().with_prompt("Email").interact_text()?;
    let password = Password::new().with_prompt("Password").interact()?;

    controller.login(&email, &password).await;
    if let Some(error) = &controller.state().auth_error {
        return Err(anyhow!("login failed: {error}"));
    }
    Ok(())
}

fn print_board(controller: &AppController) {
    let state = controller.state();
    if let Some(identity) = &state.identity {
        println!(
            "{} {} <{}>",
            style("Signed in as").dim(),
            style(&identity.name).bold(),
            identity.email
        );
    }
    if let Some(error) = &state.board_error {
        println!("{} {}", style("error:").red().bold(), error);
    }

    let board = controller.board();
    for column in board.columns() {
        let header = format!("{} ({})", column.status, column.tasks.len());
        if column.dimmed {
            println!("\n{}", style(header).dim());
        } else {
            println!("\n{}", style(header).bold().underlined());
        }
        for task in &column.tasks {
            let assignee = task
                .assignee
                .as_ref()
                .map(|user| format!(" @{}", user.name))
                .unwrap_or_default();
            println!("  #{} {}{}", task.id, task.title, style(assignee).cyan());
        }
    }
    println!("\n{} {}", style("total:").dim(), board.total());
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .context("parse log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}
