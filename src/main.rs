// src/main.rs
//
// `ivoculture` binary: builds the application state, runs one command and
// prints its result as JSON on stdout. Logs go to stderr.

mod cli;

use anyhow::{anyhow, Context};
use clap::Parser;
use serde::Serialize;

use ivoculture::application::commands::*;
use ivoculture::application::AppState;
use ivoculture::config::AppConfig;
use ivoculture::logging::init_logging;
use ivoculture::NewAccount;

use crate::cli::{profile_kind, AdminAction, Cli, Command, FavoritesAction};

fn print_json<T: Serialize>(value: &T, compact: bool) -> anyhow::Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .context("Failed to render output")?;
    println!("{}", rendered);
    Ok(())
}

/// Command errors are already serialized ErrorResponses
fn emit<T: Serialize>(result: Result<T, String>, compact: bool) -> anyhow::Result<()> {
    match result {
        Ok(value) => print_json(&value, compact),
        Err(error) => Err(anyhow!(error)),
    }
}

async fn run(state: &AppState, command: Command, compact: bool) -> anyhow::Result<()> {
    match command {
        // Catalogue
        Command::Contents {
            content_type,
            featured,
            region,
        } => print_json(
            &list_contents(state, content_type, featured, region).await,
            compact,
        ),
        Command::Content { id } => emit(get_content(state, id).await, compact),
        Command::Search { query } => print_json(&search_contents(state, &query).await, compact),
        Command::Categories => print_json(&list_categories(), compact),
        Command::Recommendations => print_json(&recommendations(state).await, compact),
        Command::Contributions => print_json(&contribution_history(state).await, compact),
        Command::Like { id } => emit(like_content(state, id).await, compact),
        Command::Regions => print_json(&list_regions(state).await, compact),
        Command::Region { id } => emit(get_region(state, id).await, compact),
        Command::Promotions {
            promotion_type,
            featured,
        } => print_json(
            &list_promotions(state, promotion_type, featured).await,
            compact,
        ),
        Command::Promotion { id } => emit(get_promotion(state, id).await, compact),

        // Favorites & reports
        Command::Favorites { action } => match action {
            FavoritesAction::List => print_json(&list_favorites(state).await, compact),
            FavoritesAction::Add { id } => emit(add_favorite(state, id).await, compact),
            FavoritesAction::Remove { ids } => emit(remove_favorites(state, &ids).await, compact),
        },
        Command::Report { id, reason } => emit(report_content(state, id, reason).await, compact),

        // Session
        Command::Login { email, password } => emit(login(state, &email, &password).await, compact),
        Command::Register {
            email,
            username,
            password,
            name,
        } => {
            let account = NewAccount {
                email,
                username,
                password,
                nom_complet: name,
            };
            emit(register(state, account).await, compact)
        }
        Command::Logout => emit(logout(state).await, compact),
        Command::Whoami => print_json(&whoami(state), compact),
        Command::Reload => print_json(&reload_session(state).await, compact),
        Command::Profile {
            username,
            name,
            touriste,
        } => emit(
            start_local_profile(state, &username, name, profile_kind(touriste)),
            compact,
        ),

        // Premium
        Command::Plans => print_json(&list_plans(state), compact),
        Command::Subscribe { plan, payment } => {
            emit(subscribe(state, plan, payment.method()).await, compact)
        }
        Command::Unsubscribe => emit(cancel_subscription(state), compact),

        Command::Storage => emit(storage_info(state), compact),

        // Back-office
        Command::Admin { action } => match action {
            AdminAction::Stats => emit(admin_stats(state).await, compact),
            AdminAction::Users => emit(admin_list_users(state).await, compact),
            AdminAction::Deactivate { id } => emit(admin_deactivate_user(state, id).await, compact),
            AdminAction::Contents => emit(admin_list_contents(state).await, compact),
            AdminAction::Publish { id } => emit(admin_toggle_published(state, id).await, compact),
            AdminAction::Feature { id } => emit(admin_toggle_featured(state, id).await, compact),
            AdminAction::Delete { id } => emit(admin_delete_content(state, id).await, compact),
            AdminAction::Regions => emit(admin_list_regions(state).await, compact),
            AdminAction::Promotions => emit(admin_list_promotions(state).await, compact),
        },
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }

    let state = if cli.in_memory {
        AppState::in_memory(config)
    } else {
        AppState::initialize(config)
    }
    .context("Failed to initialise local state")?;

    state.event_bus.subscribe::<ivoculture::FallbackServed, _>(|event| {
        log::debug!(
            "Offline data served ({}) for {}",
            event.tier,
            event.cache_key.as_deref().unwrap_or("<uncached>")
        );
    });

    run(&state, cli.command, cli.compact).await
}
