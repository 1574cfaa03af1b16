use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;

use postboard::cli::{Cli, Command};
use postboard::config::Config;
use postboard::logging::init_tracing;
use postboard::model::NewPost;
use postboard::{view, RequestStatus, Store};

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
        config.validate()?;
    }
    Ok(config)
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(&cli)?;
    init_tracing(&config.logging);

    let store = Store::from_config(&config)?;
    let outcome = store.bootstrap().await;
    if let Err(err) = &outcome.users {
        tracing::warn!(error = %err, "User directory unavailable");
    }

    match cli.command.unwrap_or(Command::List) {
        Command::List => {
            print!("{}", store.read(|state| view::render_post_list(state, Utc::now())));
            if store.read(|state| state.posts.status) == RequestStatus::Failed {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Show { id } => {
            outcome.posts.context("Failed to load posts")?;
            print!("{}", store.read(|state| view::render_post(state, id, Utc::now())));
        }
        Command::Users => {
            outcome.users.context("Failed to load users")?;
            print!("{}", store.read(view::render_user_directory));
        }
        Command::User { id } => {
            outcome.users.context("Failed to load users")?;
            print!("{}", store.read(|state| view::render_user_page(state, id)));
        }
        Command::Create {
            title,
            body,
            user_id,
        } => {
            let post = store
                .create_post(NewPost::new(title, body, user_id))
                .await
                .context("Failed to create post")?;
            print!("{}", store.read(|state| view::render_post(state, post.id, Utc::now())));
        }
        Command::Edit {
            id,
            title,
            body,
            user_id,
        } => {
            outcome.posts.context("Failed to load posts")?;
            let mut post = store.post(id)?;
            if let Some(title) = title {
                post.title = title;
            }
            if let Some(body) = body {
                post.body = body;
            }
            if let Some(user_id) = user_id {
                post.user_id = user_id;
            }
            let post = store
                .update_post(post)
                .await
                .with_context(|| format!("Failed to update post {}", id))?;
            print!("{}", store.read(|state| view::render_post(state, post.id, Utc::now())));
        }
        Command::Delete { id } => {
            outcome.posts.context("Failed to load posts")?;
            let post = store.post(id)?;
            store
                .delete_post(post)
                .await
                .with_context(|| format!("Failed to delete post {}", id))?;
            println!("Deleted post {}", id);
        }
        Command::React {
            id,
            reaction,
            times,
        } => {
            outcome.posts.context("Failed to load posts")?;
            let mut post = store.post(id)?;
            for _ in 0..times {
                post = store.increment_reaction(id, reaction)?;
            }
            println!("{}", view::render_reactions(&post.reactions));
        }
    }

    Ok(ExitCode::SUCCESS)
}
