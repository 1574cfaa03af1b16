use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::model::ReactionKind;

/// Browse and edit posts of a JSON placeholder blog API.
#[derive(Debug, Parser)]
#[command(name = "postboard", version, about)]
pub struct Cli {
    /// Config file (default: ~/.config/postboard/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the API base URL from config
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all posts, newest first (default)
    List,
    /// Show one post
    Show { id: u64 },
    /// List the user directory
    Users,
    /// Show one user and their posts
    User { id: u64 },
    /// Create a post
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
        #[arg(long)]
        user_id: u64,
    },
    /// Edit a post; omitted fields keep their value
    Edit {
        id: u64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        body: Option<String>,
        #[arg(long)]
        user_id: Option<u64>,
    },
    /// Delete a post
    Delete { id: u64 },
    /// Add reactions to a post (thumbsUp, wow, heart, rocket, coffee)
    React {
        id: u64,
        reaction: ReactionKind,
        #[arg(long, default_value_t = 1)]
        times: u32,
    },
}
