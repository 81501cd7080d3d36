//! Command-line interface parsing for the diblog binary
//!
//! Credentials come from `--token`/`--blog-id` or the `DROPINBLOG_TOKEN` /
//! `DROPINBLOG_BLOG_ID` environment variables. They deliberately default to
//! empty strings instead of being required here, so a missing credential
//! surfaces as the client's own configuration error rather than a usage
//! error.

use clap::{Parser, Subcommand};

/// DropInBlog rendered-content fetcher
#[derive(Parser, Debug)]
#[command(name = "diblog")]
#[command(about = "Fetch rendered DropInBlog content from the command line")]
#[command(version)]
pub struct Cli {
    /// API bearer token
    #[arg(long, env = "DROPINBLOG_TOKEN", hide_env_values = true, default_value = "")]
    pub token: String,

    /// Blog id scoping every request
    #[arg(long, env = "DROPINBLOG_BLOG_ID", default_value = "")]
    pub blog_id: String,

    /// Response cache time-to-live in seconds
    #[arg(long, default_value_t = 300)]
    pub ttl_seconds: u64,

    #[command(subcommand)]
    pub command: Command,
}

/// One subcommand per rendered-API endpoint
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch the rendered main post list
    List {
        /// Pagination token passed through to the API
        #[arg(long)]
        page: Option<String>,
    },
    /// Fetch a single rendered post by slug
    Post {
        /// Slug of the post to fetch
        slug: String,
    },
    /// Fetch the rendered listing for a category
    Category {
        /// Slug of the category
        slug: String,
        /// Pagination token passed through to the API
        #[arg(long)]
        page: Option<String>,
    },
    /// Fetch the rendered listing for an author
    Author {
        /// Slug of the author
        slug: String,
        /// Pagination token passed through to the API
        #[arg(long)]
        page: Option<String>,
    },
    /// Fetch the blog's XML sitemap
    Sitemap,
    /// Fetch an RSS feed: blog-wide by default, or scoped to one category
    /// or one author
    Feed {
        /// Restrict the feed to this category slug
        #[arg(long, conflicts_with = "author")]
        category: Option<String>,
        /// Restrict the feed to this author slug
        #[arg(long)]
        author: Option<String>,
    },
}
