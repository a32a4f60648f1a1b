//! Command-line interface for the client.

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::dispatch::{
    default_table, directory_list_schema, library_sections_schema, server_list_schema,
    settings_schema, SchemaDispatcher,
};
use crate::error::{ClientError, Result};
use crate::http::HttpClient;
use crate::node::ParserMode;
use crate::parser::ResponseParser;
use crate::schema::Schema;
use crate::types::MediaObject;

/// MediaHub client - query a MediaHub server's remote XML API.
#[derive(Parser)]
#[command(name = "mediahub-client")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a known API path and print the constructed objects.
    Fetch {
        /// Server base URL (e.g. http://localhost:32400)
        server: String,

        /// API path: /, /servers, /library/sections or /:/prefs
        path: String,

        /// Parse the response leniently as HTML instead of strict XML
        #[arg(long)]
        tolerant: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch {
            server,
            path,
            tolerant,
        } => fetch_command(&server, &path, tolerant),
    }
}

/// Resolve a known API path to its stock schema.
fn schema_for_path(path: &str) -> Option<Schema> {
    match path {
        "/" => Some(directory_list_schema()),
        "/servers" => Some(server_list_schema()),
        "/library/sections" => Some(library_sections_schema()),
        "/:/prefs" => Some(settings_schema()),
        _ => None,
    }
}

/// Execute the fetch command.
fn fetch_command(server: &str, path: &str, tolerant: bool) -> Result<()> {
    let schema = schema_for_path(path).ok_or_else(|| ClientError::UnknownPath {
        path: path.to_string(),
    })?;

    let client = HttpClient::new(server)?;
    let mode = if tolerant {
        ParserMode::Tolerant
    } else {
        ParserMode::Strict
    };
    let parser = ResponseParser::new(mode);
    let dispatcher = SchemaDispatcher::new(default_table());

    println!(
        "{} {} from {}",
        style("Fetching").bold(),
        style(path).cyan(),
        style(server).green()
    );
    println!();

    // Progress spinner while the request is in flight
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Waiting for server...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let response = match client.get(path) {
        Ok(response) => response,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    let Some(container) = dispatcher.parse(&client, &parser, &response, &schema)? else {
        println!(
            "{} server answered with status {}",
            style("No payload:").yellow().bold(),
            style(response.status_code).yellow()
        );
        return Ok(());
    };

    print_object(&container.object, 0);

    let mut count = 0usize;
    for child in container.children {
        let child = child?;
        print_object(&child.object, 1);
        count += 1;
    }

    println!();
    println!(
        "{} {} object(s)",
        style("Constructed:").green().bold(),
        count + 1
    );

    Ok(())
}

/// Print one constructed object, indented by depth.
fn print_object(object: &MediaObject, depth: usize) {
    let indent = "  ".repeat(depth);

    match object {
        MediaObject::Container(container) => {
            println!(
                "{indent}{} size={} {}",
                style("MediaContainer").bold(),
                container.size.map_or_else(|| "?".to_string(), |s| s.to_string()),
                container.title.as_deref().unwrap_or_default()
            );
        }
        MediaObject::Server(server) => {
            println!(
                "{indent}{} {} @ {}:{}",
                style("Server").cyan(),
                server.name.as_deref().unwrap_or("(unnamed)"),
                server.host.as_deref().unwrap_or("?"),
                server.port.map_or_else(|| "?".to_string(), |p| p.to_string())
            );
        }
        MediaObject::Directory(directory) => {
            println!(
                "{indent}{} {} (key={})",
                style("Directory").cyan(),
                directory.title.as_deref().unwrap_or("(untitled)"),
                directory.key.as_deref().unwrap_or("?")
            );
        }
        MediaObject::Section(section) => {
            println!(
                "{indent}{} [{}] {} (key={})",
                style("Section").cyan(),
                section.kind.as_str(),
                section.title.as_deref().unwrap_or("(untitled)"),
                section.key.as_deref().unwrap_or("?")
            );
        }
        MediaObject::Setting(setting) => {
            println!(
                "{indent}{} {} = {}",
                style("Setting").cyan(),
                setting.id.as_deref().unwrap_or("(no id)"),
                setting.value.as_deref().unwrap_or("")
            );
        }
    }
}
