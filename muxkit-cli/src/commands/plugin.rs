//! Plugin registry commands

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use muxkit_core::{CommandTable, FormatTable, PluginHost};
use muxkit_plugin_api::{CommandArgs, CommandContext, FormatContext, NotifyEntry, Plugin};
use serde::Serialize;

use crate::config::PluginsConfig;

/// Plugin registry arguments
#[derive(Args)]
pub struct PluginArgs {
    #[command(subcommand)]
    pub command: PluginCommands,
}

/// Plugin subcommands
#[derive(Subcommand)]
pub enum PluginCommands {
    /// List registered plugins as a comma-separated line
    List {
        /// Show one row per plugin with its kind
        #[arg(long)]
        long: bool,
        /// Print the listing as JSON
        #[arg(long, conflicts_with = "long")]
        json: bool,
    },
    /// Load a single plugin library (path must be absolute)
    #[command(alias = "reg")]
    Register {
        /// Absolute path to the .so file
        path: PathBuf,
    },
    /// Load every plugin library in a directory
    #[command(alias = "reg-dir")]
    RegisterDir {
        /// Directory to scan
        dir: PathBuf,
    },
    /// Call a format function
    Call {
        /// Function name
        name: String,
        /// Argument passed to the function
        #[arg(default_value = "")]
        arg: String,
    },
    /// Deliver an event to notification plugins
    Notify {
        /// Event name, e.g. window-renamed
        event: String,
        #[arg(long)]
        session: Option<String>,
        #[arg(long)]
        window: Option<String>,
        #[arg(long)]
        pane: Option<String>,
    },
    /// Run a plugin-provided command
    Exec {
        /// Command name or alias
        command: String,
        /// Positional arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Render plugin-provided format variables
    Formats {
        /// Known variable, as key=value (repeatable)
        #[arg(long = "var", value_parser = parse_key_value)]
        vars: Vec<(String, String)>,
    },
}

/// One row of `plugin list --json`
#[derive(Debug, Serialize)]
struct PluginRow {
    index: usize,
    kind: &'static str,
    name: &'static str,
}

/// Run plugin command
pub fn run(args: PluginArgs, config: &PluginsConfig) -> Result<()> {
    let mut host = PluginHost::init(&config.host_config());

    match args.command {
        PluginCommands::List { long, json } => list_plugins(&host, long, json),
        PluginCommands::Register { path } => register_plugin(&mut host, path),
        PluginCommands::RegisterDir { dir } => register_plugin_dir(&mut host, dir),
        PluginCommands::Call { name, arg } => call_function(&host, &name, &arg),
        PluginCommands::Notify {
            event,
            session,
            window,
            pane,
        } => notify(
            &host,
            NotifyEntry {
                name: event,
                session,
                window,
                pane,
            },
        ),
        PluginCommands::Exec { command, args } => exec_command(&host, &command, args),
        PluginCommands::Formats { vars } => render_formats(&host, vars),
    }
}

fn rows(host: &PluginHost) -> Vec<PluginRow> {
    host.store()
        .iter()
        .enumerate()
        .map(|(index, plugin)| PluginRow {
            index,
            kind: plugin.kind().as_str(),
            name: plugin.display_name(),
        })
        .collect()
}

fn list_plugins(host: &PluginHost, long: bool, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&rows(host))?);
        return Ok(());
    }

    if !long {
        println!("{}", host.plugin_list());
        return Ok(());
    }

    if host.store().is_empty() {
        println!("No plugins registered");
        println!();
        println!("Plugin directories:");
        println!("  {}", muxkit_paths::SYSTEM_PLUGIN_DIR);
        println!("  ~/{}", muxkit_paths::USER_PLUGIN_SUBDIR);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("#").fg(Color::Cyan),
        Cell::new("Kind").fg(Color::Cyan),
        Cell::new("Name").fg(Color::Cyan),
        Cell::new("Details").fg(Color::Cyan),
    ]);

    for (index, plugin) in host.store().iter().enumerate() {
        table.add_row(vec![
            Cell::new(index),
            Cell::new(plugin.kind()),
            Cell::new(plugin.display_name()),
            Cell::new(details(plugin)),
        ]);
    }

    println!("{table}");
    Ok(())
}

fn details(plugin: &Plugin) -> String {
    match plugin {
        Plugin::Command(entry) => match entry.alias {
            Some(alias) => format!("alias {alias}, usage: {} {}", entry.name, entry.usage),
            None => format!("usage: {} {}", entry.name, entry.usage),
        },
        Plugin::Format(format) => format!("#{{{}}}", format.name),
        Plugin::FormatFunction(function) => format!("#{{f:{}:...}}", function.name),
        Plugin::Notification(notification) => match notification.event {
            Some(event) => format!("on {event}"),
            None => "on every event".to_string(),
        },
        Plugin::Multi(children) => format!("{} children", children.len()),
    }
}

fn register_plugin(host: &mut PluginHost, path: PathBuf) -> Result<()> {
    match host.register_plugin(&path) {
        Ok(added) => {
            println!("Registered {} plugin(s) from {}", added, path.display());
            println!("{}", host.plugin_list());
            Ok(())
        }
        Err(e @ muxkit_core::PluginHostError::RelativePath { .. }) => bail!("{e}"),
        Err(e) => bail!("register-plugin failed: \"{e}\"."),
    }
}

fn register_plugin_dir(host: &mut PluginHost, dir: PathBuf) -> Result<()> {
    let added = host.register_plugin_dir(&dir);
    println!("Registered {} plugin(s) from {}", added, dir.display());
    println!("{}", host.plugin_list());
    Ok(())
}

fn call_function(host: &PluginHost, name: &str, arg: &str) -> Result<()> {
    println!("{}", host.call_function(name, arg));
    Ok(())
}

fn notify(host: &PluginHost, entry: NotifyEntry) -> Result<()> {
    tracing::debug!(event = %entry.name, "Delivering notification");
    host.notify(&entry);
    Ok(())
}

fn exec_command(host: &PluginHost, command: &str, args: Vec<String>) -> Result<()> {
    let table = CommandTable::from_store(host.store());
    let mut ctx = CommandContext::new();

    let result = table.execute(command, &CommandArgs::new(args), &mut ctx)?;

    for line in ctx.output() {
        println!("{line}");
    }
    for line in ctx.errors() {
        eprintln!("{line}");
    }

    if result.exit_code() != 0 {
        bail!("command {command} returned an error");
    }
    Ok(())
}

fn render_formats(host: &PluginHost, vars: Vec<(String, String)>) -> Result<()> {
    let table = FormatTable::from_store(host.store());
    let ctx: FormatContext = vars.into_iter().collect();

    for (name, value) in table.render(&ctx) {
        println!("{name}={value}");
    }
    Ok(())
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{s}'"))
}
