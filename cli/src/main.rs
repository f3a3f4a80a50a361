use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use win_unc_config::DriveConfig;
use win_unc_core::{
    UncDirectory, connect_args, disconnect_args, is_unc_path, parse_unc_directory,
    render_command_line,
};
use win_unc_netuse::output::{OutputFormat, format_table};
use win_unc_netuse::{NetUseTable, parse_net_use_table};

#[derive(Debug, Parser)]
#[command(name = "win-unc")]
#[command(about = "Inspect NET USE output and UNC addresses offline")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse captured NET USE output from stdin.
    ParseStdin(ParseStdinArgs),
    /// Parse captured NET USE output from a file.
    ParseFile(ParseFileArgs),
    /// Show how an address string is split into path and credentials.
    Address(AddressArgs),
    /// Compare configured drives against captured NET USE output.
    Status(StatusArgs),
    /// Print the NET USE commands that connect the configured drives.
    ConnectCommands(ConfigArgs),
    /// Print the NET USE commands that disconnect the configured drives.
    DisconnectCommands(ConfigArgs),
}

#[derive(Debug, Args)]
struct ParseStdinArgs {
    /// Output format.
    #[arg(long, default_value = "table")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct ParseFileArgs {
    /// Path to a file containing NET USE output.
    #[arg(long)]
    input: PathBuf,
    /// Output format.
    #[arg(long, default_value = "table")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct AddressArgs {
    /// Address in `[username][:password]@\\host\share` form.
    address: String,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct StatusArgs {
    /// Path to the drive configuration YAML.
    #[arg(long)]
    config: PathBuf,
    /// Path to a file containing NET USE output.
    #[arg(long)]
    input: PathBuf,
    /// Output format.
    #[arg(long, default_value = "table")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct ConfigArgs {
    /// Path to the drive configuration YAML.
    #[arg(long)]
    config: PathBuf,
}

#[derive(Debug, Serialize)]
struct AddressReport {
    path: String,
    normalized_path: String,
    is_unc: bool,
    username: Option<String>,
    has_password: bool,
}

impl AddressReport {
    fn new(directory: &UncDirectory) -> Self {
        Self {
            path: directory.path().to_string(),
            normalized_path: directory.normalized_path(),
            is_unc: is_unc_path(directory.path()),
            username: directory.username().map(String::from),
            has_password: directory.password().is_some(),
        }
    }

    fn to_text(&self) -> String {
        format!(
            "path:            {}\nnormalized path: {}\nunc:             {}\nusername:        {}\npassword:        {}\n",
            self.path,
            self.normalized_path,
            if self.is_unc { "yes" } else { "no" },
            self.username.as_deref().unwrap_or("(none)"),
            if self.has_password { "(set)" } else { "(none)" },
        )
    }
}

#[derive(Debug, Serialize)]
struct DriveStatus {
    local: Option<String>,
    remote: String,
    connected: bool,
    status: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::ParseStdin(args) => run_parse_stdin(args),
        Command::ParseFile(args) => run_parse_file(args),
        Command::Address(args) => run_address(args),
        Command::Status(args) => run_status(args),
        Command::ConnectCommands(args) => run_connect_commands(args),
        Command::DisconnectCommands(args) => run_disconnect_commands(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_parse_stdin(args: ParseStdinArgs) -> Result<(), String> {
    let mut output = String::new();
    std::io::stdin()
        .read_to_string(&mut output)
        .map_err(|err| format!("Failed to read stdin: {err}"))?;
    print_table(&output, args.format)
}

fn run_parse_file(args: ParseFileArgs) -> Result<(), String> {
    let output = read_input(&args.input)?;
    print_table(&output, args.format)
}

fn print_table(output: &str, format: OutputFormat) -> Result<(), String> {
    let table = parse_table(output)?;
    print!("{}", with_trailing_newline(format_table(&table, format)?));
    Ok(())
}

fn run_address(args: AddressArgs) -> Result<(), String> {
    let report = AddressReport::new(&parse_unc_directory(&args.address));
    let rendered =
        format_serializable(&report, format_or_text(args.format), || report.to_text())?;
    print!("{}", with_trailing_newline(rendered));
    Ok(())
}

fn run_status(args: StatusArgs) -> Result<(), String> {
    let config = load_config(&args.config)?;
    let output = read_input(&args.input)?;
    let table = parse_table(&output)?;

    let statuses = drive_statuses(&config, &table);
    let rendered = format_serializable(&statuses, format_or_text(args.format), || {
        statuses_to_text(&statuses)
    })?;
    print!("{}", with_trailing_newline(rendered));
    Ok(())
}

fn run_connect_commands(args: ConfigArgs) -> Result<(), String> {
    let config = load_config(&args.config)?;
    for mapping in &config.drives {
        let net_args = connect_args(
            &mapping.directory(),
            mapping.local.as_deref(),
            config.persistent,
        );
        println!("{}", render_command_line(&net_args));
    }
    Ok(())
}

fn run_disconnect_commands(args: ConfigArgs) -> Result<(), String> {
    let config = load_config(&args.config)?;
    for mapping in &config.drives {
        let directory = mapping.directory();
        let target = mapping.local.as_deref().unwrap_or(directory.path());
        println!("{}", render_command_line(&disconnect_args(target)));
    }
    Ok(())
}

fn drive_statuses(config: &DriveConfig, table: &NetUseTable) -> Vec<DriveStatus> {
    config
        .drives
        .iter()
        .map(|mapping| {
            let remote = mapping.directory().normalized_path();
            let rows = table.get_matching_rows(mapping.local.as_deref(), Some(&remote), None);
            let status = rows.first().map(|row| row.status().to_string());
            DriveStatus {
                local: mapping.local.clone(),
                remote,
                connected: !rows.is_empty(),
                status,
            }
        })
        .collect()
}

fn statuses_to_text(statuses: &[DriveStatus]) -> String {
    let mut out = String::new();
    for status in statuses {
        let state = match (&status.status, status.connected) {
            (Some(state), true) => state.as_str(),
            _ => "missing",
        };
        out.push_str(&format!(
            "{:<4} {} [{state}]\n",
            status.local.as_deref().unwrap_or("-"),
            status.remote
        ));
    }
    out
}

fn load_config(path: &Path) -> Result<DriveConfig, String> {
    let config = DriveConfig::load(path)
        .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))?;
    config
        .validate()
        .map_err(|err| format!("Invalid config '{}': {err}", path.display()))?;
    Ok(config)
}

fn parse_table(output: &str) -> Result<NetUseTable, String> {
    parse_net_use_table(output).map_err(|err| format!("Failed to parse NET USE output: {err}"))
}

fn read_input(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("Failed to read '{}': {err}", path.display()))
}

/// Markdown and plain tables collapse into the same text rendering for
/// non-tabular reports.
fn format_or_text(format: OutputFormat) -> Option<OutputFormat> {
    match format {
        OutputFormat::Json | OutputFormat::Yaml => Some(format),
        OutputFormat::Markdown | OutputFormat::Table => None,
    }
}

fn format_serializable<T: Serialize>(
    value: &T,
    format: Option<OutputFormat>,
    text: impl FnOnce() -> String,
) -> Result<String, String> {
    match format {
        Some(OutputFormat::Json) => serde_json::to_string_pretty(value)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        Some(OutputFormat::Yaml) => {
            serde_yaml::to_string(value).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        _ => Ok(text()),
    }
}

fn with_trailing_newline(mut rendered: String) -> String {
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    rendered
}
