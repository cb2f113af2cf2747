//! Replay pre-chat form inputs from the command line.
//!
//! Loads a deployment configuration, applies each `--set NAME=VALUE` as a
//! field input followed by a blur, submits, and writes the `prechatsubmit`
//! payload. Validation failures and redirects exit non-zero.

use std::fmt::Write as FmtWrite;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use serde_json::Value;

use prechat_form::{
    DocumentFormat, FormCommand, FormController, OutputDestination, OutputOptions,
    PrechatPayload, PreChatUI, SubmitOutcome, apply_command, emit, parse_document_any,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    name = "prechat",
    version,
    about = "Validate and submit a pre-chat form from the command line"
)]
struct Cli {
    /// Deployment configuration: file path, inline payload, or "-" for stdin
    #[arg(short = 'c', long = "config", value_name = "SOURCE")]
    config: Option<String>,

    /// Bare field list used instead of a full configuration
    #[arg(long = "fields", value_name = "SOURCE", conflicts_with = "config")]
    fields: Option<String>,

    /// Field input as NAME=VALUE. Repeat for each field.
    #[arg(short = 's', long = "set", value_name = "NAME=VALUE", action = ArgAction::Append)]
    inputs: Vec<String>,

    /// Output destinations ("-" writes to stdout)
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Emit compact JSON/TOML rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Overwrite output files even if they already exist
    #[arg(short = 'f', long = "force")]
    force: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "prechat_form=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let commands = parse_inputs(&cli.inputs)?;
    let output = build_output_options(&cli)?;

    let mut form = build_form(&cli)?;
    let mut sent: Vec<PrechatPayload> = Vec::new();
    for command in commands {
        apply_command(&mut form, command, &mut sent);
    }

    match apply_command(&mut form, FormCommand::Submit, &mut sent) {
        Some(SubmitOutcome::Submitted) => {
            let Some(payload) = sent.last() else {
                return Err(eyre!("form submitted without a payload"));
            };
            emit(payload, &output).map_err(Report::msg)?;
            Ok(())
        }
        Some(SubmitOutcome::Redirected) => {
            let message = form.redirect_message().unwrap_or_default();
            Err(eyre!(
                "submission blocked ({}): {message}",
                form.journey_branch()
            ))
        }
        _ => Err(eyre!(describe_errors(&form))),
    }
}

fn build_form(cli: &Cli) -> Result<FormController> {
    if let Some(source) = cli.fields.as_deref() {
        let fields = load_value(source, "fields")?;
        return PreChatUI::new(Value::Null)
            .build_from_fields(&fields)
            .map_err(Report::msg);
    }
    let configuration = match cli.config.as_deref() {
        Some(source) => load_value(source, "config")?,
        None => Value::Null,
    };
    Ok(PreChatUI::new(configuration).build())
}

fn parse_inputs(raw: &[String]) -> Result<Vec<FormCommand>> {
    let mut commands = Vec::with_capacity(raw.len() * 2);
    for entry in raw {
        let Some((name, value)) = entry.split_once('=') else {
            return Err(eyre!("invalid --set '{entry}': expected NAME=VALUE"));
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(eyre!("invalid --set '{entry}': field name is empty"));
        }
        commands.push(FormCommand::input(name, value));
        commands.push(FormCommand::blur(name));
    }
    Ok(commands)
}

fn describe_errors(form: &FormController) -> String {
    let mut body = String::from("form is not valid:\n");
    for field in form.fields() {
        let message = field.error_message();
        if !message.is_empty() {
            let _ = writeln!(body, "  {}: {message}", field.name());
        }
    }
    body
}

fn load_value(source: &str, label: &str) -> Result<Value> {
    if source == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .wrap_err("failed to read from stdin")?;
        return parse_contents(&buffer, DocumentFormat::default(), label);
    }

    let path = PathBuf::from(source);
    let format = DocumentFormat::from_path(&path).unwrap_or_default();
    match fs::read_to_string(&path) {
        Ok(contents) => parse_contents(&contents, format, label),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            parse_contents(source, format, &format!("inline {label}"))
        }
        Err(err) => Err(Report::new(err)
            .wrap_err(format!("failed to load {label} from {}", path.display()))),
    }
}

fn parse_contents(contents: &str, format: DocumentFormat, label: &str) -> Result<Value> {
    parse_document_any(contents, format).map_err(|err| {
        eyre!(
            "failed to parse {label}: tried {} (first error: {err:#})",
            format_list()
        )
    })
}

fn format_list() -> String {
    let items: Vec<String> = DocumentFormat::available_formats()
        .into_iter()
        .map(|fmt| fmt.to_string())
        .collect();
    items.join(", ")
}

fn build_output_options(cli: &Cli) -> Result<OutputOptions> {
    let mut destinations = Vec::new();
    for raw in &cli.outputs {
        if raw.trim().is_empty() {
            return Err(eyre!("output destination cannot be empty"));
        }
        if raw == "-" {
            destinations.push(OutputDestination::Stdout);
        } else {
            destinations.push(OutputDestination::file(raw));
        }
    }
    if destinations.is_empty() {
        destinations.push(OutputDestination::Stdout);
    }

    let mut format: Option<DocumentFormat> = None;
    for destination in &destinations {
        let OutputDestination::File(path) = destination else {
            continue;
        };
        ensure_available(path, cli.force)?;
        let Some(detected) = DocumentFormat::from_path(path) else {
            return Err(eyre!(
                "cannot infer format from output file {}; use .json/.yaml/.toml",
                path.display()
            ));
        };
        match format {
            Some(existing) if existing != detected => {
                return Err(eyre!(
                    "output file {} uses {detected} but other destinations use {existing}; align extensions",
                    path.display()
                ));
            }
            _ => format = Some(detected),
        }
    }

    Ok(OutputOptions::new(format.unwrap_or_default())
        .with_pretty(!cli.no_pretty)
        .with_destinations(destinations))
}

fn ensure_available(path: &Path, force: bool) -> Result<()> {
    if !force && path.exists() {
        return Err(eyre!(
            "file {} already exists (pass --force to overwrite)",
            path.display()
        ));
    }
    Ok(())
}
