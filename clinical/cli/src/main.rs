//! Clinical CLI - call the clinical services from the command line

mod error;
mod flags;

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use clinical_sdk::testing::RecordingExecutor;
use clinical_sdk::{
    ANNOTATOR_FOR_CLINICAL_DATA, INSIGHTS_FOR_MEDICAL_LITERATURE, OperationSpec, ParamRole,
    Service, ServiceSpec,
};
use tracing::{debug, info};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::CliError;

const DEFAULT_API_VERSION: &str = "2023-03-31";

#[derive(Parser)]
#[command(name = "clinical")]
#[command(about = "Call the clinical data and medical literature services", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    log_verbosity: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the operations of one or both services
    Operations {
        #[arg(value_enum, value_name = "SERVICE")]
        service: Option<ServiceName>,
    },

    /// Show the parameters of an operation
    Describe {
        #[arg(value_enum, value_name = "SERVICE")]
        service: ServiceName,

        /// Operation id, e.g. `getProfile`
        #[arg(value_name = "OPERATION")]
        operation: String,
    },

    /// Call an operation and print the response as JSON
    ///
    /// Credentials are read from the environment, e.g.
    /// `ANNOTATOR_FOR_CLINICAL_DATA_BEARER_TOKEN` or
    /// `INSIGHTS_FOR_MEDICAL_LITERATURE_APIKEY`.
    Call {
        #[arg(value_enum, value_name = "SERVICE")]
        service: ServiceName,

        #[arg(value_name = "OPERATION")]
        operation: String,

        /// Parameter as NAME=VALUE (JSON if it parses, `@path` reads a file)
        #[arg(short, long = "arg", value_name = "NAME=VALUE")]
        args: Vec<String>,

        /// Extra request header as NAME:VALUE
        #[arg(short = 'H', long = "header", value_name = "NAME:VALUE")]
        headers: Vec<String>,

        /// API version date (YYYY-MM-DD)
        #[arg(long, default_value = DEFAULT_API_VERSION)]
        api_version: String,

        /// Override the service URL
        #[arg(long, value_name = "URL")]
        url: Option<String>,

        /// Print the request that would be sent instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ServiceName {
    /// Annotator for Clinical Data
    #[value(alias = "acd")]
    Annotator,
    /// Insights for Medical Literature
    #[value(alias = "iml")]
    Insights,
}

impl ServiceName {
    fn spec(self) -> &'static ServiceSpec {
        match self {
            Self::Annotator => &ANNOTATOR_FOR_CLINICAL_DATA,
            Self::Insights => &INSIGHTS_FOR_MEDICAL_LITERATURE,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Annotator => "annotator",
            Self::Insights => "insights",
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_verbosity, cli.json);

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            err.exit_code()
        }
    }
}

async fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Operations { service } => {
            let services = match service {
                Some(service) => vec![service],
                None => vec![ServiceName::Annotator, ServiceName::Insights],
            };
            for service in services {
                print!("{}", render_operations(service.spec()));
            }
            Ok(())
        }
        Commands::Describe { service, operation } => {
            let spec = find_operation(service, &operation)?;
            print!("{}", render_operation(spec));
            Ok(())
        }
        Commands::Call {
            service,
            operation,
            args,
            headers,
            api_version,
            url,
            dry_run,
        } => {
            find_operation(service, &operation)?;
            let call = flags::call_arguments(&args, &headers)?;

            let mut builder = Service::builder(service.spec(), api_version);
            if let Some(url) = url {
                builder = builder.service_url(url);
            }

            if dry_run {
                let client: Service = builder.executor(RecordingExecutor::new()).build()?;
                let request = client.prepare(&operation, Some(call))?;
                info!(operation = %operation, "dry run, nothing sent");
                println!("{}", serde_json::to_string_pretty(&request)?);
                return Ok(());
            }

            let client: Service = builder.build()?;
            debug!(service = client.spec().name, url = %client.config().service_url, "calling");
            let response = client.invoke(&operation, Some(call)).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
    }
}

fn find_operation(service: ServiceName, operation: &str) -> Result<&'static OperationSpec, CliError> {
    service
        .spec()
        .find(operation)
        .ok_or_else(|| CliError::UnknownOperation {
            service: service.label().to_string(),
            operation: operation.to_string(),
        })
}

fn render_operations(spec: &ServiceSpec) -> String {
    let mut out = format!("{} ({})\n", spec.display_name, spec.name);
    let width = spec.operations.iter().map(|op| op.id.len()).max().unwrap_or(0);
    for op in spec.operations {
        out.push_str(&format!(
            "  {:width$}  {:6}  {}\n",
            op.id,
            op.method.to_string(),
            op.path
        ));
    }
    out
}

fn render_operation(op: &OperationSpec) -> String {
    let mut out = format!("{} {}  ({})\n", op.method, op.path, op.id);
    if !op.description.is_empty() {
        out.push_str(&format!("{}\n", op.description));
    }
    if let Some(accept) = op.accept {
        out.push_str(&format!("accept: {accept}\n"));
    }
    if let Some(content_type) = op.content_type {
        out.push_str(&format!("content-type: {content_type}\n"));
    }
    if op.params.is_empty() {
        out.push_str("no parameters\n");
        return out;
    }
    out.push_str("parameters:\n");
    for param in op.params {
        let required = if param.required { "required" } else { "optional" };
        let wire = match param.role {
            ParamRole::Body => String::new(),
            _ if param.wire_name == param.name => String::new(),
            _ => format!(" -> {}", param.wire_name),
        };
        out.push_str(&format!(
            "  {} ({}, {}){}\n",
            param.name, param.role, required, wire
        ));
    }
    out
}

fn init_tracing(verbose: u8, json: bool) {
    // Logs go to stderr so stdout stays parseable JSON.
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,clinical_runtime=info,clinical=info".to_string(),
            2 => "info,clinical_runtime=debug,clinical=debug".to_string(),
            _ => "debug,clinical_runtime=trace,clinical=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn short_aliases_select_services() {
        let cli = Cli::try_parse_from(["clinical", "describe", "acd", "getProfile"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Describe { service: ServiceName::Annotator, .. }
        ));

        let cli = Cli::try_parse_from(["clinical", "operations", "iml"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Operations { service: Some(ServiceName::Insights) }
        ));
    }

    #[test]
    fn call_collects_repeated_flags() {
        let cli = Cli::try_parse_from([
            "clinical", "call", "insights", "getDocumentInfo", "-a", "corpus=c1", "-a",
            "documentId=d1", "-H", "X-Trace: 1", "--dry-run",
        ])
        .unwrap();
        let Commands::Call { args, headers, api_version, dry_run, .. } = cli.command else {
            panic!("expected call");
        };
        assert_eq!(args, vec!["corpus=c1", "documentId=d1"]);
        assert_eq!(headers, vec!["X-Trace: 1"]);
        assert_eq!(api_version, DEFAULT_API_VERSION);
        assert!(dry_run);
    }

    #[test]
    fn unknown_operation_is_a_usage_error() {
        let err = find_operation(ServiceName::Annotator, "getCorpora").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::from(2));
    }

    #[test]
    fn operation_listing_covers_table() {
        let listing = render_operations(&INSIGHTS_FOR_MEDICAL_LITERATURE);
        assert_eq!(listing.lines().count(), 1 + INSIGHTS_FOR_MEDICAL_LITERATURE.operations.len());
        assert!(listing.contains("getRelatedConcepts"));
    }

    #[test]
    fn describe_shows_wire_names() {
        let op = find_operation(ServiceName::Insights, "getDocumentInfo").unwrap();
        let text = render_operation(op);
        assert!(text.contains("documentId (path, required) -> document_id"));
        assert!(text.contains("corpus (path, required)\n"));
    }

    #[tokio::test]
    async fn dry_run_reports_missing_parameters() {
        let err = run(Commands::Call {
            service: ServiceName::Annotator,
            operation: "getProfile".to_string(),
            args: vec![],
            headers: vec![],
            api_version: DEFAULT_API_VERSION.to_string(),
            url: None,
            dry_run: true,
        })
        .await
        .unwrap_err();
        assert!(err.to_string().contains("Missing required parameters: id"));
        assert_eq!(err.exit_code(), ExitCode::from(2));
    }
}
