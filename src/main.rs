use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use job_lineage::config::{ModelConfig, ParentRef};
use job_lineage::lister::{load_objects, ObjectStore};
use job_lineage::model::JobModel;
use job_lineage::render::{JobRenderer, Renderer, Row};
use job_lineage::shutdown::install_shutdown_handler;

#[derive(Parser, Debug)]
#[command(name = "job-lineage")]
#[command(version)]
#[command(about = "List the Jobs spawned by a CronJob")]
struct Args {
    /// Job list document, as printed by `kubectl get jobs -o json`
    #[arg(long, short = 'f')]
    file: PathBuf,

    /// CronJob path (format: "namespace/name")
    #[arg(long)]
    path: Option<String>,

    /// CronJob uid. Without it every listed Job is shown.
    #[arg(long)]
    parent_uid: Option<String>,

    /// Namespace to list. Defaults to the CronJob's namespace.
    #[arg(long, short = 'n')]
    namespace: Option<String>,

    /// Output format
    #[arg(long, short = 'o', default_value = "table")]
    output: OutputFormat,
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let parent = ParentRef::new(args.parent_uid, args.path)?;
    let namespace = args
        .namespace
        .unwrap_or_else(|| parent.parent_namespace().to_string());

    let objects = load_objects(&args.file).await?;
    tracing::debug!(file = %args.file.display(), count = objects.len(), "Loaded objects");

    let store = ObjectStore::with_objects(objects).await;
    let model = JobModel::new(Arc::new(store), ModelConfig::new(namespace));
    let cancel = install_shutdown_handler();

    let jobs = model.list(&parent, &cancel).await?;
    let renderer = JobRenderer::new();
    let rows = model.hydrate(&jobs, &renderer)?;

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Table => print_table(&renderer.header(), &rows),
    }

    Ok(())
}

fn print_table(header: &[&str], rows: &[Row]) {
    if rows.is_empty() {
        println!("No jobs found.");
        return;
    }

    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, field) in widths.iter_mut().zip(&row.fields) {
            *width = (*width).max(field.len());
        }
    }

    println!("{}", format_line(header, &widths));
    for row in rows {
        let cells: Vec<&str> = row.fields.iter().map(String::as_str).collect();
        println!("{}", format_line(&cells, &widths));
    }
    println!();
    println!("{} jobs", rows.len());
}

fn format_line(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("   ")
        .trim_end()
        .to_string()
}
