//! Page preview tool.
//!
//! Reads backend API responses from JSON files, maps them into a page model
//! and prints the page JSON the renderer would receive.
//!
//! ```bash
//! dataset-pages versions --dataset dataset.json --versions versions.json
//! dataset-pages landing --dataset dataset.json --version v3.json --options aggregate.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

use dataset_pages::config::{self, Config};
use dataset_pages::mapper::{
    map_create_custom_dataset, map_feedback, map_filterable_landing, map_versions_list,
};
use dataset_pages::model::page::{
    CREATE_CUSTOM_DATASET_TYPE, FEEDBACK_TYPE, FILTERABLE_LANDING_TYPE, VERSIONS_LIST_TYPE,
};
use dataset_pages::model::{FeedbackForm, Page, TaxonomyNode};
use dataset_pages::upstream::{
    DatasetDetails, DimensionOptions, ItemList, PopulationTypeItem, VersionDetails,
};

#[derive(Debug, Parser)]
#[command(name = "dataset-pages", version, about = "Preview dataset page models as JSON")]
struct Cli {
    /// Page language; falls back to DEFAULT_LANGUAGE when unsupported.
    #[arg(long, global = true)]
    language: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Filterable landing page of one dataset version.
    Landing {
        #[arg(long)]
        dataset: PathBuf,
        #[arg(long)]
        version: PathBuf,
        /// Dimension option lists, one file per dimension.
        #[arg(long = "options")]
        options: Vec<PathBuf>,
        #[arg(long, default_value_t = 1)]
        total_versions: usize,
    },
    /// Versions list of one dataset edition.
    Versions {
        #[arg(long)]
        dataset: PathBuf,
        #[arg(long)]
        versions: PathBuf,
    },
    /// Create custom dataset page.
    CustomDataset {
        #[arg(long)]
        population_types: PathBuf,
    },
    /// Feedback page for a submitted form.
    Feedback {
        #[arg(long)]
        form: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = config::load_from_env()?;
    init_tracing(&config);
    config.print_summary();

    let json = render(&cli, &config)?;
    println!("{json}");

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

fn base_page(cli: &Cli, config: &Config, page_type: &str, uri: String) -> Page {
    let page = Page::new(config, page_type, uri);
    match &cli.language {
        Some(language) => page.with_language(config, language),
        None => page,
    }
}

fn render(cli: &Cli, config: &Config) -> Result<String> {
    let home = TaxonomyNode::new("Home", "/");

    let json = match &cli.command {
        Command::Landing {
            dataset,
            version,
            options,
            total_versions,
        } => {
            let dataset: DatasetDetails = read_json(dataset)?;
            let version: VersionDetails = read_json(version)?;
            let options = options
                .iter()
                .map(|path| read_json::<DimensionOptions>(path))
                .collect::<Result<Vec<_>>>()?;

            let uri = format!("/datasets/{}", dataset.id);
            let page = base_page(cli, config, FILTERABLE_LANDING_TYPE, uri)
                .with_title(dataset.title.clone())
                .with_description(dataset.description.clone())
                .with_breadcrumb(vec![home]);

            map_filterable_landing(page, &dataset, &version, &options, *total_versions)?
                .to_json_pretty()?
        }
        Command::Versions { dataset, versions } => {
            let dataset: DatasetDetails = read_json(dataset)?;
            let versions: ItemList<VersionDetails> = read_json(versions)?;

            let uri = format!("/datasets/{}/versions", dataset.id);
            let page = base_page(cli, config, VERSIONS_LIST_TYPE, uri)
                .with_title(format!("{}: all versions", dataset.title))
                .with_breadcrumb(vec![
                    home,
                    TaxonomyNode::new(dataset.title.clone(), format!("/datasets/{}", dataset.id)),
                ]);

            map_versions_list(page, &dataset, versions.items, &config.feedback_url)?
                .to_json_pretty()?
        }
        Command::CustomDataset { population_types } => {
            let items: ItemList<PopulationTypeItem> = read_json(population_types)?;

            let uri = "/datasets/create".to_string();
            let page = base_page(cli, config, CREATE_CUSTOM_DATASET_TYPE, uri)
                .with_title("Create a custom dataset")
                .with_breadcrumb(vec![home]);

            map_create_custom_dataset(page, items.items).to_json_pretty()?
        }
        Command::Feedback { form } => {
            let form: FeedbackForm = read_json(form)?;

            let page = base_page(cli, config, FEEDBACK_TYPE, "/feedback".to_string())
                .with_title("Feedback")
                .with_search_disabled(true)
                .with_breadcrumb(vec![home]);

            map_feedback(page, form).to_json_pretty()?
        }
    };

    tracing::debug!(bytes = json.len(), "Rendered page model");
    Ok(json)
}
