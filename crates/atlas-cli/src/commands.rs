use std::env;

use anyhow::{Context, Result};
use atlas_ingest::{DataSource, FileSource, HttpSource};
use atlas_model::indicator;
use serde::Serialize;
use tracing::info;

use atlas_cli::config::{API_URL_ENV, AtlasConfig, ConfigOverrides, SourceChoice};
use atlas_cli::pipeline::AtlasContext;
use atlas_cli::summary::{
    catalog_table, print_indicators, print_insights, print_latest, print_series,
};

use crate::cli::{IndicatorsArgs, InsightsArgs, LatestArgs, OutputArgs, SeriesArgs, SourceArgs};

/// Resolves configuration and opens the data source it names.
pub fn open_context(args: &SourceArgs) -> Result<AtlasContext> {
    let config = AtlasConfig::load(args.config.as_deref())?
        .with_env_api_url(env::var(API_URL_ENV).ok())
        .with_overrides(ConfigOverrides {
            api_base_url: args.api_url.clone(),
            data_dir: args.data_dir.clone(),
            timeout_secs: args.timeout_secs,
        });

    let source: Box<dyn DataSource> = match config.source_choice()? {
        SourceChoice::Offline { dir } => {
            info!(dir = %dir.display(), "using offline data directory");
            Box::new(FileSource::new(dir))
        }
        SourceChoice::Api { base_url, timeout } => {
            info!(%base_url, "using backend API");
            Box::new(HttpSource::new(base_url, timeout).context("create HTTP client")?)
        }
    };
    Ok(AtlasContext::new(source, config.max_compare))
}

pub fn run_catalog(output: OutputArgs) -> Result<()> {
    if output.json {
        let rows: Vec<CatalogRow> = indicator::catalog()
            .iter()
            .map(|spec| CatalogRow {
                code: spec.code,
                backend_prefix: spec.backend_prefix,
                title: spec.chart_title,
                map_label: spec.map_label,
            })
            .collect();
        return print_json(&rows);
    }
    println!("{}", catalog_table(indicator::catalog()));
    Ok(())
}

#[derive(Serialize)]
struct CatalogRow {
    code: &'static str,
    backend_prefix: &'static str,
    title: &'static str,
    map_label: &'static str,
}

pub fn run_series(context: &AtlasContext, args: &SeriesArgs) -> Result<()> {
    let report = context.series(&args.country, &args.compare, &args.indicator)?;
    if args.output.json {
        print_json(&report.rows)
    } else {
        print_series(&report);
        Ok(())
    }
}

pub fn run_indicators(context: &AtlasContext, args: &IndicatorsArgs) -> Result<()> {
    let report = context.indicators(&args.country, &args.indicators)?;
    if args.output.json {
        print_json(&report)
    } else {
        print_indicators(&report);
        Ok(())
    }
}

pub fn run_latest(context: &AtlasContext, args: &LatestArgs) -> Result<()> {
    let report = context.latest(&args.indicator);
    if args.output.json {
        print_json(&report)
    } else {
        print_latest(&report);
        Ok(())
    }
}

pub fn run_insights(context: &AtlasContext, args: &InsightsArgs) -> Result<()> {
    let report = context.insights(&args.country, &args.indicator);
    if args.output.json {
        print_json(&report)
    } else {
        print_insights(&report);
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{text}");
    Ok(())
}
