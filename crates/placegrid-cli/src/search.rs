//! `placegrid search`: run the engine and emit a JSON report.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Args;
use placegrid_core::{AppConfig, EnrichedEntity, WebsiteKind};
use placegrid_places::PlacesClient;
use placegrid_search::{SearchEngine, SearchRequest, SearchSettings};
use serde::Serialize;
use uuid::Uuid;

use crate::progress::TerminalObserver;

#[derive(Debug, Args)]
pub(crate) struct SearchArgs {
    /// Free-text query, e.g. "cotillones"
    #[arg(long)]
    pub query: String,
    /// Location to geocode, e.g. "Recoleta, Buenos Aires"
    #[arg(long)]
    pub location: String,
    /// Points per side of the top-level grid (defaults to PLACEGRID_GRID_SIZE)
    #[arg(long)]
    pub grid_size: Option<usize>,
    /// Search radius in metres (defaults to PLACEGRID_RADIUS_M)
    #[arg(long)]
    pub radius: Option<u32>,
    /// Recursion ceiling for subdivision (defaults to PLACEGRID_MAX_DEPTH)
    #[arg(long)]
    pub max_depth: Option<u32>,
    /// Write the report here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Skip the details stage and report bare ids
    #[arg(long)]
    pub ids_only: bool,
}

impl SearchArgs {
    pub(crate) fn to_request(&self, config: &AppConfig) -> SearchRequest {
        let mut request =
            SearchRequest::new(&self.query, &self.location).with_config_defaults(config);
        if let Some(grid_size) = self.grid_size {
            request = request.with_grid_size(grid_size);
        }
        if let Some(radius) = self.radius {
            request = request.with_radius_m(radius);
        }
        if let Some(max_depth) = self.max_depth {
            request = request.with_max_depth(max_depth);
        }
        request
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ReportEntity {
    #[serde(flatten)]
    pub entity: EnrichedEntity,
    pub website_kind: WebsiteKind,
}

/// The JSON document written at the end of a search.
#[derive(Debug, Serialize)]
pub(crate) struct RunReport {
    pub run_id: Uuid,
    pub query: String,
    pub location: String,
    pub generated_at: DateTime<Utc>,
    pub grid_size: usize,
    pub radius_m: u32,
    pub max_depth: u32,
    pub entity_count: usize,
    pub entities: Vec<ReportEntity>,
}

impl RunReport {
    pub(crate) fn new(request: &SearchRequest, entities: Vec<EnrichedEntity>) -> Self {
        let entities: Vec<ReportEntity> = entities
            .into_iter()
            .map(|entity| ReportEntity {
                website_kind: entity.website_kind(),
                entity,
            })
            .collect();
        Self {
            run_id: Uuid::new_v4(),
            query: request.query.clone(),
            location: request.location.clone(),
            generated_at: Utc::now(),
            grid_size: request.grid_size,
            radius_m: request.radius_m,
            max_depth: request.max_depth,
            entity_count: entities.len(),
            entities,
        }
    }
}

pub(crate) fn places_client(config: &AppConfig) -> anyhow::Result<PlacesClient> {
    PlacesClient::with_base_url(
        &config.places_api_key,
        config.request_timeout_secs,
        &config.user_agent,
        &config.api_base_url,
    )
    .map_err(|e| anyhow::anyhow!("failed to build places client: {e}"))
}

/// Runs one search and writes its report.
///
/// # Errors
///
/// Returns an error if the location cannot be resolved or the report cannot
/// be written. Point and details failures are logged by the engine and only
/// shrink the report.
pub(crate) async fn run_search(config: &AppConfig, args: &SearchArgs) -> anyhow::Result<()> {
    let client = places_client(config)?;
    let engine = SearchEngine::new(client, SearchSettings::from_config(config))
        .with_observer(TerminalObserver);
    let request = args.to_request(config);

    let entities: Vec<EnrichedEntity> = if args.ids_only {
        engine
            .search_ids(&request)
            .await?
            .into_iter()
            .map(|r| EnrichedEntity {
                entity_id: r.entity_id,
                ..EnrichedEntity::default()
            })
            .collect()
    } else {
        engine.run(&request).await?
    };

    let report = RunReport::new(&request, entities);
    let json = serde_json::to_string_pretty(&report)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, json).map_err(|e| {
                anyhow::anyhow!("failed to write report to {}: {e}", path.display())
            })?;
            eprintln!(
                "wrote {} entities to {}",
                report.entity_count,
                path.display()
            );
        }
        None => println!("{json}"),
    }

    tracing::info!(
        run_id = %report.run_id,
        entity_count = report.entity_count,
        "search finished"
    );
    Ok(())
}
