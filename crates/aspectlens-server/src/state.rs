//! Shared application state

use crate::config::{ModelKind, ServerConfig};
use aspectlens_analysis::AnalysisEngine;
use aspectlens_model::{LexiconModel, SentimentModel};
use std::sync::Arc;

/// Shared application state.
///
/// Everything here is immutable after startup; requests share it read-only.
#[derive(Clone)]
pub struct AppState {
    /// Heuristic analysis engine
    pub engine: Arc<AnalysisEngine>,

    /// Statistical model, absent when disabled by configuration
    pub model: Option<Arc<dyn SentimentModel>>,
}

impl AppState {
    /// Build the state from configuration
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        let engine = Arc::new(AnalysisEngine::new()?);

        let model: Option<Arc<dyn SentimentModel>> = match config.model {
            ModelKind::Lexicon => Some(Arc::new(LexiconModel::new()?)),
            ModelKind::Disabled => None,
        };

        if let Some(model) = &model {
            tracing::info!(model = model.name(), "model loaded");
        } else {
            tracing::warn!("no model configured, /api/predict will respond 503");
        }

        Ok(Self { engine, model })
    }
}
