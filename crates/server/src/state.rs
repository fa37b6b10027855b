use std::sync::Arc;

use seoscope_core::{ConfigLoader, SeoAnalyzer};
use tracing::info;

use super::{config::Config, error::StartupError};

pub struct AppState {
    pub analyzer: SeoAnalyzer,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Result<Arc<Self>, StartupError> {
        let loader = match &config.scoring_config {
            Some(path) => ConfigLoader::new().with_file(path),
            None => ConfigLoader::new(),
        };
        let scoring = loader.load()?;
        info!(
            word_count_target = scoring.thresholds.suggested_word_count,
            duplicate_similarity = scoring.thresholds.duplicate_similarity,
            "Scoring config loaded"
        );

        Ok(Self::with_analyzer(SeoAnalyzer::with_config(scoring), config))
    }

    pub fn with_analyzer(analyzer: SeoAnalyzer, config: Config) -> Arc<Self> {
        Arc::new(Self { analyzer, config })
    }
}
