use std::{sync::Arc, time::Duration};

use tokio::time;
use tracing::{debug, info, warn};

use crate::{
    error::{RecommendError, SearchError},
    intent::{search_string, select_template, Interpreter, ParsedIntent},
    spotify::search::{CatalogSearch, TrackRecord},
};

/// Outcome of one request: what was understood, what was sent, what came back.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub intent: ParsedIntent,
    pub search_query: String,
    pub tracks: Vec<TrackRecord>,
}

/// Turns a chat message into one catalog search.
pub struct Recommender {
    interpreter: Interpreter,
    catalog: Arc<dyn CatalogSearch>,
    timeout: Duration,
    limit: u32,
}

impl Recommender {
    pub fn new(interpreter: Interpreter, catalog: Arc<dyn CatalogSearch>, timeout: Duration, limit: u32) -> Self {
        Recommender { interpreter, catalog, timeout, limit }
    }

    /// Interpret `query`, build the templated search and run it once.
    ///
    /// Tracks come back exactly as the catalog ranked them. There is no retry.
    pub async fn interpret_and_search(&self, query: &str) -> Result<Recommendation, RecommendError> {
        if query.trim().is_empty() {
            return Err(RecommendError::EmptyQuery);
        }

        let intent = self.interpreter.interpret(query);
        let search = search_string(query, &intent);
        let search_query = select_template(&intent, &search);
        debug!(%search_query, "Dispatching catalog search");

        let tracks = match time::timeout(self.timeout, self.catalog.search_tracks(&search_query, self.limit)).await {
            Ok(Ok(tracks)) => tracks,
            Ok(Err(SearchError::TimedOut)) | Err(_) => {
                warn!("Catalog search timed out for {search_query:?}");
                return Err(RecommendError::Timeout(self.timeout));
            }
            Ok(Err(SearchError::Failed(e))) => {
                warn!("Catalog search failed for {search_query:?}: {e:#}");
                return Err(RecommendError::Search(e));
            }
        };

        info!("{} tracks for {search_query:?}", tracks.len());
        Ok(Recommendation { intent, search_query, tracks })
    }
}
