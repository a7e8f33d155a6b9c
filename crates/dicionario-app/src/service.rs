use std::sync::Arc;

use dicionario_client::{DictionaryFetcher, FetchError, ProviderMetadata};
use dicionario_core::{Diagnostic, LookupOutcome};
use dicionario_core::preprocess::{DefaultPreprocessor, Preprocessor};

/// Fetch-then-extract pipeline behind the `lookup_word` tool
#[derive(Clone)]
pub struct LookupService {
    fetcher: Arc<dyn DictionaryFetcher>,
}

impl LookupService {
    pub fn new(fetcher: Arc<dyn DictionaryFetcher>) -> Self {
        Self { fetcher }
    }

    pub fn provider(&self) -> ProviderMetadata {
        self.fetcher.metadata()
    }

    /// Normalized form of a query word, as sent upstream
    pub fn normalize(&self, word: &str) -> String {
        DefaultPreprocessor.process(word)
    }

    /// Look up a single word. One fetch, one parse, no retries.
    pub async fn lookup(&self, word: &str) -> Result<LookupOutcome, FetchError> {
        let query = self.normalize(word);

        let Some(payload) = self.fetcher.fetch(&query).await? else {
            tracing::info!(word = %query, "Upstream returned no entry");
            return Ok(LookupOutcome::no_entry());
        };

        let outcome = dicionario_core::resolve(&payload, &query);

        match &outcome {
            LookupOutcome::Found(extraction) => {
                for diagnostic in &extraction.diagnostics {
                    match diagnostic {
                        Diagnostic::ShapeDrift { .. } => tracing::warn!(
                            word = %query,
                            %diagnostic,
                            "Entry markup no longer matches the expected structure"
                        ),
                        _ => tracing::debug!(word = %query, %diagnostic, "Extraction diagnostic"),
                    }
                }
                tracing::info!(
                    word = %extraction.entry.word,
                    definitions = extraction.entry.definitions.len(),
                    expressions = extraction.entry.expressions.len(),
                    "Entry extracted"
                );
            }
            LookupOutcome::NotFound {
                diagnostic: Some(diagnostic),
            } => {
                tracing::warn!(
                    word = %query,
                    %diagnostic,
                    "Search payload no longer matches the expected structure"
                );
            }
            LookupOutcome::NotFound { diagnostic: None } => {
                tracing::info!(word = %query, "No entry in payload");
            }
        }

        Ok(outcome)
    }
}
