mod server_tests;

use std::sync::{Arc, Mutex};

use dicionario_client::{DictionaryFetcher, FetchError, ProviderMetadata};
use dicionario_config::Config;
use serde_json::{Value, json};

use crate::service::LookupService;
use crate::state::AppState;

pub(crate) const CASA_HTML: &str = r#"
<div class="Lemma">
  <span class="Lemma__LemmaSign">casa</span>
  <span class="Subentry__Part_of_speech">substantivo feminino</span>
  <div class="Sense">
    <span class="Sense__SenseNumber">1.</span>
    <span class="Definition__Definition">Edificio para vivir</span>
    <span class="Example__Example">A casa é grande</span>
  </div>
</div>"#;

/// Canned upstream behaviour for a stub fetch
#[derive(Clone)]
pub(crate) enum Canned {
    Payload(Value),
    Missing,
    Unavailable,
}

/// Fetcher returning a canned answer and recording the words it was asked for
pub(crate) struct StubFetcher {
    canned: Canned,
    pub(crate) queries: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub(crate) fn new(canned: Canned) -> Self {
        Self {
            canned,
            queries: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl DictionaryFetcher for StubFetcher {
    async fn fetch(&self, word: &str) -> Result<Option<Value>, FetchError> {
        self.queries.lock().unwrap().push(word.to_string());
        match &self.canned {
            Canned::Payload(payload) => Ok(Some(payload.clone())),
            Canned::Missing => Ok(None),
            Canned::Unavailable => Err(FetchError::HttpStatus(503)),
        }
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "stub".to_string(),
            endpoint: "memory://".to_string(),
        }
    }
}

pub(crate) fn casa_payload() -> Value {
    json!({ "items": [{ "htmlContent": CASA_HTML, "title": "casa" }] })
}

pub(crate) fn state_with(canned: Canned) -> (Arc<AppState>, Arc<StubFetcher>) {
    let fetcher = Arc::new(StubFetcher::new(canned));
    let state = AppState::new(Config::default(), LookupService::new(fetcher.clone()));
    (Arc::new(state), fetcher)
}
