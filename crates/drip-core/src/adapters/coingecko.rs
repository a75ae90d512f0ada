use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::domain::PriceQuote;
use crate::error::{PriceLookupCause, PriceLookupError};
use crate::http_client::{HttpClient, HttpRequest, NoopHttpClient, ReqwestHttpClient};
use crate::price_source::{PriceRequest, PriceSource};

/// Public CoinGecko API v3 base URL.
pub const COINGECKO_API_BASE: &str = "https://api.coingecko.com/api/v3";

// The history endpoint takes its date parameter as DD-MM-YYYY.
const HISTORY_DATE: &[BorrowedFormatItem<'static>] = format_description!("[day]-[month]-[year]");

/// CoinGecko `/coins/{id}/history` adapter.
///
/// Issues one request per (asset, date) and reads the day's close price
/// from `market_data.current_price` keyed by quote currency. Nothing is
/// cached: each run re-fetches.
#[derive(Clone)]
pub struct CoinGeckoSource {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
}

impl Default for CoinGeckoSource {
    fn default() -> Self {
        Self {
            http_client: Arc::new(NoopHttpClient),
            base_url: String::from(COINGECKO_API_BASE),
        }
    }
}

impl CoinGeckoSource {
    /// Adapter backed by a real reqwest transport.
    pub fn new() -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn history_url(&self, request: &PriceRequest) -> String {
        let date_param = request
            .date
            .into_inner()
            .format(HISTORY_DATE)
            .expect("TradeDate must be DD-MM-YYYY formattable");

        format!(
            "{}/coins/{}/history?date={}&localization=false",
            self.base_url,
            urlencoding::encode(request.asset.as_str()),
            date_param
        )
    }

    async fn fetch(&self, request: PriceRequest) -> Result<PriceQuote, PriceLookupError> {
        let http_request = HttpRequest::get(self.history_url(&request));

        let response = self.http_client.execute(http_request).await.map_err(|e| {
            PriceLookupError::new(
                request.asset.clone(),
                request.date,
                PriceLookupCause::Transport(e.message().to_owned()),
            )
        })?;

        if !response.is_success() {
            return Err(PriceLookupError::new(
                request.asset.clone(),
                request.date,
                PriceLookupCause::UpstreamStatus(response.status),
            ));
        }

        let history: HistoryResponse = serde_json::from_str(&response.body).map_err(|e| {
            PriceLookupError::new(
                request.asset.clone(),
                request.date,
                PriceLookupCause::MalformedResponse(e.to_string()),
            )
        })?;

        let price = history
            .market_data
            .and_then(|data| data.current_price.get(&request.currency).copied())
            .ok_or_else(|| {
                PriceLookupError::new(
                    request.asset.clone(),
                    request.date,
                    PriceLookupCause::MissingPrice {
                        currency: request.currency.clone(),
                    },
                )
            })?;

        PriceQuote::new(price).map_err(|_| {
            PriceLookupError::new(
                request.asset.clone(),
                request.date,
                PriceLookupCause::InvalidPrice { price },
            )
        })
    }
}

impl PriceSource for CoinGeckoSource {
    fn id(&self) -> &'static str {
        "coingecko"
    }

    fn daily_price<'a>(
        &'a self,
        request: PriceRequest,
    ) -> Pin<Box<dyn Future<Output = Result<PriceQuote, PriceLookupError>> + Send + 'a>> {
        Box::pin(self.fetch(request))
    }
}

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    #[serde(default)]
    market_data: Option<HistoryMarketData>,
}

#[derive(Debug, Deserialize)]
struct HistoryMarketData {
    #[serde(default)]
    current_price: HashMap<String, f64>,
}
