//! Typed client for the stock backend.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use stock_core::{
    BankTrackResponse, ClientConfig, Endpoints, FilterStockItem, IndustryBasicData,
    IndustryRelationResponse, IndustryTrackResponse, IndustryTrendResponse, IndustryType,
    MessageResponse, Method, QueryParams, ReportType, Result, StockReportResponse,
    SubscribeListResponse, Transport,
};
use stock_http::HttpTransport;
use stock_request::{
    FilterRequest, ReportUpdateRequest, bank_trace_query, build_delete_subscribe_request,
    build_sync_request, industry_basic_query, industry_relation_query, industry_trace_query,
    industry_trend_query, report_query, stock_info_query, subscribe_list_query,
};

/// Client with one method per backend endpoint.
///
/// Each method issues a single request through the [`Transport`] and
/// decodes the JSON reply. The client holds no mutable state; clone it or
/// share it freely between tasks.
///
/// # Example
///
/// ```rust,ignore
/// use stock::{StockClient, build_filter_request, suggest_operation_label};
///
/// #[tokio::main]
/// async fn main() -> stock::Result<()> {
///     let client = StockClient::from_env()?;
///     let request = build_filter_request("", "0", "0.1", "5", &["ma5", "ma10"], "up");
///     for item in client.filter_codes(&request).await? {
///         println!("{} {}", item.code, item.company_name);
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct StockClient {
    transport: Arc<dyn Transport>,
    endpoints: Endpoints,
}

impl std::fmt::Debug for StockClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StockClient")
            .field("transport", &self.transport)
            .finish()
    }
}

impl StockClient {
    /// Creates a client that talks HTTP to `config.base_url`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let endpoints = config.endpoints.clone();
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(Arc::new(transport), endpoints))
    }

    /// Creates an HTTP client configured from the environment.
    ///
    /// See [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Creates a client over any transport.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    /// Returns the endpoint table in use.
    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str, query: QueryParams) -> Result<T> {
        let value = self.transport.get(path, &query).await?;
        decode(value)
    }

    async fn submit<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        let value = self.transport.send(method, path, &body).await?;
        decode(value)
    }

    /// Screens stocks with the given filter body.
    ///
    /// A `null` reply, sent when nothing matched, yields an empty list.
    pub async fn filter_codes(&self, request: &FilterRequest) -> Result<Vec<FilterStockItem>> {
        let items: Option<Vec<FilterStockItem>> = self
            .submit(Method::Post, &self.endpoints.filter_code, request)
            .await?;
        Ok(items.unwrap_or_default())
    }

    /// Asks the backend to sync data of one stock.
    pub async fn sync_stock_code(&self, code: &str) -> Result<MessageResponse> {
        let request = build_sync_request(code);
        self.submit(Method::Post, &self.endpoints.sync_stock_code, &request)
            .await
    }

    /// Reads one financial report.
    pub async fn stock_report(
        &self,
        code: &str,
        year: i32,
        report_type: ReportType,
        disable_msg: bool,
    ) -> Result<StockReportResponse> {
        let query = report_query(code, i64::from(year), report_type.code(), disable_msg);
        self.fetch(&self.endpoints.stock_report, query).await
    }

    /// Reads a report together with the report of the preceding quarter.
    ///
    /// Both reads run concurrently; the first error wins.
    pub async fn report_with_previous_quarter(
        &self,
        code: &str,
        year: i32,
        report_type: ReportType,
    ) -> Result<(StockReportResponse, StockReportResponse)> {
        let (prev_year, prev_type) = report_type.previous_period(year);
        debug!(
            code,
            year,
            report_type = report_type.code(),
            prev_year,
            prev_report_type = prev_type.code(),
            "Fetching report with previous quarter"
        );

        let (current, previous) = tokio::join!(
            self.stock_report(code, year, report_type, true),
            self.stock_report(code, prev_year, prev_type, true),
        );
        Ok((current?, previous?))
    }

    /// Writes a financial report.
    pub async fn update_report(&self, request: &ReportUpdateRequest) -> Result<MessageResponse> {
        self.submit(Method::Post, &self.endpoints.stock_report, request)
            .await
    }

    /// Reads the report time series of a bank.
    pub async fn bank_track(&self, code: &str) -> Result<BankTrackResponse> {
        self.fetch(&self.endpoints.bank_track, bank_trace_query(code))
            .await
    }

    /// Reads the report time series of every company in an industry.
    pub async fn industry_track(
        &self,
        industry_type: IndustryType,
    ) -> Result<IndustryTrackResponse> {
        self.fetch(
            &self.endpoints.industry_track,
            industry_trace_query(industry_type.code()),
        )
        .await
    }

    /// Reads a stock's basic information.
    pub async fn stock_info(&self, code: &str) -> Result<Value> {
        self.fetch(&self.endpoints.stock_info, stock_info_query(code))
            .await
    }

    /// Reads industry membership; an empty code lists every industry.
    pub async fn industry_basic(&self, industry_code: &str) -> Result<Vec<IndustryBasicData>> {
        let data: Option<Vec<IndustryBasicData>> = self
            .fetch(
                &self.endpoints.industry_basic,
                industry_basic_query(industry_code),
            )
            .await?;
        Ok(data.unwrap_or_default())
    }

    /// Reads industry price trends.
    ///
    /// Empty `industry_code` means every industry, empty `end_date` the
    /// latest trading day.
    pub async fn industry_trend(
        &self,
        days: i64,
        industry_code: &str,
        end_date: &str,
        sync_price: bool,
    ) -> Result<IndustryTrendResponse> {
        let query = industry_trend_query(days, industry_code, end_date, sync_price);
        self.fetch(&self.endpoints.industry_trend, query).await
    }

    /// Reads industry correlations.
    ///
    /// An empty `relation_type` requests the split-industry grouping.
    pub async fn industry_relation(
        &self,
        days: i64,
        industry_code: &str,
        relation_type: &str,
    ) -> Result<IndustryRelationResponse> {
        let query = industry_relation_query(days, industry_code, relation_type);
        self.fetch(&self.endpoints.industry_relation, query).await
    }

    /// Stores a subscription strategy, forwarded as-is.
    pub async fn add_subscribe_strategy<S>(&self, strategy: &S) -> Result<MessageResponse>
    where
        S: Serialize + ?Sized,
    {
        self.submit(Method::Post, &self.endpoints.subscribe_strategy, strategy)
            .await
    }

    /// Lists subscription strategies, or one of them when `id` is given.
    pub async fn list_subscribe_strategies(
        &self,
        id: Option<i64>,
    ) -> Result<SubscribeListResponse> {
        self.fetch(&self.endpoints.subscribe_strategy, subscribe_list_query(id))
            .await
    }

    /// Deletes a subscription strategy.
    pub async fn delete_subscribe_strategy(&self, id: i64) -> Result<MessageResponse> {
        let request = build_delete_subscribe_request(id);
        self.submit(Method::Delete, &self.endpoints.subscribe_strategy, &request)
            .await
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;
    use stock_core::{StockError, StrategyType, SubscribeStrategy};
    use stock_request::{build_filter_request, build_report_update_request};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Get(String, QueryParams),
        Send(Method, String, Value),
    }

    #[derive(Debug)]
    struct RecordingTransport {
        calls: Mutex<Vec<Call>>,
        reply: Value,
    }

    impl RecordingTransport {
        fn replying(reply: Value) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                reply,
            })
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn get(&self, path: &str, query: &[(&'static str, String)]) -> Result<Value> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Get(path.to_string(), query.to_vec()));
            Ok(self.reply.clone())
        }

        async fn send(&self, method: Method, path: &str, body: &Value) -> Result<Value> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Send(method, path.to_string(), body.clone()));
            Ok(self.reply.clone())
        }
    }

    #[derive(Debug)]
    struct FailingTransport;

    #[async_trait]
    impl Transport for FailingTransport {
        async fn get(&self, _path: &str, _query: &[(&'static str, String)]) -> Result<Value> {
            Err(StockError::transport(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "reset",
            )))
        }

        async fn send(&self, _method: Method, _path: &str, _body: &Value) -> Result<Value> {
            Err(StockError::Status {
                status: 500,
                message: "error: db down".to_string(),
            })
        }
    }

    fn client(transport: Arc<RecordingTransport>) -> StockClient {
        StockClient::with_transport(transport, Endpoints::default())
    }

    #[tokio::test]
    async fn test_filter_posts_built_body() {
        let transport = RecordingTransport::replying(json!([{
            "code": "SH600036",
            "company_name": "招商银行",
            "result": {},
            "last_date": "2024-06-28"
        }]));
        let request = build_filter_request("2024-06-28", "0", "0.2", "3", &["ma20", "ma5"], "");

        let items = client(transport.clone()).filter_codes(&request).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].company_name, "招商银行");

        assert_eq!(
            transport.calls(),
            vec![Call::Send(
                Method::Post,
                "/filter/stock/code".to_string(),
                json!({
                    "date": "2024-06-28",
                    "macd_filter": {"max_last_dea": 0.2, "min_length": 3},
                    "ma_filter": {"ma20_position": 1, "ma5_position": 2}
                })
            )]
        );
    }

    #[tokio::test]
    async fn test_sync_stock_code() {
        let transport = RecordingTransport::replying(json!({"message": "pong"}));
        let resp = client(transport.clone()).sync_stock_code("SZ000001").await.unwrap();
        assert_eq!(resp.message, "pong");
        assert_eq!(
            transport.calls(),
            vec![Call::Send(
                Method::Post,
                "/task/stock/code".to_string(),
                json!({"code": "SZ000001", "business_type": 2})
            )]
        );
    }

    #[tokio::test]
    async fn test_report_with_previous_quarter_wraps_year() {
        let transport = RecordingTransport::replying(json!({"measurement": "hundred_million"}));
        let (current, previous) = client(transport.clone())
            .report_with_previous_quarter("SH601398", 2024, ReportType::FirstQuarter)
            .await
            .unwrap();
        assert_eq!(current.measurement, "hundred_million");
        assert_eq!(previous.measurement, "hundred_million");

        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls.contains(&Call::Get(
            "/report/stock".to_string(),
            report_query("SH601398", 2023, 4, true)
        )));
        assert!(calls.contains(&Call::Get(
            "/report/stock".to_string(),
            report_query("SH601398", 2024, 1, true)
        )));
    }

    #[tokio::test]
    async fn test_update_report_omits_missing_comment() {
        let transport = RecordingTransport::replying(json!({"message": "success"}));
        let request =
            build_report_update_request("SH600036", "2024", "2", "1", "million", json!({}), None);
        client(transport.clone()).update_report(&request).await.unwrap();

        let calls = transport.calls();
        let Call::Send(method, path, body) = &calls[0] else {
            panic!("expected a body request");
        };
        assert_eq!(*method, Method::Post);
        assert_eq!(path, "/report/stock");
        assert!(body.get("comment").is_none());
    }

    #[tokio::test]
    async fn test_industry_trend_all_industries() {
        let transport = RecordingTransport::replying(json!({
            "industry_price_trend": [{
                "industry_code": "BK0475",
                "industry_name": "银行",
                "price_trend_list": [{"date": "2024-06-28", "diff": 0.8, "price": 3120.4}]
            }],
            "industry_code_trend": null
        }));
        let resp = client(transport.clone())
            .industry_trend(30, "", "", false)
            .await
            .unwrap();
        assert_eq!(resp.industry_price_trend[0].industry_code, "BK0475");
        assert!(resp.industry_code_trend.is_empty());
        assert_eq!(
            transport.calls(),
            vec![Call::Get(
                "/industry/trend".to_string(),
                vec![("days", "30".to_string())]
            )]
        );
    }

    #[tokio::test]
    async fn test_industry_trend_single_industry() {
        let transport = RecordingTransport::replying(json!({
            "industry_price_trend": null,
            "industry_code_trend": [{
                "stock_code": "SH600036",
                "stock_name": "招商银行",
                "price_trend_list": [{"date": "2024-06-28", "diff": -1.2, "price": 33.5}]
            }]
        }));
        let resp = client(transport.clone())
            .industry_trend(30, "BK0475", "2024-06-28", true)
            .await
            .unwrap();
        assert!(resp.industry_price_trend.is_empty());
        assert_eq!(resp.industry_code_trend[0].price_trend_list[0].price, 33.5);
        assert_eq!(
            transport.calls(),
            vec![Call::Get(
                "/industry/trend".to_string(),
                industry_trend_query(30, "BK0475", "2024-06-28", true)
            )]
        );
    }

    #[tokio::test]
    async fn test_null_list_replies_are_empty() {
        let transport = RecordingTransport::replying(Value::Null);
        let client = client(transport);
        let request = build_filter_request("", "0", "0", "0", &["ma5"], "");
        assert!(client.filter_codes(&request).await.unwrap().is_empty());
        assert!(client.industry_basic("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_subscribe_round() {
        let transport = RecordingTransport::replying(json!({"message": "success", "data": []}));
        let client = client(transport.clone());

        let strategy = SubscribeStrategy {
            strategy_type: Some(StrategyType::IndustryRateChange),
            industry_code: "BK0475".to_string(),
            days: 5,
            rate_change: 2.0,
            ..Default::default()
        };
        client.add_subscribe_strategy(&strategy).await.unwrap();
        client
            .add_subscribe_strategy(&json!({"custom": true}))
            .await
            .unwrap();
        let list = client.list_subscribe_strategies(None).await.unwrap();
        assert!(list.data.is_empty());
        client.delete_subscribe_strategy(9).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 4);
        assert!(matches!(
            &calls[0],
            Call::Send(Method::Post, _, body) if body["industry_code"] == "BK0475"
        ));
        assert_eq!(
            calls[1],
            Call::Send(
                Method::Post,
                "/subscribe/strategy".to_string(),
                json!({"custom": true})
            )
        );
        assert_eq!(
            calls[2],
            Call::Get("/subscribe/strategy".to_string(), Vec::new())
        );
        assert_eq!(
            calls[3],
            Call::Send(
                Method::Delete,
                "/subscribe/strategy".to_string(),
                json!({"id": 9})
            )
        );
    }

    #[tokio::test]
    async fn test_decode_failure_is_parse_error() {
        let transport = RecordingTransport::replying(json!("not a list"));
        let err = client(transport).bank_track("SH600036").await.unwrap_err();
        assert!(matches!(err, StockError::Parse(_)));
    }

    #[tokio::test]
    async fn test_transport_errors_pass_through() {
        let client = StockClient::with_transport(Arc::new(FailingTransport), Endpoints::default());

        let err = client.stock_info("SH600036").await.unwrap_err();
        assert!(matches!(err, StockError::Transport(_)));

        let err = client.sync_stock_code("SH600036").await.unwrap_err();
        assert!(matches!(err, StockError::Status { status: 500, .. }));
    }
}
