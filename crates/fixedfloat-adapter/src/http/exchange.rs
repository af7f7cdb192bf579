/*
[INPUT]:  Typed request parameters (currencies, amounts, order refs)
[OUTPUT]: Unwrapped `data` values from the exchange endpoints
[POS]:    HTTP layer - exchange endpoints (all POST, all signed)
[UPDATE]: When adding new endpoints or changing request shapes
*/

use rust_decimal::Decimal;
use serde_json::Value;

use crate::http::{FixedFloatClient, Result};
use crate::types::{CreateOrderRequest, EmergencyRequest, OrderRef, PriceRequest};

const CURRENCIES_ENDPOINT: &str = "ccies";
const PRICE_ENDPOINT: &str = "price";
const CREATE_ENDPOINT: &str = "create";
const ORDER_ENDPOINT: &str = "order";
const EMERGENCY_ENDPOINT: &str = "emergency";
const QR_ENDPOINT: &str = "qr";

impl FixedFloatClient {
    /// List currencies supported by the service
    ///
    /// POST /ccies (empty body)
    pub async fn get_currencies(&self) -> Result<Value> {
        self.request(CURRENCIES_ENDPOINT, "").await
    }

    /// Quote the exchange rate for a currency pair
    ///
    /// POST /price
    pub async fn get_price(&self, req: &PriceRequest) -> Result<Value> {
        self.post_json(PRICE_ENDPOINT, req).await
    }

    /// Quote with default direction (`from`) and rate type (`float`)
    pub async fn get_price_for(
        &self,
        from_ccy: &str,
        to_ccy: &str,
        amount: Decimal,
    ) -> Result<Value> {
        self.get_price(&PriceRequest::new(from_ccy, to_ccy, amount))
            .await
    }

    /// Create an exchange order
    ///
    /// POST /create
    pub async fn create_order(&self, req: &CreateOrderRequest) -> Result<Value> {
        self.post_json(CREATE_ENDPOINT, req).await
    }

    /// Fetch the current state of an order
    ///
    /// POST /order
    pub async fn get_order(&self, id: &str, token: &str) -> Result<Value> {
        self.post_json(ORDER_ENDPOINT, &OrderRef::new(id, token))
            .await
    }

    /// Choose what happens to an order in EMERGENCY status
    ///
    /// POST /emergency
    pub async fn set_emergency(&self, req: &EmergencyRequest) -> Result<Value> {
        self.post_json(EMERGENCY_ENDPOINT, req).await
    }

    /// Fetch QR code images for an order
    ///
    /// POST /qr
    pub async fn get_qr_codes(&self, id: &str, token: &str) -> Result<Value> {
        self.post_json(QR_ENDPOINT, &OrderRef::new(id, token)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, FixedFloatClient};
    use crate::types::{CreateOrderRequest, EmergencyChoice, EmergencyRequest, PriceRequest};
    use rust_decimal::Decimal;
    use serde_json::json;
    use wiremock::matchers::{body_json, body_string, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn mock_client(server: &MockServer) -> FixedFloatClient {
        FixedFloatClient::with_config_and_base_url(
            ClientConfig::default(),
            "test-key",
            "test-secret",
            &server.uri(),
        )
        .expect("client init")
    }

    fn ok(data: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "msg": "OK",
            "data": data,
        }))
    }

    fn amount(value: &str) -> Decimal {
        value.parse().expect("decimal")
    }

    #[tokio::test]
    async fn test_get_currencies() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ccies"))
            .and(body_string(""))
            .respond_with(ok(json!([
                {"code": "BTC", "coin": "BTC", "network": "BTC", "recv": 1, "send": 1},
                {"code": "ETH", "coin": "ETH", "network": "ETH", "recv": 1, "send": 0},
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let data = mock_client(&server).get_currencies().await.unwrap();
        assert_eq!(data.as_array().map(Vec::len), Some(2));
        assert_eq!(data[0]["code"], json!("BTC"));
    }

    #[tokio::test]
    async fn test_get_price_for_uses_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/price"))
            .and(body_json(json!({
                "fromCcy": "ETH",
                "toCcy": "BTC",
                "amount": 0.5,
                "direction": "from",
                "type": "float",
            })))
            .respond_with(ok(json!({"from": {"amount": "0.5"}, "to": {"amount": "0.0171"}})))
            .expect(1)
            .mount(&server)
            .await;

        let data = mock_client(&server)
            .get_price_for("ETH", "BTC", amount("0.5"))
            .await
            .unwrap();
        assert_eq!(data["to"]["amount"], json!("0.0171"));
    }

    #[tokio::test]
    async fn test_get_price_fixed_to() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/price"))
            .and(body_json(json!({
                "fromCcy": "BTC",
                "toCcy": "USDTTRC",
                "amount": 250.25,
                "direction": "to",
                "type": "fixed",
            })))
            .respond_with(ok(json!({"x": 1})))
            .expect(1)
            .mount(&server)
            .await;

        let req = PriceRequest::new("BTC", "USDTTRC", amount("250.25"))
            .direction("to")
            .rate_type("fixed");
        let data = mock_client(&server).get_price(&req).await.unwrap();
        assert_eq!(data, json!({"x": 1}));
    }

    #[tokio::test]
    async fn test_create_order_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/create"))
            .and(body_json(json!({
                "fromCcy": "USDTTRC",
                "toCcy": "BTC",
                "toAddress": "bc1qexample",
                "amount": 150.5,
                "tag": false,
                "direction": "from",
                "type": "float",
            })))
            .respond_with(ok(json!({"id": "8PQWPY", "token": "tok"})))
            .expect(1)
            .mount(&server)
            .await;

        let req = CreateOrderRequest::new("USDTTRC", "BTC", "bc1qexample", amount("150.5"));
        let data = mock_client(&server).create_order(&req).await.unwrap();
        assert_eq!(data["id"], json!("8PQWPY"));
        assert_eq!(data["token"], json!("tok"));
    }

    #[tokio::test]
    async fn test_get_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/order"))
            .and(body_json(json!({"id": "8PQWPY", "token": "tok"})))
            .respond_with(ok(json!({"id": "8PQWPY", "status": "NEW"})))
            .expect(1)
            .mount(&server)
            .await;

        let data = mock_client(&server)
            .get_order("8PQWPY", "tok")
            .await
            .unwrap();
        assert_eq!(data["status"], json!("NEW"));
    }

    #[tokio::test]
    async fn test_set_emergency_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emergency"))
            .and(body_json(json!({
                "id": "8PQWPY",
                "token": "tok",
                "choice": "EXCHANGE",
                "address": false,
                "tag": false,
            })))
            .respond_with(ok(json!(true)))
            .expect(1)
            .mount(&server)
            .await;

        let data = mock_client(&server)
            .set_emergency(&EmergencyRequest::new("8PQWPY", "tok"))
            .await
            .unwrap();
        assert_eq!(data, json!(true));
    }

    #[tokio::test]
    async fn test_set_emergency_refund() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emergency"))
            .and(body_json(json!({
                "id": "8PQWPY",
                "token": "tok",
                "choice": "REFUND",
                "address": "0xrefund",
                "tag": false,
            })))
            .respond_with(ok(json!(true)))
            .expect(1)
            .mount(&server)
            .await;

        let req = EmergencyRequest::new("8PQWPY", "tok")
            .choice(EmergencyChoice::Refund)
            .address("0xrefund");
        assert!(mock_client(&server).set_emergency(&req).await.is_ok());
    }

    #[tokio::test]
    async fn test_get_qr_codes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/qr"))
            .and(body_json(json!({"id": "8PQWPY", "token": "tok"})))
            .respond_with(ok(json!([{"title": "BTC address", "src": "data:image/png;base64,AA=="}])))
            .expect(1)
            .mount(&server)
            .await;

        let data = mock_client(&server)
            .get_qr_codes("8PQWPY", "tok")
            .await
            .unwrap();
        assert_eq!(data[0]["title"], json!("BTC address"));
    }
}
