//! Dispatcher tests against a recording client.
//!
//! Every catalog operation is driven once and the single request it produces
//! is compared with the expected method, path, query and body.

use std::sync::Mutex;

use http::Method;
use rmcp::model::JsonObject;
use serde_json::{Value, json};

use super::{CATALOG, ToolRegistry};
use crate::client::{ApiClient, ApiRequest, BoxFuture};
use crate::error::VaultixError;

struct RecordingClient {
    calls: Mutex<Vec<ApiRequest>>,
    response: Result<Value, VaultixError>,
}

impl RecordingClient {
    fn returning(response: Value) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            response: Ok(response),
        }
    }

    fn failing(error: VaultixError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            response: Err(error),
        }
    }

    fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl ApiClient for RecordingClient {
    fn send(&self, request: ApiRequest) -> BoxFuture<'_, Result<Value, VaultixError>> {
        self.calls.lock().unwrap().push(request);
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}

fn obj(value: Value) -> JsonObject {
    value.as_object().cloned().unwrap()
}

async fn dispatch_one(name: &str, args: Value) -> ApiRequest {
    let client = RecordingClient::returning(json!({ "ok": true }));
    let registry = ToolRegistry::new();
    registry.dispatch(&client, name, obj(args)).await.unwrap();

    let mut calls = client.calls();
    assert_eq!(calls.len(), 1, "{} should issue exactly one call", name);
    calls.remove(0)
}

struct Expected {
    name: &'static str,
    args: Value,
    method: Method,
    path: &'static str,
    params: Option<Value>,
    body: Option<Value>,
}

fn expectations() -> Vec<Expected> {
    vec![
        Expected {
            name: "vaultix_create_charge",
            args: json!({
                "amount": 5000,
                "payment_method": "boleto",
                "customer_name": "Ana",
                "customer_email": "a@x.com",
                "customer_document": "12345678900",
                "description": "Order #1",
                "extra": "ignored"
            }),
            method: Method::POST,
            path: "/charges",
            params: None,
            body: Some(json!({
                "amount": 5000,
                "payment_method": "boleto",
                "description": "Order #1",
                "customer": { "name": "Ana", "email": "a@x.com", "document": "12345678900" }
            })),
        },
        Expected {
            name: "vaultix_get_charge",
            args: json!({ "id": "ch_1" }),
            method: Method::GET,
            path: "/charges/ch_1",
            params: None,
            body: None,
        },
        Expected {
            name: "vaultix_list_charges",
            args: json!({ "limit": 5, "status": "paid", "payment_method": "pix", "foo": 1 }),
            method: Method::GET,
            path: "/charges",
            params: Some(json!({ "limit": 5, "status": "paid", "payment_method": "pix" })),
            body: None,
        },
        Expected {
            name: "vaultix_cancel_charge",
            args: json!({ "id": "ch_1" }),
            method: Method::POST,
            path: "/charges/ch_1/cancel",
            params: None,
            body: None,
        },
        Expected {
            name: "vaultix_create_customer",
            args: json!({ "name": "Bia", "email": "b@x.com", "phone": "+5511999999999", "age": 30 }),
            method: Method::POST,
            path: "/customers",
            params: None,
            body: Some(json!({ "name": "Bia", "email": "b@x.com", "phone": "+5511999999999" })),
        },
        Expected {
            name: "vaultix_get_customer",
            args: json!({ "id": "cus_1" }),
            method: Method::GET,
            path: "/customers/cus_1",
            params: None,
            body: None,
        },
        Expected {
            name: "vaultix_list_customers",
            args: json!({ "email": "b@x.com" }),
            method: Method::GET,
            path: "/customers",
            params: Some(json!({ "email": "b@x.com" })),
            body: None,
        },
        Expected {
            name: "vaultix_update_customer",
            args: json!({ "id": "cus_1", "phone": "+5511888888888", "metadata": { "vip": true } }),
            method: Method::PUT,
            path: "/customers/cus_1",
            params: None,
            body: Some(json!({ "phone": "+5511888888888", "metadata": { "vip": true } })),
        },
        Expected {
            name: "vaultix_delete_customer",
            args: json!({ "id": "cus_1" }),
            method: Method::DELETE,
            path: "/customers/cus_1",
            params: None,
            body: None,
        },
        Expected {
            name: "vaultix_create_refund",
            args: json!({ "charge": "ch_1", "amount": 1000, "reason": "requested_by_customer" }),
            method: Method::POST,
            path: "/refunds",
            params: None,
            body: Some(json!({ "charge": "ch_1", "amount": 1000, "reason": "requested_by_customer" })),
        },
        Expected {
            name: "vaultix_get_refund",
            args: json!({ "id": "re_1" }),
            method: Method::GET,
            path: "/refunds/re_1",
            params: None,
            body: None,
        },
        Expected {
            name: "vaultix_list_refunds",
            args: json!({ "limit": 20, "charge": "ch_1" }),
            method: Method::GET,
            path: "/refunds",
            params: Some(json!({ "limit": 20, "charge": "ch_1" })),
            body: None,
        },
        Expected {
            name: "vaultix_get_balance",
            args: json!({}),
            method: Method::GET,
            path: "/balance",
            params: None,
            body: None,
        },
        Expected {
            name: "vaultix_list_balance_transactions",
            args: json!({ "limit": 10, "type": "refund" }),
            method: Method::GET,
            path: "/balance/transactions",
            params: Some(json!({ "limit": 10, "type": "refund" })),
            body: None,
        },
        Expected {
            name: "vaultix_create_product",
            args: json!({ "name": "Shirt", "price": 4990, "stock_quantity": 3, "sku": "SH-01" }),
            method: Method::POST,
            path: "/products",
            params: None,
            body: Some(json!({ "name": "Shirt", "price": 4990, "stock_quantity": 3, "sku": "SH-01" })),
        },
        Expected {
            name: "vaultix_get_product",
            args: json!({ "id": "prod_1" }),
            method: Method::GET,
            path: "/products/prod_1",
            params: None,
            body: None,
        },
        Expected {
            name: "vaultix_list_products",
            args: json!({ "status": "active", "search": "shirt" }),
            method: Method::GET,
            path: "/products",
            params: Some(json!({ "status": "active", "search": "shirt" })),
            body: None,
        },
        Expected {
            name: "vaultix_update_product",
            args: json!({ "id": "prod_1", "price": 3990 }),
            method: Method::PUT,
            path: "/products/prod_1",
            params: None,
            body: Some(json!({ "price": 3990 })),
        },
        Expected {
            name: "vaultix_delete_product",
            args: json!({ "id": "prod_1" }),
            method: Method::DELETE,
            path: "/products/prod_1",
            params: None,
            body: None,
        },
        Expected {
            name: "vaultix_get_order",
            args: json!({ "id": "ord_1", "expand": "items" }),
            method: Method::GET,
            path: "/orders/ord_1",
            params: Some(json!({ "expand": "items" })),
            body: None,
        },
        Expected {
            name: "vaultix_list_orders",
            args: json!({ "limit": 3, "payment_status": "paid" }),
            method: Method::GET,
            path: "/orders",
            params: Some(json!({ "limit": 3, "payment_status": "paid" })),
            body: None,
        },
        Expected {
            name: "vaultix_get_transaction",
            args: json!({ "id": "txn_1" }),
            method: Method::GET,
            path: "/transactions/txn_1",
            params: None,
            body: None,
        },
        Expected {
            name: "vaultix_list_transactions",
            args: json!({ "type": "payout", "source": "payout" }),
            method: Method::GET,
            path: "/transactions",
            params: Some(json!({ "type": "payout", "source": "payout" })),
            body: None,
        },
        Expected {
            name: "vaultix_get_transactions_summary",
            args: json!({ "period": "7d" }),
            method: Method::GET,
            path: "/transactions/summary",
            params: Some(json!({ "period": "7d" })),
            body: None,
        },
        Expected {
            name: "vaultix_create_payment_link",
            args: json!({
                "amount": 2500,
                "description": "Donation",
                "payment_methods": ["pix", "credit_card"],
                "success_url": "https://example.com/thanks",
                "max_uses": 100
            }),
            method: Method::POST,
            path: "/payment-links",
            params: None,
            body: Some(json!({
                "amount": 2500,
                "description": "Donation",
                "payment_methods": ["pix", "credit_card"],
                "success_url": "https://example.com/thanks",
                "max_uses": 100
            })),
        },
        Expected {
            name: "vaultix_get_payment_link",
            args: json!({ "id": "plink_1" }),
            method: Method::GET,
            path: "/payment-links/plink_1",
            params: None,
            body: None,
        },
        Expected {
            name: "vaultix_list_payment_links",
            args: json!({ "status": "inactive" }),
            method: Method::GET,
            path: "/payment-links",
            params: Some(json!({ "status": "inactive" })),
            body: None,
        },
        Expected {
            name: "vaultix_deactivate_payment_link",
            args: json!({ "id": "plink_1" }),
            method: Method::POST,
            path: "/payment-links/plink_1/deactivate",
            params: None,
            body: None,
        },
        Expected {
            name: "vaultix_create_payout",
            args: json!({ "amount": 10000, "pix_key": "ana@pix.com", "description": "Withdraw" }),
            method: Method::POST,
            path: "/payouts",
            params: None,
            body: Some(json!({
                "amount": 10000,
                "destination": { "pix_key": "ana@pix.com" },
                "description": "Withdraw"
            })),
        },
        Expected {
            name: "vaultix_get_payout",
            args: json!({ "id": "po_1" }),
            method: Method::GET,
            path: "/payouts/po_1",
            params: None,
            body: None,
        },
        Expected {
            name: "vaultix_list_payouts",
            args: json!({ "limit": 1, "status": "in_transit" }),
            method: Method::GET,
            path: "/payouts",
            params: Some(json!({ "limit": 1, "status": "in_transit" })),
            body: None,
        },
        Expected {
            name: "vaultix_cancel_payout",
            args: json!({ "id": "po_1" }),
            method: Method::POST,
            path: "/payouts/po_1/cancel",
            params: None,
            body: None,
        },
    ]
}

#[tokio::test]
async fn test_every_operation_builds_expected_request() {
    let cases = expectations();
    assert_eq!(cases.len(), CATALOG.len(), "every catalog entry needs a case");

    for case in cases {
        let request = dispatch_one(case.name, case.args).await;
        assert_eq!(request.method, case.method, "{}", case.name);
        assert_eq!(request.path, case.path, "{}", case.name);
        assert_eq!(request.params.map(Value::Object), case.params, "{}", case.name);
        assert_eq!(request.body, case.body, "{}", case.name);
    }
}

#[tokio::test]
async fn test_get_charge_returns_response_unchanged() {
    let stub = json!({ "id": "ch_123", "status": "paid" });
    let client = RecordingClient::returning(stub.clone());
    let registry = ToolRegistry::new();

    let result = registry
        .dispatch(&client, "vaultix_get_charge", obj(json!({ "id": "ch_123" })))
        .await
        .unwrap();

    assert_eq!(result, stub);
    assert_eq!(client.calls(), vec![ApiRequest::get("/charges/ch_123", None)]);
}

#[tokio::test]
async fn test_create_charge_omits_absent_fields() {
    let request = dispatch_one(
        "vaultix_create_charge",
        json!({
            "amount": 5000,
            "payment_method": "pix",
            "customer_name": "Ana",
            "customer_email": "a@x.com"
        }),
    )
    .await;

    assert_eq!(
        request,
        ApiRequest::post(
            "/charges",
            Some(json!({
                "amount": 5000,
                "payment_method": "pix",
                "customer": { "name": "Ana", "email": "a@x.com" }
            }))
        )
    );
}

#[tokio::test]
async fn test_unknown_tool_never_reaches_client() {
    let client = RecordingClient::returning(json!({}));
    let registry = ToolRegistry::new();

    for name in ["", "vaultix_get_weather", "VAULTIX_GET_CHARGE", "vaultix_get_charge "] {
        let err = registry
            .dispatch(&client, name, JsonObject::new())
            .await
            .unwrap_err();
        assert_eq!(err, VaultixError::UnknownTool(name.to_string()));
    }

    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn test_update_moves_id_into_path_only() {
    for name in ["vaultix_update_customer", "vaultix_update_product"] {
        let request = dispatch_one(name, json!({ "id": "x_9", "name": "New" })).await;
        assert!(request.path.ends_with("/x_9"), "{}", name);
        let body = request.body.unwrap();
        assert!(body.get("id").is_none(), "{} leaked id into body", name);
        assert_eq!(body, json!({ "name": "New" }));
    }
}

#[tokio::test]
async fn test_payout_pix_key_drops_bank_fields() {
    let request = dispatch_one(
        "vaultix_create_payout",
        json!({
            "amount": 5000,
            "pix_key": "+5511999999999",
            "bank_code": "341",
            "branch": "0001",
            "account": "12345-6",
            "account_type": "checking"
        }),
    )
    .await;

    let body = request.body.unwrap();
    assert_eq!(body["destination"], json!({ "pix_key": "+5511999999999" }));
}

#[tokio::test]
async fn test_payout_without_pix_key_uses_bank_fields() {
    let request = dispatch_one(
        "vaultix_create_payout",
        json!({
            "amount": 5000,
            "bank_code": "341",
            "branch": "0001",
            "account": "12345-6",
            "account_type": "checking",
            "holder_name": "Ana",
            "holder_document": "12345678900"
        }),
    )
    .await;

    let body = request.body.unwrap();
    assert_eq!(
        body["destination"],
        json!({
            "bank_code": "341",
            "branch": "0001",
            "account": "12345-6",
            "account_type": "checking",
            "holder_name": "Ana",
            "holder_document": "12345678900"
        })
    );
}

#[tokio::test]
async fn test_summary_period_defaults_to_30d() {
    let request = dispatch_one("vaultix_get_transactions_summary", json!({})).await;
    assert_eq!(request.params, Some(obj(json!({ "period": "30d" }))));

    let request = dispatch_one("vaultix_get_transactions_summary", json!({ "period": "" })).await;
    assert_eq!(request.params, Some(obj(json!({ "period": "30d" }))));
}

#[tokio::test]
async fn test_list_forwards_null_filters_to_client() {
    let request = dispatch_one("vaultix_list_charges", json!({ "limit": 10, "status": null })).await;
    assert_eq!(request.params, Some(obj(json!({ "limit": 10, "status": null }))));
}

#[tokio::test]
async fn test_client_error_propagates() {
    let remote = VaultixError::Api {
        message: "not found".to_string(),
        code: "not_found".to_string(),
        status: 404,
    };
    let client = RecordingClient::failing(remote.clone());
    let registry = ToolRegistry::new();

    let err = registry
        .dispatch(&client, "vaultix_get_refund", obj(json!({ "id": "re_missing" })))
        .await
        .unwrap_err();

    assert_eq!(err, remote);
    assert_eq!(client.calls().len(), 1);
}

#[tokio::test]
async fn test_odd_ids_still_reach_the_client() {
    let cases = [
        (json!({}), "/charges/undefined"),
        (json!({ "id": "" }), "/charges/"),
        (json!({ "id": true }), "/charges/true"),
    ];

    for (args, path) in cases {
        let client = RecordingClient::returning(json!({ "error": "not found" }));
        let registry = ToolRegistry::new();

        registry
            .dispatch(&client, "vaultix_get_charge", obj(args))
            .await
            .unwrap();

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, Method::GET);
        assert_eq!(calls[0].path, path);
    }
}
