//! # Stripe Checkout Sessions
//!
//! Form encoding for `POST /v1/checkout/sessions`.
//! A donation checkout always has exactly one line item, either a
//! pre-registered price or inline `price_data` built from the donor's amount.

use donate_core::{CheckoutLineItem, CheckoutRequest};
use serde::Deserialize;

/// Build the form params for a checkout session
pub fn checkout_form_params(request: &CheckoutRequest) -> Vec<(String, String)> {
    let mut form_params: Vec<(String, String)> = vec![
        ("mode".to_string(), request.mode.as_str().to_string()),
        ("success_url".to_string(), request.success_url.clone()),
        ("cancel_url".to_string(), request.cancel_url.clone()),
    ];

    match &request.line_item {
        CheckoutLineItem::Price { price_id } => {
            form_params.push(("line_items[0][price]".to_string(), price_id.clone()));
        }
        CheckoutLineItem::Dynamic {
            name,
            unit_amount,
            recurring,
        } => {
            form_params.push((
                "line_items[0][price_data][currency]".to_string(),
                unit_amount.currency.as_str().to_string(),
            ));
            form_params.push((
                "line_items[0][price_data][unit_amount]".to_string(),
                unit_amount.amount.to_string(),
            ));
            form_params.push((
                "line_items[0][price_data][product_data][name]".to_string(),
                name.clone(),
            ));
            if *recurring {
                form_params.push((
                    "line_items[0][price_data][recurring][interval]".to_string(),
                    "month".to_string(),
                ));
            }
        }
    }

    form_params.push((
        "line_items[0][quantity]".to_string(),
        request.line_item.quantity().to_string(),
    ));

    for (key, value) in &request.metadata {
        form_params.push((format!("metadata[{}]", key), value.clone()));
    }

    form_params
}

#[derive(Debug, Deserialize)]
pub(crate) struct StripeCheckoutSessionResponse {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub expires_at: Option<i64>,
}
