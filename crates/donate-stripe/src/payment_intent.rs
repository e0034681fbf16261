//! # Stripe Payment Intents
//!
//! Form encoding for `POST /v1/payment_intents`, used by the embedded
//! payment form on the donate page.

use donate_core::PaymentIntentRequest;
use serde::Deserialize;

/// Build the form params for a payment intent
pub fn payment_intent_form_params(request: &PaymentIntentRequest) -> Vec<(String, String)> {
    let mut form_params: Vec<(String, String)> = vec![
        ("amount".to_string(), request.amount.amount.to_string()),
        ("currency".to_string(), request.amount.currency.as_str().to_string()),
    ];

    if request.automatic_payment_methods {
        form_params.push((
            "automatic_payment_methods[enabled]".to_string(),
            "true".to_string(),
        ));
    }

    for (key, value) in &request.metadata {
        form_params.push((format!("metadata[{}]", key), value.clone()));
    }

    form_params
}

#[derive(Debug, Deserialize)]
pub(crate) struct StripePaymentIntentResponse {
    pub id: String,
    #[serde(default)]
    pub client_secret: Option<String>,
}
