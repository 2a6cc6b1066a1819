//! actix-web replies for translated errors and flat responses

use actix_web::{HttpRequest, HttpResponse};
use nexx_core::{ErrorInput, Translator};
use nexx_shared::ErrorEnvelope;
use serde_json::Value;
use tracing::{error, info};

use crate::config::ErrorConfig;
use crate::http::locale::{localize, request_locale};
use crate::response::ResponseHandler;

/// Translate `input` and reply with the envelope and its mapped status.
pub fn reply_error(translator: &Translator, input: impl Into<ErrorInput>, config: &ErrorConfig) -> HttpResponse {
    let envelope = translate_logged(translator, input.into(), config);
    build_reply(envelope, config)
}

/// Same as [`reply_error`], with user messages in the request's language
pub fn reply_error_for(
    req: &HttpRequest,
    translator: &Translator,
    input: impl Into<ErrorInput>,
    config: &ErrorConfig,
) -> HttpResponse {
    let mut envelope = translate_logged(translator, input.into(), config);
    if config.localize {
        if let Some(locale) = request_locale(req, translator.dictionary()) {
            envelope = localize(envelope, translator.dictionary(), &locale);
        }
    }
    build_reply(envelope, config)
}

/// `200 OK` with the flat projection of `value`
pub fn respond(translator: &Translator, value: &Value) -> HttpResponse {
    HttpResponse::Ok().json(ResponseHandler::response(value, translator))
}

fn translate_logged(translator: &Translator, input: ErrorInput, config: &ErrorConfig) -> ErrorEnvelope {
    let raw = config.log_replies.then(|| format!("{:?}", input));
    let envelope = translator.translate(input);

    if let Some(raw) = raw {
        let code = envelope.code();
        if code.is_application() {
            let errors = serde_json::to_string(&envelope.errors).unwrap_or_default();
            info!(code = %code, errors = %errors, "Application error reply");
        } else {
            error!(code = %code, input = %raw, "Error reply");
        }
    }
    envelope
}

fn build_reply(mut envelope: ErrorEnvelope, config: &ErrorConfig) -> HttpResponse {
    let status = config.status.status_for(&envelope.code());
    if !config.expose_messages {
        for error in &mut envelope.errors {
            // the operator message is the last user-facing fallback
            if error.ui_message.is_empty() {
                error.ui_message = std::mem::take(&mut error.message);
            } else {
                error.message.clear();
            }
        }
    }
    HttpResponse::build(status).json(envelope)
}
