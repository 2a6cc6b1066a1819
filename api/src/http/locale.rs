//! Request-scoped language for user messages

use actix_web::http::header;
use actix_web::HttpRequest;
use nexx_core::Dictionary;
use nexx_shared::{params, ErrorEnvelope, Locale};

/// Loaded locale preferred by the request's `Accept-Language` header
pub fn request_locale(req: &HttpRequest, dictionary: &Dictionary) -> Option<Locale> {
    let header = req.headers().get(header::ACCEPT_LANGUAGE)?.to_str().ok()?;
    let supported: Vec<Locale> = dictionary
        .locales()
        .into_iter()
        .filter(|locale| !locale.is_default())
        .cloned()
        .collect();
    Locale::from_accept_language(header, &supported)
}

/// Re-render dictionary-provided user messages in `locale`.
///
/// A message is only replaced when it equals the active-locale rendering, so
/// explicit overrides survive. Templates see the error source as both
/// `{{field}}` and `{{source}}`.
pub fn localize(envelope: ErrorEnvelope, dictionary: &Dictionary, locale: &Locale) -> ErrorEnvelope {
    if locale == dictionary.locale() {
        return envelope;
    }

    let errors = envelope
        .into_errors()
        .into_iter()
        .map(|mut error| {
            let vars = params([("field", error.source.as_str()), ("source", error.source.as_str())]);
            let code = error.code.as_str();
            let active = dictionary.get_ui_message(code, Some(&vars)).unwrap_or_default();

            if error.ui_message == active {
                if let Some(message) = dictionary.translate_in(code, locale, Some(&vars)) {
                    error.ui_message = message;
                }
            }
            error
        })
        .collect::<Vec<_>>();

    ErrorEnvelope::new(errors)
}
