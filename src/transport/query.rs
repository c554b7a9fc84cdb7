use crate::domain::{
    ArgValue, CallbackUrl, Charset, DataCoding, DispatchArgs, MessageClass, MessageOptions,
    MessageRequest, MessageText, RawPhoneNumber, ReportMask, SenderId, ShortUrl,
};

/// Drop entries the gateway must never see: keys that are pure positional
/// indices (callers handing over positional argument lists) and entries
/// whose value is absent.
pub fn filter_args(args: DispatchArgs) -> Vec<(String, ArgValue)> {
    args.into_iter()
        .filter(|(key, _)| !is_positional_index(key))
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect()
}

fn is_positional_index(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|byte| byte.is_ascii_digit())
}

/// Render a value for the wire. Booleans become the literal strings
/// `true`/`false`, never `1`/`0`.
pub fn render_value(value: &ArgValue) -> String {
    match value {
        ArgValue::Text(text) => text.clone(),
        ArgValue::Int(number) => number.to_string(),
        ArgValue::Bool(true) => "true".to_owned(),
        ArgValue::Bool(false) => "false".to_owned(),
    }
}

/// Build the request URL: `endpoint?query` with every key and value
/// percent-encoded, pairs in the order supplied.
pub fn build_url(endpoint: &str, params: &[(String, String)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key, value);
    }
    let query = serializer.finish();
    format!("{endpoint}?{query}")
}

/// Decode a query string back into its (key, value) pairs.
pub fn decode_query(query: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

/// Encode a [`MessageRequest`] into dispatch arguments, in the registry's
/// fixed `send` order. Unset options are omitted entirely, never sent as
/// empty values.
pub fn encode_message_args(request: &MessageRequest) -> DispatchArgs {
    let options = request.options();
    let mut args: DispatchArgs = Vec::new();

    args.push((
        RawPhoneNumber::FIELD.to_owned(),
        Some(ArgValue::from(request.to().raw())),
    ));
    args.push((
        MessageText::FIELD.to_owned(),
        Some(ArgValue::from(request.text().as_str())),
    ));
    if let Some(from) = options.from.as_ref() {
        args.push((SenderId::FIELD.to_owned(), Some(ArgValue::from(from.as_str()))));
    }
    args.push((
        ReportMask::FIELD.to_owned(),
        Some(ArgValue::from(options.report_mask.value())),
    ));
    if let Some(callback_url) = options.callback_url.as_ref() {
        args.push((
            CallbackUrl::FIELD.to_owned(),
            Some(ArgValue::from(callback_url.as_str())),
        ));
    }
    if let Some(charset) = options.charset.as_ref() {
        args.push((
            Charset::FIELD.to_owned(),
            Some(ArgValue::from(charset.as_str())),
        ));
    }
    if let Some(coding) = options.coding {
        args.push((
            DataCoding::FIELD.to_owned(),
            Some(ArgValue::from(coding.value())),
        ));
    }
    if let Some(class) = options.class {
        args.push((
            MessageClass::FIELD.to_owned(),
            Some(ArgValue::from(class.value())),
        ));
    }
    if let Some(auto_detect) = options.auto_detect_encoding {
        args.push((
            MessageOptions::AUTO_DETECT_ENCODING_FIELD.to_owned(),
            Some(ArgValue::from(auto_detect)),
        ));
    }
    if let Some(short_url) = options.short_url.as_ref() {
        args.push((ShortUrl::FIELD.to_owned(), Some(ArgValue::from(short_url))));
    }

    args
}
