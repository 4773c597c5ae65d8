//! Query-string construction

/// Build `?k1=v1&k2=v2` from key/value pairs, percent-encoding both keys
/// and values.
///
/// Pair order is preserved as provided; nothing further is promised. An
/// empty input yields a bare `?`.
pub fn to_query_string<K, V, I>(params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut query = String::from("?");
    let mut first = true;
    for (key, value) in params {
        if !first {
            query.push('&');
        }
        first = false;
        query.push_str(&urlencoding::encode(key.as_ref()));
        query.push('=');
        query.push_str(&urlencoding::encode(value.as_ref()));
    }
    query
}
