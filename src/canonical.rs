//! Signature base string construction (RFC 5849 section 3.4.1).
//!
//! ```text
//! METHOD&pe(normalized URL)&pe(normalized parameters)
//! ```
//!
//! Every byte matters: a compliant server rebuilds the same string independently, so ordering,
//! case, and encoding rules are applied exactly and never approximated.

// self
use crate::{
	_prelude::*,
	codec::percent_encode,
	params::{OAUTH_SIGNATURE, ParamMap},
	request::HttpMethod,
};

/// Normalizes parameters into `k=v&k=v` form.
///
/// Keys and values are percent-encoded independently, then pairs are sorted by encoded key and,
/// for duplicate keys, by encoded value (byte-wise).
pub fn normalize_params(params: &ParamMap) -> String {
	normalize_pairs(params.pairs())
}

/// [`normalize_params`] over an arbitrary sequence of pairs.
pub fn normalize_pairs<'a, I>(pairs: I) -> String
where
	I: IntoIterator<Item = (&'a str, &'a str)>,
{
	let mut encoded = pairs
		.into_iter()
		.map(|(k, v)| (percent_encode(k), percent_encode(v)))
		.collect::<Vec<_>>();

	encoded.sort_unstable();

	encoded.into_iter().map(|(k, v)| format!("{k}={v}")).collect::<Vec<_>>().join("&")
}

/// Normalizes a request URL into the base string URI.
///
/// Scheme and host are lower-cased, the default port (80 for http, 443 for https) is dropped, and
/// the query string and fragment are stripped. The path is copied from `url` byte for byte; dot
/// segments and escapes are left alone.
pub fn normalize_url(url: &str) -> Result<String> {
	let parsed = Url::parse(url)
		.map_err(|e| Error::InvalidUrl { url: url.to_owned(), source: Some(e) })?;

	normalize_url_parts(&parsed, raw_path(url))
}

/// Path component of `url` exactly as written: everything after the authority and before any
/// `?` or `#`.
pub(crate) fn raw_path(url: &str) -> &str {
	let url = url.trim();
	let after_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
	let end = after_scheme.find(['?', '#']).unwrap_or(after_scheme.len());
	let before_query = &after_scheme[..end];

	before_query.find('/').map_or("", |start| &before_query[start..])
}

fn normalize_url_parts(url: &Url, path: &str) -> Result<String> {
	let scheme = url.scheme().to_ascii_lowercase();
	let default_port = match scheme.as_str() {
		"http" => 80,
		"https" => 443,
		_ => return Err(Error::InvalidUrl { url: url.to_string(), source: None }),
	};
	let host = url
		.host_str()
		.filter(|host| !host.is_empty())
		.ok_or_else(|| Error::InvalidUrl { url: url.to_string(), source: None })?
		.to_ascii_lowercase();
	let path = match path {
		"" => "/",
		path => path,
	};

	match url.port().filter(|port| *port != default_port) {
		Some(port) => Ok(format!("{scheme}://{host}:{port}{path}")),
		None => Ok(format!("{scheme}://{host}{path}")),
	}
}

/// Builds the signature base string.
///
/// `params` holds the OAuth protocol parameters merged with the request parameters; any
/// `oauth_signature` entry is excluded.
pub fn base_string(method: &HttpMethod, url: &str, params: &ParamMap) -> Result<String> {
	let normalized_url = normalize_url(url)?;

	Ok(join_base_string(method, &normalized_url, params))
}

pub(crate) fn base_string_for(
	method: &HttpMethod,
	url: &Url,
	path: &str,
	params: &ParamMap,
) -> Result<String> {
	let normalized_url = normalize_url_parts(url, path)?;

	Ok(join_base_string(method, &normalized_url, params))
}

fn join_base_string(method: &HttpMethod, normalized_url: &str, params: &ParamMap) -> String {
	let normalized_params =
		normalize_pairs(params.pairs().filter(|(key, _)| *key != OAUTH_SIGNATURE));

	format!(
		"{}&{}&{}",
		percent_encode(&method.as_str().to_ascii_uppercase()),
		percent_encode(normalized_url),
		percent_encode(&normalized_params)
	)
}
