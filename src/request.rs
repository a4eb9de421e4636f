//! HTTP request descriptors handed to the signer by the transport owner.

// self
use crate::{_prelude::*, canonical, params::ParamMap};

/// HTTP request method; extension methods are carried upper-cased.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum HttpMethod {
	/// `GET`.
	Get,
	/// `POST`.
	Post,
	/// `PUT`.
	Put,
	/// `DELETE`.
	Delete,
	/// `PATCH`.
	Patch,
	/// `HEAD`.
	Head,
	/// `OPTIONS`.
	Options,
	/// Any other RFC 7230 token, stored upper-cased.
	Extension(String),
}
impl HttpMethod {
	/// Returns the upper-case wire name.
	pub fn as_str(&self) -> &str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
			HttpMethod::Put => "PUT",
			HttpMethod::Delete => "DELETE",
			HttpMethod::Patch => "PATCH",
			HttpMethod::Head => "HEAD",
			HttpMethod::Options => "OPTIONS",
			HttpMethod::Extension(name) => name,
		}
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for HttpMethod {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.is_empty() || !s.bytes().all(is_token_byte) {
			return Err(Error::illegal_argument(
				"http_method",
				format!("`{s}` is not an HTTP token"),
			));
		}

		let upper = s.to_ascii_uppercase();

		Ok(match upper.as_str() {
			"GET" => HttpMethod::Get,
			"POST" => HttpMethod::Post,
			"PUT" => HttpMethod::Put,
			"DELETE" => HttpMethod::Delete,
			"PATCH" => HttpMethod::Patch,
			"HEAD" => HttpMethod::Head,
			"OPTIONS" => HttpMethod::Options,
			_ => HttpMethod::Extension(upper),
		})
	}
}
impl From<HttpMethod> for String {
	fn from(value: HttpMethod) -> Self {
		value.as_str().to_owned()
	}
}
impl TryFrom<String> for HttpMethod {
	type Error = Error;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

/// Method, URL, and request parameters of one outbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestDescriptor {
	/// HTTP method.
	pub method: HttpMethod,
	/// Absolute request URL; its query component contributes parameters.
	pub url: Url,
	/// Query, form-body, and non-OAuth header parameters supplied by the caller.
	pub params: ParamMap,
	path: String,
}
impl RequestDescriptor {
	/// Parses `url` and creates a descriptor without explicit parameters.
	pub fn new(method: HttpMethod, url: &str) -> Result<Self> {
		let path = canonical::raw_path(url).to_owned();
		let url = Url::parse(url)
			.map_err(|e| Error::InvalidUrl { url: url.to_owned(), source: Some(e) })?;

		Ok(Self { method, url, params: ParamMap::new(), path })
	}

	/// Path as written in the URL handed to [`RequestDescriptor::new`], before any dot-segment
	/// removal or re-encoding.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Replaces the request parameters.
	pub fn with_params(mut self, params: ParamMap) -> Self {
		self.params = params;

		self
	}

	/// Appends one request parameter.
	pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.params.append(key, value);

		self
	}

	/// Parameters that take part in the signature: the URL's form-decoded query pairs followed by
	/// the explicit request parameters.
	pub fn signable_params(&self) -> ParamMap {
		let mut params = self.url.query_pairs().collect::<ParamMap>();

		params.merge(&self.params);

		params
	}
}

fn is_token_byte(b: u8) -> bool {
	b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn methods_parse_case_insensitively() {
		assert_eq!(
			"post".parse::<HttpMethod>().expect("Lower-case POST should parse."),
			HttpMethod::Post
		);
		assert_eq!(
			"propfind".parse::<HttpMethod>().expect("Extension tokens should parse."),
			HttpMethod::Extension("PROPFIND".into())
		);
		assert!("GE T".parse::<HttpMethod>().is_err());
		assert!("".parse::<HttpMethod>().is_err());
	}

	#[test]
	fn methods_serialize_as_wire_names() {
		let json = serde_json::to_string(&HttpMethod::Delete).expect("Method should serialize.");

		assert_eq!(json, "\"DELETE\"");

		let method: HttpMethod =
			serde_json::from_str("\"trace\"").expect("Method should deserialize.");

		assert_eq!(method, HttpMethod::Extension("TRACE".into()));
	}

	#[test]
	fn query_pairs_join_the_signable_params() {
		let request = RequestDescriptor::new(
			HttpMethod::Post,
			"http://example.com/request?b5=%3D%253D&a3=a&c%40=&a2=r%20b",
		)
		.expect("Fixture URL should parse.")
		.param("c2", "")
		.param("a3", "2 q");
		let params = request.signable_params();

		assert_eq!(params.get("b5"), Some(&["=%3D".to_string()][..]));
		assert_eq!(params.get("c@"), Some(&[String::new()][..]));
		assert_eq!(params.get("a3"), Some(&["a".to_string(), "2 q".to_string()][..]));
		assert!(RequestDescriptor::new(HttpMethod::Get, "/relative").is_err());
	}

	#[test]
	fn path_is_kept_as_written() {
		let request = RequestDescriptor::new(HttpMethod::Get, "http://example.com/a/./b/../c?x=1")
			.expect("Fixture URL should parse.");

		assert_eq!(request.path(), "/a/./b/../c");
		assert_eq!(request.url.path(), "/a/c");
	}
}
