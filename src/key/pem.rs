// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
// self
use crate::error::PemError;

const PEM_LINE_WIDTH: usize = 64;

/// Extracts the DER bytes from PEM text bounded by `header` and `footer`.
///
/// Surrounding whitespace is ignored, as is any whitespace inside the base64 body.
pub fn pem_to_der(pem_text: &str, header: &str, footer: &str) -> Result<Vec<u8>, PemError> {
	let trimmed = pem_text.trim();
	let body = trimmed
		.strip_prefix(header)
		.ok_or_else(|| PemError::MissingHeader { header: header.to_owned() })?;
	let body = body
		.strip_suffix(footer)
		.ok_or_else(|| PemError::MissingFooter { footer: footer.to_owned() })?;
	let compact = body.chars().filter(|c| !c.is_ascii_whitespace()).collect::<String>();

	STANDARD.decode(compact).map_err(|e| PemError::InvalidBase64 { reason: e.to_string() })
}

/// Armors `der` as PEM: base64 body wrapped at 64 columns between `header` and `footer`, each
/// followed by a newline.
pub fn der_to_pem(der: &[u8], header: &str, footer: &str) -> String {
	let encoded = STANDARD.encode(der);
	let mut pem = String::with_capacity(
		header.len() + footer.len() + encoded.len() + encoded.len() / PEM_LINE_WIDTH + 3,
	);

	pem.push_str(header);
	pem.push('\n');

	for (i, c) in encoded.chars().enumerate() {
		if i > 0 && i % PEM_LINE_WIDTH == 0 {
			pem.push('\n');
		}

		pem.push(c);
	}

	pem.push('\n');
	pem.push_str(footer);
	pem.push('\n');

	pem
}
