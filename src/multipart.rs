//! Parsing of multipart form bodies into named fields.

use crate::error::Error;

/// A single named field extracted from a multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

/// Parses a multipart body into its named fields.
///
/// `content_type` is the full Content-Type header value, which must carry
/// a `boundary` parameter. Parts without a `name` in their
/// Content-Disposition are skipped; file parts are returned with their raw
/// content and no file metadata.
pub fn parse_form_data(content_type: &str, body: &str) -> Result<Vec<FormField>, Error> {
    let boundary = boundary(content_type).ok_or_else(|| {
        Error::Decode("multipart body without a boundary parameter".to_string())
    })?;
    let delimiter = format!("--{}", boundary);

    let mut fields = Vec::new();
    for part in body.split(delimiter.as_str()) {
        let part = part.trim_start_matches("\r\n");
        // The text before the first delimiter and the closing "--" marker
        // are not parts.
        if part.is_empty() || part.starts_with("--") {
            continue;
        }
        let Some((headers, value)) = part.split_once("\r\n\r\n") else {
            continue;
        };
        let Some(name) = field_name(headers) else {
            continue;
        };
        fields.push(FormField {
            name,
            value: value.trim_end_matches("\r\n").to_string(),
        });
    }
    Ok(fields)
}

/// Extracts the `boundary` parameter from a Content-Type value.
fn boundary(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.trim().split_once('=')?;
        key.eq_ignore_ascii_case("boundary")
            .then(|| value.trim_matches('"'))
    })
}

/// Pulls `name="..."` out of a part's Content-Disposition header.
fn field_name(headers: &str) -> Option<String> {
    headers.lines().find_map(|line| {
        let (key, rest) = line.split_once(':')?;
        if !key.trim().eq_ignore_ascii_case("content-disposition") {
            return None;
        }
        rest.split(';').find_map(|param| {
            let (key, value) = param.trim().split_once('=')?;
            (key == "name").then(|| value.trim_matches('"').to_string())
        })
    })
}
