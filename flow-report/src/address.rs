//! Reading and writing the selected step in the document address
//!
//! The selection lives in a single query parameter (`?step=<n>` by default).
//! A missing parameter means the summary is shown. A present but non-integer
//! value is a corrupted link and is reported as an error instead of being
//! silently ignored.

use crate::config::{FlowReportConfig, DEFAULT_STEP_PARAM};
use crate::error::{FlowReportError, Result};
use url::{form_urlencoded, Url};

/// Encoding of the step selection inside an address
pub trait AddressCodec {
    /// Extract the raw selection from an address.
    ///
    /// Returns `Ok(None)` when the address carries no selection. The value is
    /// not range checked; negative or too large indices are returned as-is.
    fn decode(&self, address: &Url) -> Result<Option<i64>>;

    /// Produce `address` with the selection set to `index`, or removed for `None`.
    /// Every other component of the address is kept.
    fn encode(&self, address: &Url, index: Option<usize>) -> Url;

    /// Produce `address` with the selection removed
    fn clear(&self, address: &Url) -> Url {
        self.encode(address, None)
    }
}

/// Parse a document address
pub fn parse_address(address: &str) -> Result<Url> {
    Ok(Url::parse(address)?)
}

/// Query parameter codec, `?step=<n>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryStepCodec {
    param: String,
}

impl QueryStepCodec {
    /// Create a codec using the default `step` parameter
    pub fn new() -> Self {
        Self::with_param(DEFAULT_STEP_PARAM)
    }

    /// Create a codec using a custom parameter name
    pub fn with_param<S: Into<String>>(param: S) -> Self {
        Self {
            param: param.into(),
        }
    }

    /// Create a codec from the address section of the configuration
    pub fn from_config(config: &FlowReportConfig) -> Self {
        Self::with_param(config.address.param.clone())
    }

    pub fn param(&self) -> &str {
        &self.param
    }

    fn has_param(&self, address: &Url) -> bool {
        address.query_pairs().any(|(key, _)| key == self.param.as_str())
    }

    /// Whether a raw `key=value` query segment carries this codec's parameter
    fn is_param_segment(&self, segment: &str) -> bool {
        form_urlencoded::parse(segment.as_bytes())
            .next()
            .is_some_and(|(key, _)| key == self.param.as_str())
    }
}

impl Default for QueryStepCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressCodec for QueryStepCodec {
    fn decode(&self, address: &Url) -> Result<Option<i64>> {
        // First occurrence wins, later duplicates are ignored
        let value = match address
            .query_pairs()
            .find(|(key, _)| key == self.param.as_str())
        {
            Some((_, value)) => value,
            None => return Ok(None),
        };

        match value.parse::<i64>() {
            Ok(index) => Ok(Some(index)),
            // Well-formed but wider than i64, so certainly outside any flow
            Err(_) if is_integer(&value) => Ok(Some(if value.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            })),
            Err(_) => Err(FlowReportError::malformed_step(self.param.as_str(), value.as_ref())),
        }
    }

    fn encode(&self, address: &Url, index: Option<usize>) -> Url {
        if index.is_none() && !self.has_param(address) {
            return address.clone();
        }

        // Work on the raw segments so unrelated pairs keep their exact encoding
        let mut segments: Vec<String> = Vec::new();
        let mut written = false;
        for segment in address.query().unwrap_or_default().split('&') {
            if segment.is_empty() {
                continue;
            }
            if !self.is_param_segment(segment) {
                segments.push(segment.to_string());
                continue;
            }
            // Replace the first occurrence in place and drop the rest
            if let (Some(index), false) = (index, written) {
                let raw_key = segment.split('=').next().unwrap_or_default();
                segments.push(format!("{}={}", raw_key, index));
                written = true;
            }
        }

        if let (Some(index), false) = (index, written) {
            segments.push(format!("{}={}", self.param, index));
        }

        let mut url = address.clone();
        if segments.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&segments.join("&")));
        }
        url
    }
}

/// Optional sign followed by at least one ASCII digit
fn is_integer(value: &str) -> bool {
    let digits = value.strip_prefix(['-', '+']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_decode_present() {
        let codec = QueryStepCodec::new();
        assert_eq!(codec.decode(&url("file:///Users/example/report.html?step=1")).unwrap(), Some(1));
        assert_eq!(codec.decode(&url("https://example.com/r.html?a=b&step=12#top")).unwrap(), Some(12));
    }

    #[test]
    fn test_decode_absent() {
        let codec = QueryStepCodec::new();
        assert_eq!(codec.decode(&url("file:///Users/example/report.html")).unwrap(), None);
        assert_eq!(codec.decode(&url("file:///Users/example/report.html?steps=1")).unwrap(), None);
        // The fragment is not consulted
        assert_eq!(codec.decode(&url("file:///Users/example/report.html#index=1")).unwrap(), None);
    }

    #[test]
    fn test_decode_malformed_fails_loud() {
        let codec = QueryStepCodec::new();
        let result = codec.decode(&url("file:///Users/example/report.html?step=OHNO"));

        match result {
            Err(FlowReportError::MalformedStep { param, value }) => {
                assert_eq!(param, "step");
                assert_eq!(value, "OHNO");
            }
            other => panic!("expected MalformedStep, got {:?}", other),
        }

        assert!(codec.decode(&url("file:///r.html?step=")).is_err());
        assert!(codec.decode(&url("file:///r.html?step=1.5")).is_err());
    }

    #[test]
    fn test_decode_negative_is_not_an_error() {
        let codec = QueryStepCodec::new();
        assert_eq!(codec.decode(&url("file:///r.html?step=-1")).unwrap(), Some(-1));
    }

    #[test]
    fn test_decode_first_occurrence_wins() {
        let codec = QueryStepCodec::new();
        assert_eq!(codec.decode(&url("file:///r.html?step=2&step=OHNO")).unwrap(), Some(2));
    }

    #[test]
    fn test_encode_sets_param() {
        let codec = QueryStepCodec::new();
        let encoded = codec.encode(&url("file:///Users/example/report.html"), Some(0));
        assert_eq!(encoded.as_str(), "file:///Users/example/report.html?step=0");
    }

    #[test]
    fn test_encode_preserves_other_components() {
        let codec = QueryStepCodec::new();
        let encoded = codec.encode(&url("https://example.com/flow/r.html?lang=en&step=3&x=1#details"), Some(5));
        assert_eq!(encoded.as_str(), "https://example.com/flow/r.html?lang=en&step=5&x=1#details");
    }

    #[test]
    fn test_encode_drops_duplicates() {
        let codec = QueryStepCodec::new();
        let encoded = codec.encode(&url("file:///r.html?step=1&a=b&step=2"), Some(4));
        assert_eq!(encoded.as_str(), "file:///r.html?step=4&a=b");
    }

    #[test]
    fn test_clear() {
        let codec = QueryStepCodec::new();
        assert_eq!(
            codec.clear(&url("file:///Users/example/report.html?step=1")).as_str(),
            "file:///Users/example/report.html"
        );
        assert_eq!(
            codec.clear(&url("file:///r.html?a=b&step=1#x")).as_str(),
            "file:///r.html?a=b#x"
        );
        // Untouched when there is nothing to clear
        assert_eq!(codec.clear(&url("file:///r.html?q=a%20b")).as_str(), "file:///r.html?q=a%20b");
    }

    #[test]
    fn test_custom_param() {
        let codec = QueryStepCodec::with_param("page");
        let encoded = codec.encode(&url("file:///r.html?step=9"), Some(2));
        assert_eq!(encoded.as_str(), "file:///r.html?step=9&page=2");
        assert_eq!(codec.decode(&encoded).unwrap(), Some(2));
    }

    #[test]
    fn test_parse_address() {
        assert_eq!(parse_address("file:///r.html?step=3").unwrap().query(), Some("step=3"));
        assert!(matches!(parse_address("not a url"), Err(FlowReportError::UrlParse(_))));
    }

    #[test]
    fn test_decode_overflowing_integer_is_out_of_range() {
        let codec = QueryStepCodec::new();
        assert_eq!(
            codec.decode(&url("file:///r.html?step=99999999999999999999")).unwrap(),
            Some(i64::MAX)
        );
        assert_eq!(
            codec.decode(&url("file:///r.html?step=-99999999999999999999")).unwrap(),
            Some(i64::MIN)
        );
        assert!(codec.decode(&url("file:///r.html?step=-")).is_err());
        assert!(codec.decode(&url("file:///r.html?step=9e99")).is_err());
    }

    #[test]
    fn test_encode_keeps_other_segments_verbatim() {
        let codec = QueryStepCodec::new();
        let address = url("file:///r.html?q=a%20b&flag&step=1");

        assert_eq!(
            codec.encode(&address, Some(2)).as_str(),
            "file:///r.html?q=a%20b&flag&step=2"
        );
        assert_eq!(codec.clear(&address).as_str(), "file:///r.html?q=a%20b&flag");
        assert_eq!(
            codec.encode(&url("file:///r.html?q=a%20b&flag"), Some(0)).as_str(),
            "file:///r.html?q=a%20b&flag&step=0"
        );
    }
}
