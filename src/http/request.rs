use std::num::ParseIntError;
use std::time::SystemTime;

use crate::http::headers::HeaderStore;

const BEARER_PREFIX: &str = "Bearer ";
const JSON_MEDIA_TYPE: &str = "application/json";

/// Common HTTP request headers
/// This enum defines the set of headers that can be set on a [`HeaderStore`]
/// through [`HeaderStore::set_header`] without spelling the name by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestHeader {
    Host,
    ContentLength,
    ContentType,
    Authorization,
    Accept,
    UserAgent,
    Date,
    RequestId,
}

impl RequestHeader {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestHeader::Host => "Host",
            RequestHeader::ContentLength => "Content-Length",
            RequestHeader::ContentType => "Content-Type",
            RequestHeader::Authorization => "Authorization",
            RequestHeader::Accept => "Accept",
            RequestHeader::UserAgent => "User-Agent",
            RequestHeader::Date => "Date",
            RequestHeader::RequestId => "X-Request-ID",
        }
    }
}

impl HeaderStore {
    /// Sets one of the well-known [`RequestHeader`]s.
    ///
    /// No validation is performed on the header value itself.
    pub fn set_header(&mut self, h: RequestHeader, value: &str) {
        self.set(h.as_str(), value);
    }

    pub fn header(&self, h: RequestHeader) -> Option<&str> {
        self.get(h.as_str())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header(RequestHeader::ContentType)
    }

    pub fn host(&self) -> Option<&str> {
        self.header(RequestHeader::Host)
    }

    pub fn accept(&self) -> Option<&str> {
        self.header(RequestHeader::Accept)
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.header(RequestHeader::UserAgent)
    }

    pub fn request_id(&self) -> Option<&str> {
        self.header(RequestHeader::RequestId)
    }

    /// Token following `Bearer ` in the `Authorization` header.
    ///
    /// The prefix is matched case-sensitively unless
    /// [`bearer_match_case`](crate::config::StoreConfig::bearer_match_case)
    /// is off. The token itself is returned as-is.
    pub fn bearer_token(&self) -> Option<&str> {
        let auth = self.header(RequestHeader::Authorization)?;

        if self.config.bearer_match_case {
            return auth.strip_prefix(BEARER_PREFIX);
        }

        let prefix = auth.get(..BEARER_PREFIX.len())?;
        if prefix.eq_ignore_ascii_case(BEARER_PREFIX) {
            auth.get(BEARER_PREFIX.len()..)
        } else {
            None
        }
    }

    /// Whether `Content-Type` mentions `application/json`, parameters included.
    pub fn is_json_request(&self) -> bool {
        let Some(content_type) = self.content_type() else {
            return false;
        };

        if self.config.json_match_case {
            content_type.contains(JSON_MEDIA_TYPE)
        } else {
            content_type.to_ascii_lowercase().contains(JSON_MEDIA_TYPE)
        }
    }

    pub fn content_length(&self) -> Result<Option<usize>, ParseIntError> {
        self.header(RequestHeader::ContentLength)
            .map(|v| v.parse::<usize>())
            .transpose()
    }

    /// `Date` header as an HTTP-date. Unparsable dates read as absent.
    pub fn date(&self) -> Option<SystemTime> {
        self.header(RequestHeader::Date)
            .and_then(|v| httpdate::parse_http_date(v).ok())
    }
}
