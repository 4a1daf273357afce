//! HTTP-style response envelope returned to the API gateway.
use serde::{Deserialize, Serialize};

pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";
pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "DELETE,GET,HEAD,OPTIONS,PATCH,POST,PUT";

/// Static permissive CORS headers attached to every response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CorsHeaders {
    #[serde(rename = "Access-Control-Allow-Headers")]
    pub allow_headers: String,
    #[serde(rename = "Access-Control-Allow-Origin")]
    pub allow_origin: String,
    #[serde(rename = "Access-Control-Allow-Methods")]
    pub allow_methods: String,
    // serialized as a JSON boolean, not the string "true"
    #[serde(rename = "Access-Control-Allow-Credentials")]
    pub allow_credentials: bool,
}

impl Default for CorsHeaders {
    fn default() -> Self {
        Self {
            allow_headers: ALLOW_HEADERS.to_string(),
            allow_origin: ALLOW_ORIGIN.to_string(),
            allow_methods: ALLOW_METHODS.to_string(),
            allow_credentials: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: CorsHeaders,
    pub body: String,
}

impl ApiResponse {
    /// A 200 response carrying an already encoded JSON body.
    pub fn ok(body: String) -> Self {
        Self {
            status_code: 200,
            headers: CorsHeaders::default(),
            body,
        }
    }

    /// Encode `payload` as the JSON body of a 200 response.
    pub fn json<T: Serialize + ?Sized>(payload: &T) -> serde_json::Result<Self> {
        Ok(Self::ok(serde_json::to_string(payload)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_uses_gateway_field_names() {
        let response = ApiResponse::json(&[0]).unwrap();
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["body"], "[0]");
        assert_eq!(value["headers"]["Access-Control-Allow-Origin"], "*");
        assert_eq!(value["headers"]["Access-Control-Allow-Credentials"], true);
        assert_eq!(value.as_object().unwrap().len(), 3);
    }
}
