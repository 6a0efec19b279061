// src/response.rs
// DOCUMENTATION: Success envelope shared by every JSON endpoint
// PURPOSE: `{status: 200, message: "OK", data: ...}`

use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub status: u16,
    pub message: &'static str,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Envelope {
            status: 200,
            message: "OK",
            data,
        }
    }
}

/// 200 response carrying `data` in the envelope
pub fn ok<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(Envelope::ok(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_shape() {
        let text = serde_json::to_string(&Envelope::ok(vec![1, 2])).unwrap();
        assert_eq!(text, r#"{"status":200,"message":"OK","data":[1,2]}"#);
    }

    #[test]
    fn test_none_payload_is_null() {
        let value = serde_json::to_value(Envelope::ok(None::<i64>)).unwrap();
        assert_eq!(value, json!({ "status": 200, "message": "OK", "data": null }));
    }
}
