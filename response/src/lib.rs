use lambda_http::{
    http::header::{ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE},
    http::StatusCode,
    Body, Response,
};
use serde::Serialize;
use serde_json::json;

fn respond(status: StatusCode, body: String) -> Response<Body> {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .header(ACCESS_CONTROL_ALLOW_CREDENTIALS, "true")
        .body(Body::Text(body))
        .expect("failed to render response")
}

/// 200 with `body` as JSON. Non-ASCII text is written as is, never `\u` escaped.
pub fn ok<T>(body: &T) -> Result<Response<Body>, serde_json::Error>
where
    T: Serialize,
{
    Ok(respond(StatusCode::OK, serde_json::to_string(body)?))
}

/// `{"message": ...}` with the given status.
pub fn error(status: StatusCode, message: String) -> Response<Body> {
    respond(status, json!({ "message": message }).to_string())
}

/// The body of a response rendered by this crate, `None` for empty or binary bodies.
pub fn body_text(response: &Response<Body>) -> Option<&str> {
    match response.body() {
        Body::Text(text) => Some(text.as_str()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn ok_keeps_non_ascii_unescaped() {
        let response = ok(&vec!["販促物"]).unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(&response), Some(r#"["販促物"]"#));
    }

    #[test]
    fn responses_carry_json_and_cors_headers() {
        let response = error(StatusCode::BAD_REQUEST, "nope".into());
        let headers = response.headers();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    }

    #[test]
    fn errors_wrap_message_in_json() {
        let response = error(StatusCode::INTERNAL_SERVER_ERROR, "サーバーエラー".into());
        let body: Value = serde_json::from_str(body_text(&response).unwrap()).unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "サーバーエラー");
    }

    #[test]
    fn empty_bodies_have_no_text() {
        let response = Response::new(Body::Empty);

        assert_eq!(body_text(&response), None);
    }
}
