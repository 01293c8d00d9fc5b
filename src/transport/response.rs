use crate::client::HttpResponse;
use crate::domain::TelesignResponse;

/// Keep status, headers and body as received; attach parsed JSON when the body is JSON.
pub fn decode_response(response: HttpResponse) -> TelesignResponse {
    let json = if response.body.trim().is_empty() {
        None
    } else {
        serde_json::from_str(&response.body).ok()
    };

    TelesignResponse {
        status_code: response.status,
        headers: response.headers,
        body: response.body,
        json,
    }
}
