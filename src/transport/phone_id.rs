use std::collections::BTreeMap;
use std::net::IpAddr;

use serde::Serialize;

use super::body::RequestBody;
use crate::domain::PhoneIdOptions;

#[derive(Debug, Serialize)]
struct PhoneIdJsonRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    account_lifecycle_event: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    originating_ip: Option<IpAddr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    external_id: Option<&'a str>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    addons: BTreeMap<&'static str, EmptyObject>,
}

#[derive(Debug, Serialize)]
struct EmptyObject {}

/// JSON body for `POST /v1/phoneid/{phone_number}`; `{}` when no option is set.
pub fn encode_phone_id_body(options: &PhoneIdOptions) -> Result<RequestBody, serde_json::Error> {
    let request = PhoneIdJsonRequest {
        account_lifecycle_event: options.account_lifecycle_event.map(|event| event.as_str()),
        originating_ip: options.originating_ip,
        external_id: options.external_id.as_ref().map(|id| id.as_str()),
        addons: options
            .addons
            .iter()
            .map(|addon| (addon.as_str(), EmptyObject {}))
            .collect(),
    };
    RequestBody::json(&request)
}
