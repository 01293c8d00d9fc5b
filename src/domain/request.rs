use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::domain::value::ExternalId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// HTTP verbs accepted by the TeleSign REST API.
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = crate::auth::SigningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            _ => Err(crate::auth::SigningError::UnsupportedMethod {
                method: s.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Body encodings the API accepts.
pub enum ContentType {
    Json,
    FormUrlEncoded,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::FormUrlEncoded => "application/x-www-form-urlencoded",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Account lifecycle stage the lookup is performed for.
pub enum AccountLifecycleEvent {
    Create,
    SignIn,
    Transact,
    Update,
    Delete,
}

impl AccountLifecycleEvent {
    /// Wire value (`account_lifecycle_event`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::SignIn => "sign-in",
            Self::Transact => "transact",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Optional Phone ID data sets requested on top of the base lookup.
pub enum PhoneIdAddon {
    Contact,
    ContactPlus,
    ContactMatch,
    NumberDeactivation,
    SubscriberStatus,
    DeviceInfo,
    PortingHistory,
    PortingStatus,
    SimSwap,
    CallForwarding,
}

impl PhoneIdAddon {
    /// Key used under the `addons` object.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::ContactPlus => "contact_plus",
            Self::ContactMatch => "contact_match",
            Self::NumberDeactivation => "number_deactivation",
            Self::SubscriberStatus => "subscriber_status",
            Self::DeviceInfo => "device_info",
            Self::PortingHistory => "porting_history",
            Self::PortingStatus => "porting_status",
            Self::SimSwap => "sim_swap",
            Self::CallForwarding => "call_forwarding",
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Optional parameters for a Phone ID lookup. All fields default to "not sent".
pub struct PhoneIdOptions {
    pub account_lifecycle_event: Option<AccountLifecycleEvent>,
    pub originating_ip: Option<IpAddr>,
    pub external_id: Option<ExternalId>,
    pub addons: Vec<PhoneIdAddon>,
}
