use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Fixed set of owner-editable profile fields.
///
/// The set is closed: records stored before a field existed are handled by
/// defaulting (empty value, visible flag), never by schema branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    Comment,
    VehicleNumber,
    Nickname,
    VisitPlace,
    PhoneNumber,
    Memo,
    KakaoOpenChatUrl,
}

impl ProfileField {
    pub const ALL: [ProfileField; 7] = [
        Self::Comment,
        Self::VehicleNumber,
        Self::Nickname,
        Self::VisitPlace,
        Self::PhoneNumber,
        Self::Memo,
        Self::KakaoOpenChatUrl,
    ];

    /// Wire name, matching the JSON keys owners and viewers see
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::VehicleNumber => "vehicleNumber",
            Self::Nickname => "nickname",
            Self::VisitPlace => "visitPlace",
            Self::PhoneNumber => "phoneNumber",
            Self::Memo => "memo",
            Self::KakaoOpenChatUrl => "kakaoOpenChatUrl",
        }
    }
}

impl FromStr for ProfileField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "comment" => Ok(Self::Comment),
            "vehicleNumber" => Ok(Self::VehicleNumber),
            "nickname" => Ok(Self::Nickname),
            "visitPlace" => Ok(Self::VisitPlace),
            "phoneNumber" => Ok(Self::PhoneNumber),
            "memo" => Ok(Self::Memo),
            "kakaoOpenChatUrl" => Ok(Self::KakaoOpenChatUrl),
            _ => Err(CoreError::InvalidProfileField {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
