use crate::ProfileField;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// The filtered projection of a record shown to anonymous viewers.
///
/// A field is `Some` only when its visibility flag allows it and the stored
/// value is non-empty after trimming; otherwise it is `None` and serialization
/// omits the key entirely. Downstream rendering can therefore distinguish
/// "omitted" from "present but empty" - the latter never occurs here.
/// `last_updated` is record metadata, always present, never subject to flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicView {
    pub last_updated: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kakao_open_chat_url: Option<String>,
}

impl PublicView {
    pub fn get(&self, field: ProfileField) -> Option<&str> {
        match field {
            ProfileField::Comment => self.comment.as_deref(),
            ProfileField::VehicleNumber => self.vehicle_number.as_deref(),
            ProfileField::Nickname => self.nickname.as_deref(),
            ProfileField::VisitPlace => self.visit_place.as_deref(),
            ProfileField::PhoneNumber => self.phone_number.as_deref(),
            ProfileField::Memo => self.memo.as_deref(),
            ProfileField::KakaoOpenChatUrl => self.kakao_open_chat_url.as_deref(),
        }
    }

    /// `tel:` URI for the call-the-owner action.
    ///
    /// Gated solely by the phone number's own visibility, independent of the
    /// open-chat action.
    pub fn phone_call_uri(&self) -> Option<String> {
        self.phone_number.as_deref().map(|n| format!("tel:{}", n))
    }

    /// Target URL for the open-chat action, gated solely by its own field.
    pub fn chat_url(&self) -> Option<&str> {
        self.kakao_open_chat_url.as_deref()
    }
}
