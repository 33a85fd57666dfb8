use crate::ProfileField;

use serde::{Deserialize, Serialize};

/// Per-field public/private flags.
///
/// Every field defaults to visible, including fields the owner never set.
/// Records stored before a flag existed deserialize with the missing keys
/// filled from `Default`, so absence always reads as visible. Flags are
/// independent of value presence: an owner may hide a field that is still
/// empty, and the flag survives until changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisibilitySettings {
    pub comment: bool,
    pub vehicle_number: bool,
    pub nickname: bool,
    pub visit_place: bool,
    pub phone_number: bool,
    pub memo: bool,
    pub kakao_open_chat_url: bool,
}

impl Default for VisibilitySettings {
    fn default() -> Self {
        Self {
            comment: true,
            vehicle_number: true,
            nickname: true,
            visit_place: true,
            phone_number: true,
            memo: true,
            kakao_open_chat_url: true,
        }
    }
}

impl VisibilitySettings {
    pub fn all_visible() -> Self {
        Self::default()
    }

    pub fn all_hidden() -> Self {
        Self {
            comment: false,
            vehicle_number: false,
            nickname: false,
            visit_place: false,
            phone_number: false,
            memo: false,
            kakao_open_chat_url: false,
        }
    }

    pub fn is_visible(&self, field: ProfileField) -> bool {
        match field {
            ProfileField::Comment => self.comment,
            ProfileField::VehicleNumber => self.vehicle_number,
            ProfileField::Nickname => self.nickname,
            ProfileField::VisitPlace => self.visit_place,
            ProfileField::PhoneNumber => self.phone_number,
            ProfileField::Memo => self.memo,
            ProfileField::KakaoOpenChatUrl => self.kakao_open_chat_url,
        }
    }

    pub fn set(&mut self, field: ProfileField, visible: bool) {
        match field {
            ProfileField::Comment => self.comment = visible,
            ProfileField::VehicleNumber => self.vehicle_number = visible,
            ProfileField::Nickname => self.nickname = visible,
            ProfileField::VisitPlace => self.visit_place = visible,
            ProfileField::PhoneNumber => self.phone_number = visible,
            ProfileField::Memo => self.memo = visible,
            ProfileField::KakaoOpenChatUrl => self.kakao_open_chat_url = visible,
        }
    }
}
