use crate::ProfileField;

use serde::{Deserialize, Serialize};

/// Owner-entered values for the fixed field set.
///
/// Unset fields are empty strings, never absent or null. An empty field is
/// simply not rendered downstream; nothing in the model distinguishes
/// "never entered" from "cleared".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileFields {
    pub comment: String,
    pub vehicle_number: String,
    pub nickname: String,
    pub visit_place: String,
    pub phone_number: String,
    pub memo: String,
    pub kakao_open_chat_url: String,
}

impl ProfileFields {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Comment => &self.comment,
            ProfileField::VehicleNumber => &self.vehicle_number,
            ProfileField::Nickname => &self.nickname,
            ProfileField::VisitPlace => &self.visit_place,
            ProfileField::PhoneNumber => &self.phone_number,
            ProfileField::Memo => &self.memo,
            ProfileField::KakaoOpenChatUrl => &self.kakao_open_chat_url,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::Comment => self.comment = value,
            ProfileField::VehicleNumber => self.vehicle_number = value,
            ProfileField::Nickname => self.nickname = value,
            ProfileField::VisitPlace => self.visit_place = value,
            ProfileField::PhoneNumber => self.phone_number = value,
            ProfileField::Memo => self.memo = value,
            ProfileField::KakaoOpenChatUrl => self.kakao_open_chat_url = value,
        }
    }
}
