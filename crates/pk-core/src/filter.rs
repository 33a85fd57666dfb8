//! Visibility filter - the pure projection from stored record to public view.

use crate::{ProfileField, ProfileRecord, PublicView};

/// Project a record into the view an anonymous scanner may see.
///
/// Stateless and side-effect free. A field survives projection only when its
/// visibility flag is set and its value is non-empty after trimming; the
/// value itself is passed through unmodified.
pub fn project(record: &ProfileRecord) -> PublicView {
    let visible = |field: ProfileField| -> Option<String> {
        record
            .visibility
            .is_visible(field)
            .then(|| record.fields.get(field))
            .filter(|value| !value.trim().is_empty())
            .map(|value| value.to_string())
    };

    PublicView {
        last_updated: record.last_updated,
        comment: visible(ProfileField::Comment),
        vehicle_number: visible(ProfileField::VehicleNumber),
        nickname: visible(ProfileField::Nickname),
        visit_place: visible(ProfileField::VisitPlace),
        phone_number: visible(ProfileField::PhoneNumber),
        memo: visible(ProfileField::Memo),
        kakao_open_chat_url: visible(ProfileField::KakaoOpenChatUrl),
    }
}
