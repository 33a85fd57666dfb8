
use crate::{OwnerKey, ProfileFields, ProfileRecord, VisibilitySettings};

/// Record with representative values in every field
pub(crate) fn sample_record() -> ProfileRecord {
    let fields = ProfileFields {
        comment: "Back in 10 minutes".to_string(),
        vehicle_number: "12가3456".to_string(),
        nickname: "Minsu".to_string(),
        visit_place: "Building A".to_string(),
        phone_number: "010-1234-5678".to_string(),
        memo: "Call before towing".to_string(),
        kakao_open_chat_url: "https://open.kakao.com/o/abc123".to_string(),
    };

    ProfileRecord::new(
        OwnerKey::parse("owner-1").unwrap(),
        fields,
        VisibilitySettings::all_visible(),
    )
}
