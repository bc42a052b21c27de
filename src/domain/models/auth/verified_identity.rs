use serde::Serialize;

/// 아이덴티티 프로바이더가 확인한 사용자
///
/// 토큰 발급의 유일한 입력입니다. 빈 id 로는 만들 수 없습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifiedIdentity {
    id: String,
}

impl VerifiedIdentity {
    /// 공백을 제거한 id 가 비어 있으면 `None`
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self { id: trimmed.to_string() })
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}
