//! Account Entity Implementation
//!
//! 가입 요청 한 번의 생명주기 동안 계층 사이를 오가는 계정 모델입니다.

use serde::{Deserialize, Serialize};

/// 계정 생성 입력값
///
/// 컨트롤러가 검증을 마친 뒤 만들고, 유스케이스가 정확히 한 번 소비합니다.
/// `password`는 해싱 전 평문이며, 유스케이스를 거치면서 해시로 교체됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAccountModel {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// 저장된 계정
///
/// 리포지토리가 `id`를 부여해 한 번 만들고, 이후 호출 체인을 따라 변경 없이 반환됩니다.
/// `password`는 해시 값입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountModel {
    /// 저장소가 부여한 불투명 식별자
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AccountModel {
    /// 저장된 입력값에 식별자를 붙여 계정을 만듭니다.
    pub fn from_stored(id: impl Into<String>, data: AddAccountModel) -> Self {
        let AddAccountModel { name, email, password } = data;

        Self {
            id: id.into(),
            name,
            email,
            password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored_keeps_fields() {
        let data = AddAccountModel {
            name: "valid_name".to_string(),
            email: "valid@email.com".to_string(),
            password: "hashed_password".to_string(),
        };

        let account = AccountModel::from_stored("valid_id", data);

        assert_eq!(account.id, "valid_id");
        assert_eq!(account.name, "valid_name");
        assert_eq!(account.email, "valid@email.com");
        assert_eq!(account.password, "hashed_password");
    }

    #[test]
    fn test_account_serializes_flat() {
        let account = AccountModel {
            id: "valid_id".to_string(),
            name: "valid_name".to_string(),
            email: "valid@email.com".to_string(),
            password: "hashed_password".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&account).unwrap(),
            serde_json::json!({
                "id": "valid_id",
                "name": "valid_name",
                "email": "valid@email.com",
                "password": "hashed_password",
            })
        );
    }
}
