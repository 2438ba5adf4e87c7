//! DTOs for registration and sign-in.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::not_blank;
use crate::application::services::SignUp;

/// Request body for `POST /api/auth/signup`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[validate(length(min = 4, max = 40), custom(function = "not_blank"))]
    pub first_name: String,

    #[validate(length(min = 4, max = 40), custom(function = "not_blank"))]
    pub last_name: String,

    #[validate(length(min = 3, max = 15), custom(function = "not_blank"))]
    pub username: String,

    #[validate(length(max = 40), email)]
    pub email: String,

    #[validate(length(min = 6, max = 20))]
    pub password: String,
}

impl From<SignUpRequest> for SignUp {
    fn from(r: SignUpRequest) -> Self {
        SignUp {
            first_name: r.first_name,
            last_name: r.last_name,
            username: r.username,
            email: r.email,
            password: r.password,
        }
    }
}

/// Request body for `POST /api/auth/signin`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(custom(function = "not_blank"))]
    pub username_or_email: String,

    #[validate(custom(function = "not_blank"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtAuthenticationResponse {
    pub access_token: String,
    pub token_type: String,
}

impl JwtAuthenticationResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_validation() {
        let request: SignUpRequest = serde_json::from_str(
            r#"{"firstName":"Leanne","lastName":"Graham","username":"leanne","email":"not-an-email","password":"password"}"#,
        )
        .unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_sign_up_short_password() {
        let request: SignUpRequest = serde_json::from_str(
            r#"{"firstName":"Leanne","lastName":"Graham","username":"leanne","email":"leanne.graham@gmail.com","password":"123"}"#,
        )
        .unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_login_blank_fields() {
        let request = LoginRequest {
            username_or_email: " ".to_string(),
            password: "password".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_bearer_response_shape() {
        let json = serde_json::to_value(JwtAuthenticationResponse::bearer("abc".into())).unwrap();
        assert_eq!(json["accessToken"], "abc");
        assert_eq!(json["tokenType"], "Bearer");
    }
}
