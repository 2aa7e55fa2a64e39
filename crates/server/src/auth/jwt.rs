use jsonwebtoken::errors::{Error, ErrorKind};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use shared_types::{Role, SessionIdentity, SessionSource};

/// Token type discriminator; anything but an access token is refused.
pub const TOKEN_TYPE_ACCESS: &str = "access";

/// JWT claims carried by the session cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Identity-service user id.
    pub sub: String,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    #[serde(default)]
    pub typ: String,
}

impl Claims {
    pub fn session(&self) -> SessionIdentity {
        SessionIdentity {
            id: self.sub.clone(),
            email: self.email.clone(),
            role: Role::from_str_or_default(&self.role),
            source: SessionSource::Issued,
        }
    }
}

fn jwt_secret() -> Result<String, Error> {
    match std::env::var("JWT_SECRET") {
        Ok(secret) if !secret.is_empty() => Ok(secret),
        _ => {
            tracing::error!("JWT_SECRET is not set; refusing to verify tokens");
            Err(ErrorKind::InvalidKeyFormat.into())
        }
    }
}

/// Validate signature, expiry and token type.
pub fn validate_access_token(token: &str) -> Result<Claims, Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret()?.as_bytes()),
        &Validation::default(),
    )?;
    if token_data.claims.typ != TOKEN_TYPE_ACCESS {
        return Err(ErrorKind::InvalidToken.into());
    }
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn setup_test_secret() {
        std::env::set_var("JWT_SECRET", "test-secret-key-for-jwt-unit-tests");
    }

    fn sign(claims: &Claims) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(jwt_secret().unwrap().as_bytes()),
        )
        .unwrap()
    }

    /// An hour-long access token, as the identity service would issue it.
    fn issue(user_id: &str, email: &str, role: Role) -> String {
        let now = Utc::now();
        sign(&Claims {
            sub: user_id.into(),
            email: email.into(),
            role: role.as_str().into(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
            jti: Some(uuid::Uuid::new_v4().to_string()),
            typ: TOKEN_TYPE_ACCESS.into(),
        })
    }

    #[test]
    fn issued_token_validates() {
        setup_test_secret();
        let token = issue("u-42", "meena@acharya.gov.in", Role::Faculty);
        let claims = validate_access_token(&token).unwrap();
        assert_eq!(claims.sub, "u-42");
        assert_eq!(claims.email, "meena@acharya.gov.in");
        assert_eq!(claims.role, "faculty");
        assert_eq!(claims.typ, TOKEN_TYPE_ACCESS);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn claims_map_to_issued_session() {
        setup_test_secret();
        let token = issue("u-7", "warden@acharya.gov.in", Role::Warden);
        let session = validate_access_token(&token).unwrap().session();
        assert_eq!(session.id, "u-7");
        assert_eq!(session.role, Role::Warden);
        assert_eq!(session.source, SessionSource::Issued);
    }

    #[test]
    fn unknown_role_claim_maps_to_student() {
        let claims = Claims {
            sub: "u-1".into(),
            email: "x@y.z".into(),
            role: "janitor".into(),
            exp: 0,
            iat: 0,
            jti: None,
            typ: TOKEN_TYPE_ACCESS.into(),
        };
        assert_eq!(claims.session().role, Role::Student);
    }

    #[test]
    fn expired_token_rejected() {
        setup_test_secret();
        let now = Utc::now();
        let token = sign(&Claims {
            sub: "u-1".into(),
            email: "expired@test.com".into(),
            role: "student".into(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
            jti: None,
            typ: TOKEN_TYPE_ACCESS.into(),
        });
        assert!(validate_access_token(&token).is_err());
    }

    #[test]
    fn non_access_token_rejected() {
        setup_test_secret();
        let now = Utc::now();
        let token = sign(&Claims {
            sub: "u-1".into(),
            email: "a@b.com".into(),
            role: "student".into(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
            jti: None,
            typ: "refresh".into(),
        });
        assert!(validate_access_token(&token).is_err());
    }

    #[test]
    fn invalid_token_rejected() {
        setup_test_secret();
        assert!(validate_access_token("not.a.valid.jwt").is_err());
        assert!(validate_access_token("").is_err());
    }
}
