//! Bearer-token verification against the identity provider's published JWK set

use jsonwebtoken::{
    decode, decode_header,
    jwk::JwkSet,
    Algorithm, DecodingKey, Validation,
};

use crate::{
    error::{AppError, AppResult},
    models::{Claims, Principal},
};

/// Stateless per-request JWT verifier.
///
/// Keys are fetched once at startup; every request is independently
/// authenticated against them. No session state is kept.
pub struct JwtVerifier {
    keys: Vec<(Option<String>, DecodingKey)>,
    validation: Validation,
    client_id: String,
}

impl JwtVerifier {
    /// Fetch the JWK set from the configured endpoint and build a verifier.
    pub async fn from_jwk_set_uri(uri: &str, client_id: &str) -> AppResult<Self> {
        let jwk_set: JwkSet = reqwest::get(uri)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to fetch JWK set from {}: {}", uri, e)))?
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse JWK set: {}", e)))?;

        Self::from_jwk_set(&jwk_set, client_id)
    }

    /// Build a verifier from an already-parsed JWK set.
    pub fn from_jwk_set(jwk_set: &JwkSet, client_id: &str) -> AppResult<Self> {
        let mut keys = Vec::new();
        for jwk in &jwk_set.keys {
            match DecodingKey::from_jwk(jwk) {
                Ok(key) => keys.push((jwk.common.key_id.clone(), key)),
                Err(e) => {
                    tracing::warn!("Skipping unusable JWK {:?}: {}", jwk.common.key_id, e);
                }
            }
        }

        if keys.is_empty() {
            return Err(AppError::Internal(
                "JWK set contains no usable keys".to_string(),
            ));
        }

        let mut validation = Validation::new(Algorithm::RS256);
        // Audience is not asserted by the identity provider for this client
        validation.validate_aud = false;

        Ok(Self {
            keys,
            validation,
            client_id: client_id.to_string(),
        })
    }

    /// Validate signature and expiry, then derive the request identity from
    /// the principal name and client-scoped role claims.
    pub fn verify(&self, token: &str) -> AppResult<Principal> {
        let header = decode_header(token)
            .map_err(|e| AppError::Authentication(format!("Invalid token: {}", e)))?;

        let key = match header.kid {
            Some(ref kid) => self
                .keys
                .iter()
                .find(|(key_id, _)| key_id.as_deref() == Some(kid))
                .map(|(_, key)| key)
                .ok_or_else(|| {
                    AppError::Authentication(format!("Unknown signing key: {}", kid))
                })?,
            // Tokens without a kid are checked against the first published key
            None => &self.keys[0].1,
        };

        let token_data = decode::<Claims>(token, key, &self.validation)
            .map_err(|e| AppError::Authentication(format!("Invalid token: {}", e)))?;

        Ok(Principal::from_claims(&token_data.claims, &self.client_id))
    }
}
