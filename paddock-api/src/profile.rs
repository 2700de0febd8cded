use async_trait::async_trait;
use serde::Deserialize;

use crate::client::ApiClient;
use crate::errors::ApiError;

const PROFILE_PATH: &str = "/profile";
const SUCCESS_STATUS: &str = "success";

/// Normalized profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub role: Option<String>,
}

impl Profile {
    /// Return "First Last", or the email when both names are blank.
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }

    /// Return up to two uppercase initials for the avatar placeholder.
    pub fn initials(&self) -> String {
        let initials: String = [&self.first_name, &self.last_name]
            .into_iter()
            .filter_map(|part| part.trim().chars().next())
            .flat_map(char::to_uppercase)
            .collect();

        if initials.is_empty() {
            self.email
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_default()
        } else {
            initials
        }
    }
}

/// Raw profile response as returned by the backend.
///
/// Two success shapes are in circulation: `{"success": true, "data": ..}`
/// and `{"status": "success", "data": ..}`. Some deployments also nest the
/// payload under `user` or `profile` instead of `data`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileEnvelope {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default, alias = "user", alias = "profile")]
    data: Option<ProfilePayload>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfilePayload {
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    profile_picture: Option<String>,
    #[serde(default)]
    role: Option<String>,
}

impl ProfileEnvelope {
    /// Return whether the envelope reports success in either dialect.
    pub fn is_success(&self) -> bool {
        self.success == Some(true)
            || self.status.as_deref() == Some(SUCCESS_STATUS)
    }

    /// Normalize the envelope into a [`Profile`].
    pub fn into_profile(self) -> Result<Profile, ApiError> {
        if !self.is_success() {
            let message = self
                .message
                .or(self.status)
                .unwrap_or_else(|| String::from("profile request failed"));
            return Err(ApiError::Rejected { message });
        }

        let payload = self.data.ok_or_else(|| ApiError::Rejected {
            message: String::from("profile payload is missing"),
        })?;

        Ok(Profile {
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            avatar_url: payload
                .profile_picture
                .filter(|url| !url.trim().is_empty()),
            role: payload.role,
        })
    }
}

/// Source of the signed-in user's profile.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetch and normalize the current profile.
    async fn profile(&self) -> Result<Profile, ApiError>;
}

/// Profile source reading `GET /profile`.
#[derive(Clone)]
pub struct HttpProfileSource {
    client: ApiClient,
}

impl HttpProfileSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileSource for HttpProfileSource {
    async fn profile(&self) -> Result<Profile, ApiError> {
        let envelope: ProfileEnvelope =
            self.client.get_json(PROFILE_PATH).await?;
        envelope.into_profile()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Profile, ProfileEnvelope};
    use crate::errors::ApiError;

    fn envelope(value: serde_json::Value) -> ProfileEnvelope {
        serde_json::from_value(value).expect("envelope should deserialize")
    }

    #[test]
    fn given_success_flag_shape_when_normalized_then_profile_is_returned() {
        let profile = envelope(json!({
            "success": true,
            "data": {
                "firstName": "Jane",
                "lastName": "Doe",
                "email": "jane@example.com",
                "profilePicture": "https://cdn.example.com/jane.png",
                "role": "admin"
            }
        }))
        .into_profile()
        .expect("profile should normalize");

        assert_eq!(profile.display_name(), "Jane Doe");
        assert_eq!(
            profile.avatar_url.as_deref(),
            Some("https://cdn.example.com/jane.png")
        );
        assert_eq!(profile.role.as_deref(), Some("admin"));
    }

    #[test]
    fn given_status_success_shape_when_normalized_then_same_profile_is_returned()
     {
        let by_flag = envelope(json!({
            "success": true,
            "data": {"firstName": "Jane", "lastName": "Doe", "email": "j@x.io"}
        }))
        .into_profile()
        .expect("flag shape should normalize");
        let by_status = envelope(json!({
            "status": "success",
            "user": {"firstName": "Jane", "lastName": "Doe", "email": "j@x.io"}
        }))
        .into_profile()
        .expect("status shape should normalize");

        assert_eq!(by_flag, by_status);
    }

    #[test]
    fn given_failure_envelope_when_normalized_then_rejected_with_message() {
        let result = envelope(json!({
            "success": false,
            "message": "token expired"
        }))
        .into_profile();

        match result {
            Err(ApiError::Rejected { message }) => {
                assert_eq!(message, "token expired")
            },
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn given_success_without_payload_when_normalized_then_rejected() {
        let result = envelope(json!({"status": "success"})).into_profile();
        assert!(matches!(result, Err(ApiError::Rejected { .. })));
    }

    #[test]
    fn given_blank_names_when_display_name_requested_then_email_is_used() {
        let profile = Profile {
            first_name: String::from(" "),
            last_name: String::new(),
            email: String::from("ops@example.com"),
            avatar_url: None,
            role: None,
        };
        assert_eq!(profile.display_name(), "ops@example.com");
        assert_eq!(profile.initials(), "O");
    }

    #[test]
    fn given_full_name_when_initials_requested_then_two_letters_returned() {
        let profile = Profile {
            first_name: String::from("jane"),
            last_name: String::from("doe"),
            email: String::new(),
            avatar_url: None,
            role: None,
        };
        assert_eq!(profile.initials(), "JD");
    }
}
