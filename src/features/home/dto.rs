use std::fmt;

use axum::http::Uri;

use crate::core::error::AppError;

pub const DEFAULT_REDIRECT_LOCATION: &str = "https://google.com";
pub const GREETING: &str = "Hello there";

/// The response served on the application root.
///
/// Only one variant is active per process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeResponse {
    /// `303 See Other` pointing at `location`, with no body.
    Redirect { location: String },
    /// `200 OK` with a plain text greeting.
    Greeting,
}

impl Default for HomeResponse {
    fn default() -> Self {
        Self::Redirect {
            location: DEFAULT_REDIRECT_LOCATION.to_string(),
        }
    }
}

impl HomeResponse {
    pub fn greeting() -> Self {
        Self::Greeting
    }

    /// Validates `location` as an absolute URI before accepting it as a redirect target.
    pub fn redirect(location: &str) -> Result<Self, AppError> {
        let location = location.trim();
        let uri = location.parse::<Uri>().map_err(|err| {
            AppError::configuration(format!("invalid redirect location {location:?}: {err}"))
        })?;

        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(AppError::configuration(format!(
                "redirect location {location:?} must be an absolute URI"
            )));
        }

        Ok(Self::Redirect {
            location: location.to_string(),
        })
    }

    pub fn parse(kind: &str, location: &str) -> Result<Self, AppError> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "redirect" | "see-other" => Self::redirect(location),
            "greeting" | "hello" => Ok(Self::greeting()),
            other => Err(AppError::configuration(format!(
                "unknown HOME_RESPONSE {other:?}, expected \"redirect\" or \"greeting\""
            ))),
        }
    }
}

impl fmt::Display for HomeResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Redirect { location } => write!(f, "redirect to {location}"),
            Self::Greeting => f.write_str("greeting"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_target_is_valid() {
        assert_eq!(
            HomeResponse::redirect(DEFAULT_REDIRECT_LOCATION).unwrap(),
            HomeResponse::default()
        );
    }

    #[test]
    fn relative_targets_are_rejected() {
        assert!(HomeResponse::redirect("/ui").is_err());
        assert!(HomeResponse::redirect("google.com").is_err());
        assert!(HomeResponse::redirect("").is_err());
    }

    #[test]
    fn greeting_ignores_location() {
        assert_eq!(
            HomeResponse::parse("hello", "not a url").unwrap(),
            HomeResponse::Greeting
        );
    }

    #[test]
    fn display_names_the_variant() {
        assert_eq!(
            HomeResponse::default().to_string(),
            "redirect to https://google.com"
        );
        assert_eq!(HomeResponse::Greeting.to_string(), "greeting");
    }
}
