use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::SkyDriveError;
use crate::validation::ValidationRule;

/// The application configuration, assembled once at startup and read-only
/// afterwards. Consumers receive it by reference; nothing mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub github_link: String,
    pub main_name: String,

    /// Prefixes the HTTP layer glues onto every request URL.
    pub base_url: String,
    pub base_api: String,

    pub validate_login_form: bool,
    pub validate_registration_form: bool,

    pub valid_username: ValidationRule,
    pub valid_password: ValidationRule,
    pub valid_folder_name: ValidationRule,

    pub is_move_allowed: bool,
    pub is_cut_paste_allowed: bool,
    pub is_file_context_menu_allowed: bool,
    pub is_shortcuts_allowed: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            github_link: "https://github.com/VladBaykin/SkyDrive".to_string(),
            main_name: "CLOUD STORAGE".to_string(),
            base_url: String::new(),
            base_api: "/api".to_string(),
            validate_login_form: true,
            validate_registration_form: true,
            valid_username: ValidationRule::new(5, 20, "^[a-zA-Z0-9]+[a-zA-Z_0-9]*[a-zA-Z0-9]+$"),
            valid_password: ValidationRule::new(
                5,
                20,
                r#"^[a-zA-Z0-9!@#$%^&*(),.?":{}|<>\[\]/`~+=-_';]*$"#,
            ),
            valid_folder_name: ValidationRule::new(1, 200, r#"^[^/\\:*?"<>|]+$"#),
            is_move_allowed: true,
            is_cut_paste_allowed: true,
            is_file_context_menu_allowed: true,
            is_shortcuts_allowed: true,
        }
    }
}

impl AppConfig {
    /// Layer the configuration sources and validate the result.
    ///
    /// Precedence, lowest first: compiled-in defaults, `SkyDrive.toml`,
    /// `SkyDrive-dev.toml`, then `SKYDRIVE_*` environment variables (`__`
    /// separates nested keys, e.g. `SKYDRIVE_VALID_USERNAME__MIN_LENGTH`).
    pub fn build() -> Result<Self, SkyDriveError> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file("SkyDrive.toml"))
            .merge(Toml::file("SkyDrive-dev.toml"))
            .merge(Env::prefixed("SKYDRIVE_").split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Check every validation rule's definition-time invariants. A config
    /// that fails here never escapes [`AppConfig::build`].
    pub fn validate(&self) -> Result<(), SkyDriveError> {
        self.valid_username.validate()?;
        self.valid_password.validate()?;
        self.valid_folder_name.validate()?;
        Ok(())
    }

    /// Full API endpoint for a path, e.g. `/resource` -> `/api/resource`.
    pub fn api_endpoint(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, self.base_api, path)
    }
}
