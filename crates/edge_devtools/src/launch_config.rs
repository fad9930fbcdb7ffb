use std::path::Path;

use anyhow::{Context as _, Result};
use schemars::{gen::SchemaSettings, JsonSchema};
use serde::{Deserialize, Serialize};

use crate::debug_provider_type;

/// The literal token users may put into [`LaunchConfig::file`] to refer to the
/// workspace folder root. Only its first occurrence is substituted.
pub const WORKSPACE_FOLDER_VARIABLE: &str = "${workspaceFolder}";

/// A user-authored debug launch configuration.
///
/// Deserialized from the editor's launch configuration file with unrecognized
/// fields ignored, since hosts pass arbitrary extra keys through untouched.
/// A configuration is only handled by this provider when its `type` equals
/// [`debug_provider_type`]; everything else about it is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LaunchConfig {
    /// Human readable name of the configuration to display in the UI.
    #[serde(default)]
    pub name: String,
    /// Debug configuration type this entry is addressed to.
    #[serde(rename = "type", default)]
    pub debug_type: String,
    /// Session mode to start: `attach` connects to an already-running browser,
    /// `launch` starts a new browser process first. Any other value is
    /// accepted but starts no session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<String>,
    /// Remote target to open, used verbatim when no `file` is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Local file to open. May contain [`WORKSPACE_FOLDER_VARIABLE`] and takes
    /// precedence over `url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Path of the browser binary to launch instead of the discovered one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chrome_path: Option<String>,
}

impl LaunchConfig {
    /// The ready-to-use launch entry offered to projects that have none yet.
    pub fn default_configurations() -> Vec<Self> {
        vec![Self {
            name: "Launch Edge and open the devtools".to_string(),
            request: Some("launch".to_string()),
            debug_type: debug_provider_type(),
            url: Some("http://localhost:8080".to_string()),
            ..Self::default()
        }]
    }

    /// Builds a config from the raw JSON object a host hands over.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).context("deserializing launch configuration")
    }

    /// Derives the URL a debug session should be pointed at.
    ///
    /// `file` wins over `url`: a supplied workspace folder replaces the first
    /// [`WORKSPACE_FOLDER_VARIABLE`] occurrence in `file`, then the `file://`
    /// scheme is attached with the slash count depending on whether the path
    /// already starts with one, so `/a/b` and `a/b` both end up with three
    /// slashes. `url` is passed through untouched. With neither field set the
    /// returned target is empty.
    pub fn target_url(&self, folder: Option<&Path>) -> String {
        let mut out_url = String::new();

        if let Some(file) = &self.file {
            out_url = file.clone();
            if let Some(folder) = folder {
                out_url =
                    out_url.replacen(WORKSPACE_FOLDER_VARIABLE, &folder.to_string_lossy(), 1);
            }
            let scheme = if out_url.starts_with('/') {
                "file://"
            } else {
                "file:///"
            };
            out_url = format!("{scheme}{out_url}");
        } else if let Some(url) = &self.url {
            out_url = url.clone();
        }

        out_url
    }
}

/// A group of launch configurations defined in a JSON file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LaunchConfigs(pub Vec<LaunchConfig>);

impl LaunchConfigs {
    /// Parses launch configuration file contents, tolerating the comments and
    /// trailing commas user-facing config files accumulate.
    pub fn parse(content: &str) -> Result<Self> {
        serde_json_lenient::from_str(content).context("parsing launch configurations")
    }

    /// Generates JSON schema of the launch configurations format.
    pub fn generate_json_schema() -> serde_json_lenient::Value {
        let schema = SchemaSettings::draft07()
            .with(|settings| settings.option_add_null_type = false)
            .into_generator()
            .into_root_schema_for::<Self>();

        serde_json_lenient::to_value(schema).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn config_with_file(file: &str) -> LaunchConfig {
        LaunchConfig {
            file: Some(file.to_string()),
            ..LaunchConfig::default()
        }
    }

    #[test]
    fn absolute_file_paths_keep_their_leading_slash() {
        assert_eq!(
            config_with_file("/tmp/a.html").target_url(None),
            "file:///tmp/a.html"
        );
    }

    #[test]
    fn relative_file_paths_get_three_slashes_too() {
        assert_eq!(
            config_with_file("rel/index.html").target_url(None),
            "file:///rel/index.html"
        );
    }

    #[test]
    fn workspace_folder_is_substituted_before_the_scheme_is_attached() {
        assert_eq!(
            config_with_file("${workspaceFolder}/index.html").target_url(Some(Path::new("/repo"))),
            "file:///repo/index.html"
        );
    }

    #[test]
    fn only_the_first_workspace_folder_occurrence_is_substituted() {
        assert_eq!(
            config_with_file("${workspaceFolder}/${workspaceFolder}.html")
                .target_url(Some(Path::new("/repo"))),
            "file:///repo/${workspaceFolder}.html"
        );
    }

    #[test]
    fn without_a_folder_the_variable_is_left_in_place() {
        assert_eq!(
            config_with_file("${workspaceFolder}/index.html").target_url(None),
            "file:///${workspaceFolder}/index.html"
        );
    }

    #[test]
    fn file_takes_precedence_over_url() {
        let config = LaunchConfig {
            url: Some("http://localhost:8080".to_string()),
            ..config_with_file("/srv/index.html")
        };
        assert_eq!(config.target_url(None), "file:///srv/index.html");
    }

    #[test]
    fn url_is_used_verbatim() {
        let config = LaunchConfig {
            url: Some("http://x".to_string()),
            ..LaunchConfig::default()
        };
        assert_eq!(config.target_url(Some(Path::new("/repo"))), "http://x");
    }

    #[test]
    fn empty_configs_produce_an_empty_target() {
        assert_eq!(LaunchConfig::default().target_url(None), "");
    }

    #[test]
    fn default_configurations_offer_a_localhost_launch() {
        let defaults = LaunchConfig::default_configurations();
        assert_eq!(
            defaults,
            vec![LaunchConfig {
                name: "Launch Edge and open the devtools".to_string(),
                debug_type: "edge-devtools.debug".to_string(),
                request: Some("launch".to_string()),
                url: Some("http://localhost:8080".to_string()),
                file: None,
                chrome_path: None,
            }]
        );
    }

    #[test]
    fn parse_tolerates_comments_and_unknown_fields() {
        let content = r#"[
            // The entry our docs recommend for a local dev server.
            {
                "name": "Attach to a running Edge",
                "type": "edge-devtools.debug",
                "request": "attach",
                "url": "http://localhost:8080",
                "webRoot": "${workspaceFolder}/src",
            }
        ]"#;

        let LaunchConfigs(configs) = LaunchConfigs::parse(content).unwrap();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].debug_type, debug_provider_type());
        assert_eq!(configs[0].request.as_deref(), Some("attach"));
        assert_eq!(configs[0].url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(configs[0].file, None);
    }

    #[test]
    fn from_value_reads_camel_case_fields() {
        let config = LaunchConfig::from_value(json!({
            "type": "edge-devtools.debug",
            "request": "launch",
            "file": "${workspaceFolder}/index.html",
            "chromePath": "/opt/edge",
            "someHostOnlyKey": true,
        }))
        .unwrap();

        assert_eq!(config.debug_type, debug_provider_type());
        assert_eq!(config.chrome_path.as_deref(), Some("/opt/edge"));
    }

    #[test]
    fn schema_describes_the_wire_field_names() {
        let schema = LaunchConfigs::generate_json_schema().to_string();
        assert!(schema.contains("chromePath"));
        assert!(schema.contains("draft-07"));
    }
}
