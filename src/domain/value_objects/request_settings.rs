//! Shared request-scope settings.
//!
//! Everything a combined target carries that must land unchanged on each
//! per-site target when it is split: ports, helper-site bindings, binding
//! exclusions, and the validation-plugin option bundles. Modeled as one
//! struct copied by value, so split results never alias shared state.

use serde::{Deserialize, Serialize};

use super::site_id::SiteId;

fn default_ssl_port() -> u16 {
    443
}

/// Request-scope settings attached to a target after selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSettings {
    /// Port the certificate will be bound on.
    #[serde(default = "default_ssl_port")]
    pub ssl_port: u16,

    /// Port answering validation challenges, if not the default.
    #[serde(default)]
    pub validation_port: Option<u16>,

    /// Site answering validation challenges on behalf of the target.
    #[serde(default)]
    pub validation_site_id: Option<SiteId>,

    /// Site the issued certificate is installed on.
    #[serde(default)]
    pub installation_site_id: Option<SiteId>,

    /// FTP site used for challenge file placement.
    #[serde(default)]
    pub ftp_site_id: Option<SiteId>,

    /// Hostnames excluded from the request (matched case-insensitively).
    #[serde(default)]
    pub excluded_bindings: Vec<String>,

    /// Selected validation plugin, if any.
    #[serde(default)]
    pub validation_plugin: Option<String>,

    /// DNS-provider validation options.
    #[serde(default)]
    pub azure_dns: Option<AzureDnsOptions>,

    /// Scripted DNS validation options.
    #[serde(default)]
    pub script_dns: Option<ScriptDnsOptions>,

    /// HTTP challenge-file upload over FTP.
    #[serde(default)]
    pub ftp_upload: Option<FtpUploadOptions>,

    /// HTTP challenge-file upload over WebDAV.
    #[serde(default)]
    pub webdav_upload: Option<WebDavUploadOptions>,
}

impl Default for RequestSettings {
    fn default() -> Self {
        Self {
            ssl_port: default_ssl_port(),
            validation_port: None,
            validation_site_id: None,
            installation_site_id: None,
            ftp_site_id: None,
            excluded_bindings: Vec::new(),
            validation_plugin: None,
            azure_dns: None,
            script_dns: None,
            ftp_upload: None,
            webdav_upload: None,
        }
    }
}

/// Options for DNS validation through an Azure DNS zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AzureDnsOptions {
    pub tenant_id: String,
    pub client_id: String,
    pub subscription_id: String,
    pub resource_group: String,
}

/// Options for DNS validation through user-supplied scripts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptDnsOptions {
    pub create_script: String,
    #[serde(default)]
    pub delete_script: Option<String>,
}

/// Options for placing HTTP challenge files over FTP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FtpUploadOptions {
    pub server: String,
    pub user_name: String,
    pub password: String,
}

/// Options for placing HTTP challenge files over WebDAV.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebDavUploadOptions {
    pub url: String,
    pub user_name: String,
    pub password: String,
}
