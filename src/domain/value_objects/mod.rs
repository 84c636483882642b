//! Domain value objects

pub mod membership;
pub mod request_settings;
pub mod site_id;

pub use membership::{Membership, ParseMembershipError};
pub use request_settings::{
    AzureDnsOptions, FtpUploadOptions, RequestSettings, ScriptDnsOptions, WebDavUploadOptions,
};
pub use site_id::SiteId;
