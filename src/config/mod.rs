use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; ogtags/0.1)";

/// Controls the optional network verification of URL fields.
///
/// Verification is off by default: setters only canonicalize. When enabled,
/// every URL setter performs one HEAD round-trip (no retry) and rejects the
/// value unless the server answers 200 with an acceptable Content-Type.
#[derive(Clone, Debug)]
pub struct VerifyConfig {
    pub enabled: bool,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        VerifyConfig {
            enabled: false,
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl VerifyConfig {
    /// Config with network verification switched on, default timeout.
    pub fn verifying() -> Self {
        VerifyConfig {
            enabled: true,
            ..VerifyConfig::default()
        }
    }
}
