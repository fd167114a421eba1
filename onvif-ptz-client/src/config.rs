use crate::cli::Args;
use anyhow::{bail, Result};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Target {
    host: String,
    port: u16,
    username: String,
    password: String,
    device_path: String,
    timeout: Duration,
}

impl Target {
    pub fn from_args(args: &Args) -> Result<Self> {
        Self::new(
            &args.ip,
            args.port,
            &args.username,
            &args.password,
            &args.device_path,
            Duration::from_millis(args.timeout_ms),
        )
    }

    pub fn new(
        host: &str,
        port: u16,
        username: &str,
        password: &str,
        device_path: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let host = host.trim().to_string();
        if host.is_empty() {
            bail!("ip is required");
        }
        let username = username.trim().to_string();
        if username.is_empty() {
            bail!("username is required");
        }
        if password.is_empty() {
            bail!("password is required");
        }
        Ok(Self {
            host,
            port,
            username,
            password: password.to_string(),
            device_path: normalize_path(device_path),
            timeout,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn device_path(&self) -> &str {
        &self.device_path
    }

    pub fn credentials(&self) -> (&str, &str) {
        (self.username.as_str(), self.password.as_str())
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}:{}/{}", self.host, self.port, normalize_path(path))
    }
}

/// Service paths are kept host-relative, without a leading slash.
pub fn normalize_path(path: &str) -> String {
    path.trim().trim_start_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    mod success {
        use crate::config::{normalize_path, Target};
        use std::time::Duration;

        #[test]
        fn url_joins_relative_path() {
            let target = Target::new(
                " 192.168.1.63 ",
                2020,
                "admin",
                "pw",
                "/onvif/device_service",
                Duration::from_secs(3),
            )
            .unwrap();
            assert_eq!(target.host(), "192.168.1.63");
            assert_eq!(target.device_path(), "onvif/device_service");
            assert_eq!(
                target.url("onvif/PTZ"),
                "http://192.168.1.63:2020/onvif/PTZ"
            );
            assert_eq!(target.url("/onvif/PTZ"), "http://192.168.1.63:2020/onvif/PTZ");
            assert_eq!(target.credentials(), ("admin", "pw"));
        }

        #[test]
        fn normalize_strips_leading_slashes() {
            assert_eq!(normalize_path("//a/b"), "a/b");
            assert_eq!(normalize_path(" a "), "a");
            assert_eq!(normalize_path(""), "");
        }
    }

    mod failure {
        use crate::config::Target;
        use std::time::Duration;

        #[test]
        fn empty_fields_rejected() {
            let timeout = Duration::from_secs(1);
            assert!(Target::new("", 2020, "u", "p", "x", timeout).is_err());
            assert!(Target::new("h", 2020, " ", "p", "x", timeout).is_err());
            assert!(Target::new("h", 2020, "u", "", "x", timeout).is_err());
        }
    }
}
