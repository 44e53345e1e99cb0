//! Central configuration for the limit_refresh crate

use std::sync::LazyLock;

/// Host name of the SAMS identity provider
///
/// Linked accounts are matched against `https://<SAMS_HOST_NAME>` as their
/// service id. Default: "accounts.sams.example.com"
pub static SAMS_HOST_NAME: LazyLock<String> = LazyLock::new(|| {
    std::env::var("SAMS_HOST_NAME").unwrap_or_else(|_| "accounts.sams.example.com".to_string())
});

/// Base URL of the downstream usage-limit gateway
///
/// Default: "http://localhost:9992"
pub static LIMIT_GATEWAY_URL: LazyLock<String> = LazyLock::new(|| {
    std::env::var("LIMIT_GATEWAY_URL").unwrap_or_else(|_| "http://localhost:9992".to_string())
});

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn test_sams_host_name_default() {
        let original_value = env::var("SAMS_HOST_NAME").ok();

        unsafe {
            env::remove_var("SAMS_HOST_NAME");
        }

        // The LazyLock may already be initialized, so test the same logic it uses
        let host = env::var("SAMS_HOST_NAME")
            .unwrap_or_else(|_| "accounts.sams.example.com".to_string());
        assert_eq!(host, "accounts.sams.example.com");

        if let Some(value) = original_value {
            unsafe {
                env::set_var("SAMS_HOST_NAME", value);
            }
        }
    }

    #[test]
    #[serial]
    fn test_sams_host_name_custom() {
        let original_value = env::var("SAMS_HOST_NAME").ok();

        unsafe {
            env::set_var("SAMS_HOST_NAME", "sams.internal.test");
        }

        let host = env::var("SAMS_HOST_NAME")
            .unwrap_or_else(|_| "accounts.sams.example.com".to_string());
        assert_eq!(host, "sams.internal.test");

        unsafe {
            if let Some(value) = original_value {
                env::set_var("SAMS_HOST_NAME", value);
            } else {
                env::remove_var("SAMS_HOST_NAME");
            }
        }
    }

    #[test]
    #[serial]
    fn test_limit_gateway_url_default() {
        let original_value = env::var("LIMIT_GATEWAY_URL").ok();

        unsafe {
            env::remove_var("LIMIT_GATEWAY_URL");
        }

        let url =
            env::var("LIMIT_GATEWAY_URL").unwrap_or_else(|_| "http://localhost:9992".to_string());
        assert_eq!(url, "http://localhost:9992");

        if let Some(value) = original_value {
            unsafe {
                env::set_var("LIMIT_GATEWAY_URL", value);
            }
        }
    }
}
