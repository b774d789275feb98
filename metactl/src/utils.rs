//! Common helper functions.

use std::env;

/// Replaces `${env:VAR_NAME}` placeholders with environment variable values.
///
/// Unset variables expand to an empty string. Placeholders without the
/// `env:` scheme and unterminated placeholders are kept verbatim.
///
/// # Example
///
/// ```rust
/// use metactl::utils::replace_env_placeholders;
///
/// unsafe { std::env::set_var("DESCRIPTOR_HOME", "/opt/descriptors"); }
/// let path = replace_env_placeholders("${env:DESCRIPTOR_HOME}/main.json");
/// assert_eq!(path, "/opt/descriptors/main.json");
/// ```
pub fn replace_env_placeholders(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let body = &rest[start + 2..];

        let Some(end) = body.find('}') else {
            result.push_str(&rest[start..]);
            return result;
        };

        let placeholder = &body[..end];
        match placeholder.strip_prefix("env:") {
            Some(var) => {
                let value = env::var(var).unwrap_or_default();
                debug!("using {var}={value}");
                result.push_str(&value);
            }
            None => {
                result.push_str("${");
                result.push_str(placeholder);
                result.push('}');
            }
        }
        rest = &body[end + 1..];
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_env_placeholders() {
        unsafe {
            env::set_var("METACTL_TEST_ROOT", "/srv/catalog");
            env::set_var("METACTL_TEST_NAME", "main");
        }

        assert_eq!(replace_env_placeholders("${env:METACTL_TEST_ROOT}"), "/srv/catalog");
        assert_eq!(
            replace_env_placeholders("${env:METACTL_TEST_ROOT}/${env:METACTL_TEST_NAME}.json"),
            "/srv/catalog/main.json"
        );
        assert_eq!(replace_env_placeholders("${env:METACTL_TEST_UNSET}"), "");
        assert_eq!(replace_env_placeholders("plain/path"), "plain/path");
        assert_eq!(replace_env_placeholders(""), "");
    }

    #[test]
    fn test_malformed_placeholders() {
        assert_eq!(replace_env_placeholders("${other:x}"), "${other:x}");
        assert_eq!(replace_env_placeholders("${env:VAR"), "${env:VAR");
        assert_eq!(replace_env_placeholders("$"), "$");
        assert_eq!(replace_env_placeholders("{env:VAR}"), "{env:VAR}");
    }
}
