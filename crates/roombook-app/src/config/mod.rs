pub use roombook_core::config::*;
use roombook_recurrence::weekdays::LocaleContext;

use crate::error::AppResult;

/// ## Summary
/// Builds the locale context from the configured default locale.
///
/// ## Errors
/// Returns an error if the configured locale is not a well-formed tag.
pub fn locale_context(settings: &Settings) -> AppResult<LocaleContext> {
    Ok(LocaleContext::from_tag(&settings.locale.default)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(locale: &str) -> Settings {
        Settings {
            locale: LocaleConfig {
                default: locale.to_owned(),
            },
            logging: LoggingConfig {
                level: "info".to_owned(),
            },
        }
    }

    #[test]
    fn accepts_server_style_locale() {
        let context = locale_context(&settings("en_GB")).unwrap();
        assert_eq!(context.snapshot().to_string(), "en-GB");
    }

    #[test]
    fn rejects_malformed_locale() {
        assert!(locale_context(&settings("??")).is_err());
    }
}
