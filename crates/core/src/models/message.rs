//! Outbound messages and the advertisement cross-field rule.
//!
//! `title` and `body` are always required. When a message is an
//! advertisement (`isAd: true`, or validated explicitly in the
//! [`Group::AD`] group) it must also carry a sender `contact` and a
//! `removeGuide` explaining how to opt out.

use serde::{Deserialize, Serialize};

use crate::validation::registry::RegistryBuilder;
use crate::validation::{Group, Predicate, Record};

pub const MAX_TITLE_LENGTH: u64 = 128;
pub const MAX_BODY_LENGTH: u64 = 1_024;
pub const MAX_AD_CONTACT_LENGTH: u64 = 32;
pub const MAX_REMOVE_GUIDE_LENGTH: u64 = 64;

/// Name of the flag field that switches on the advertisement rules.
pub const AD_FLAG_FIELD: &str = "isAd";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub title: Option<String>,
    pub body: Option<String>,
    pub contact: Option<String>,
    pub remove_guide: Option<String>,
    #[serde(default)]
    pub is_ad: bool,
}

impl Record for Message {
    const RECORD_TYPE: &'static str = "Message";
}

pub(super) fn register(builder: &mut RegistryBuilder) {
    let message = Message::RECORD_TYPE;
    let ad = &[Group::AD];
    builder
        .register(message, "title", Predicate::max_len(MAX_TITLE_LENGTH), &[])
        .register(message, "title", Predicate::NotEmpty, &[])
        .register(message, "body", Predicate::max_len(MAX_BODY_LENGTH), &[])
        .register(message, "body", Predicate::NotEmpty, &[])
        .register(message, "contact", Predicate::max_len(MAX_AD_CONTACT_LENGTH), ad)
        .register(message, "contact", Predicate::NotEmpty, ad)
        .register(
            message,
            "removeGuide",
            Predicate::max_len(MAX_REMOVE_GUIDE_LENGTH),
            ad,
        )
        .register(message, "removeGuide", Predicate::NotEmpty, ad)
        .register_condition(message, AD_FLAG_FIELD, Group::AD);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::registry;
    use crate::validation::Validator;

    fn message(is_ad: bool) -> Message {
        Message {
            title: Some("Spring sale".into()),
            body: Some("Everything is 20% off this week.".into()),
            contact: None,
            remove_guide: None,
            is_ad,
        }
    }

    #[test]
    fn ad_flag_requires_every_ad_field() {
        let validator = Validator::new(registry());
        let violations = validator.validate_record(&message(true), &[]).unwrap();
        assert_eq!(violations.len(), 2);

        let mut paths: Vec<_> = violations.iter().map(|v| v.path.as_str()).collect();
        paths.sort_unstable();
        assert_eq!(paths, vec!["contact", "removeGuide"]);
        assert!(violations.iter().all(|v| v.message == "must not be empty"));
    }

    #[test]
    fn non_ad_message_ignores_ad_fields() {
        let validator = Validator::new(registry());
        let violations = validator.validate_record(&message(false), &[]).unwrap();
        assert!(violations.is_empty());
    }

    #[test]
    fn ad_violations_merge_with_default_ones() {
        let validator = Validator::new(registry());
        let msg = Message {
            title: Some(String::new()),
            ..message(true)
        };
        let violations = validator.validate_record(&msg, &[]).unwrap();
        let mut paths: Vec<_> = violations.iter().map(|v| v.path.as_str()).collect();
        paths.sort_unstable();
        assert_eq!(paths, vec!["contact", "removeGuide", "title"]);
    }

    #[test]
    fn explicit_ad_group_applies_without_flag() {
        let validator = Validator::new(registry());
        let violations = validator
            .validate_record(&message(false), &[Group::AD])
            .unwrap();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn complete_ad_passes() {
        let validator = Validator::new(registry());
        let msg = Message {
            contact: Some("080-000-0000".into()),
            remove_guide: Some("Reply STOP to unsubscribe".into()),
            ..message(true)
        };
        assert!(validator.validate_record(&msg, &[]).unwrap().is_empty());
    }

    #[test]
    fn overlong_ad_contact_is_rejected() {
        let validator = Validator::new(registry());
        let msg = Message {
            contact: Some("1".repeat(33)),
            remove_guide: Some("Reply STOP".into()),
            ..message(true)
        };
        let violations = validator.validate_record(&msg, &[]).unwrap();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "size must be at most 32");
    }
}
