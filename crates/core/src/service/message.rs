use crate::error::CoreError;
use crate::models::Message;
use crate::validation::{Group, Validator};

#[derive(Debug, Clone, Copy)]
pub struct MessageService {
    validator: Validator<'static>,
}

impl MessageService {
    pub fn new(validator: Validator<'static>) -> Self {
        Self { validator }
    }

    /// Send an advertisement. The `Ad` group is checked regardless of the
    /// message's own flag.
    pub fn send_ad_message(&self, message: &Message) -> Result<(), CoreError> {
        self.validator.check(message, &[Group::AD])?;
        tracing::info!(title = message.title.as_deref(), "Ad message sent");
        Ok(())
    }

    pub fn send_normal_message(&self, message: &Message) -> Result<(), CoreError> {
        self.validator.check(message, &[])?;
        tracing::info!(title = message.title.as_deref(), "Message sent");
        Ok(())
    }

    /// Route to the ad or normal path. Both branches go through the public,
    /// guarded methods.
    pub fn send_message_as(&self, message: &Message, is_ad: bool) -> Result<(), CoreError> {
        if is_ad {
            self.send_ad_message(message)
        } else {
            self.send_normal_message(message)
        }
    }

    /// Send with groups derived from the message itself (`isAd`).
    pub fn send_message(&self, message: &Message) -> Result<(), CoreError> {
        self.validator.check(message, &[])?;
        tracing::info!(
            title = message.title.as_deref(),
            is_ad = message.is_ad,
            "Message sent"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::models::registry;

    fn service() -> MessageService {
        MessageService::new(Validator::new(registry()))
    }

    fn plain_message() -> Message {
        Message {
            title: Some("Hello".into()),
            body: Some("See you tomorrow.".into()),
            ..Message::default()
        }
    }

    #[test]
    fn normal_message_skips_ad_rules() {
        assert!(service().send_normal_message(&plain_message()).is_ok());
    }

    #[test]
    fn ad_message_requires_ad_fields_even_without_flag() {
        let err = service().send_ad_message(&plain_message()).unwrap_err();
        assert_matches!(err, CoreError::Validation(failure) if failure.violations().len() == 2);
    }

    #[test]
    fn routed_send_still_validates() {
        let err = service()
            .send_message_as(&plain_message(), true)
            .unwrap_err();
        assert_matches!(err, CoreError::Validation(_));

        let empty = Message::default();
        let err = service().send_message_as(&empty, false).unwrap_err();
        assert_matches!(err, CoreError::Validation(failure) => {
            let report = failure.report();
            assert_eq!(report.get("title"), Some("must not be empty"));
            assert_eq!(report.get("body"), Some("must not be empty"));
        });
    }

    #[test]
    fn flag_driven_send_follows_is_ad() {
        assert!(service().send_message(&plain_message()).is_ok());

        let ad = Message {
            is_ad: true,
            ..plain_message()
        };
        let err = service().send_message(&ad).unwrap_err();
        assert_matches!(err, CoreError::Validation(failure) => {
            let report = failure.report();
            assert_eq!(report.len(), 2);
            assert_eq!(report.get("contact"), Some("must not be empty"));
            assert_eq!(report.get("removeGuide"), Some("must not be empty"));
        });
    }
}
