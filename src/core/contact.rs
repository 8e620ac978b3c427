use crate::domain::model::{ContactAck, ContactFields, ContactSubmission};
use crate::domain::ports::ContactGateway;
use crate::utils::error::ContactFormError;
use crate::utils::validation::validate_contact;

/// Contact form flow: collect every validation failure, then hand the
/// trimmed payload to the gateway. Failures never reset form state; the
/// caller resets only after an acknowledged submission.
pub struct ContactForm<G: ContactGateway> {
    gateway: G,
}

impl<G: ContactGateway> ContactForm<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub async fn submit(
        &self,
        fields: &ContactFields,
    ) -> std::result::Result<ContactAck, ContactFormError> {
        validate_contact(fields).map_err(ContactFormError::Invalid)?;

        let submission = ContactSubmission {
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_string(),
            phone: fields.phone.trim().to_string(),
            message: fields.message.trim().to_string(),
        };

        tracing::debug!(email = %submission.email, "Submitting contact form");
        let ack = self.gateway.submit(&submission).await?;
        tracing::info!("Contact form submitted");

        Ok(ack)
    }
}
