use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    const ALL: [ContactField; 4] = [Self::Name, Self::Email, Self::Phone, Self::Message];

    /// `name` and `id` attribute of the input editing this field.
    pub fn input_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }

    /// Maps an input's `name` attribute back to the field it edits.
    pub fn from_input_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.input_name() == name)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactFormError {
    #[error("{} is required", .0.label())]
    MissingField(ContactField),
    #[error("please enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), ContactFormError> {
        if self.name.trim().is_empty() {
            return Err(ContactFormError::MissingField(ContactField::Name));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactFormError::MissingField(ContactField::Email));
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ContactFormError::InvalidEmail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "John Doe".into());
        form.set(ContactField::Email, "john@example.com".into());
        form
    }

    #[test]
    fn complete_form_validates() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn phone_and_message_are_optional() {
        let form = filled();
        assert!(form.phone.is_empty());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn blank_name_is_missing() {
        let mut form = filled();
        form.set(ContactField::Name, "   ".into());
        assert_eq!(
            form.validate(),
            Err(ContactFormError::MissingField(ContactField::Name))
        );
        assert_eq!(form.validate().unwrap_err().to_string(), "Full Name is required");
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = filled();
        for bad in ["john", "@example.com", "john@"] {
            form.set(ContactField::Email, bad.into());
            assert_eq!(form.validate(), Err(ContactFormError::InvalidEmail), "{bad}");
        }
        form.set(ContactField::Email, String::new());
        assert_eq!(
            form.validate(),
            Err(ContactFormError::MissingField(ContactField::Email))
        );
    }

    #[test]
    fn input_names_map_to_fields() {
        assert_eq!(ContactField::from_input_name("phone"), Some(ContactField::Phone));
        assert_eq!(ContactField::from_input_name("company"), None);
    }

    #[test]
    fn input_name_round_trips_for_every_field() {
        for field in ContactField::ALL {
            assert_eq!(ContactField::from_input_name(field.input_name()), Some(field));
        }
    }

    #[test]
    fn serializes_for_logging() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["name"], "John Doe");
        assert_eq!(json["phone"], "");
    }
}
