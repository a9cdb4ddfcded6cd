pub const ACKNOWLEDGMENT: &str = "Thank you for your message! I will get back to you soon.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Shown to the visitor once per submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Acknowledgment {
    pub message: &'static str,
}

impl ContactForm {
    pub fn with(mut self, field: ContactField, value: String) -> Self {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
        self
    }

    /// Nothing leaves the browser: the form is cleared and the visitor gets
    /// a fixed acknowledgment.
    pub fn submit(&mut self) -> Acknowledgment {
        *self = ContactForm::default();
        Acknowledgment {
            message: ACKNOWLEDGMENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm::default()
            .with(ContactField::Name, "Jane".to_string())
            .with(ContactField::Email, "jane@x.com".to_string())
            .with(ContactField::Message, "Hi".to_string())
    }

    #[test]
    fn fields_update_independently() {
        let form = filled();
        assert_eq!(form.name, "Jane");
        assert_eq!(form.email, "jane@x.com");
        assert_eq!(form.message, "Hi");
        assert_eq!(form.clone().with(ContactField::Name, "J".into()).email, "jane@x.com");
    }

    #[test]
    fn submit_acknowledges_once_and_clears() {
        let mut form = filled();
        let mut acknowledgments = Vec::new();
        acknowledgments.push(form.submit());

        assert_eq!(acknowledgments, vec![Acknowledgment { message: ACKNOWLEDGMENT }]);
        assert_eq!(form, ContactForm::default());
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
    }
}
