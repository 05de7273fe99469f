//! User Registration Section State
//!
//! Success clears the form; failure leaves it populated so the user can
//! retry manually. There is no duplicate-submission guard.

use trafficwatch_shared::RegisterUserRequest;

use crate::client::AgentError;

/// Locally owned registration form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub plate: String,
    pub email: String,
}

impl UserForm {
    /// Build the request body; fields are sent as-is with no trimming
    pub fn to_request(&self) -> RegisterUserRequest {
        RegisterUserRequest {
            name: self.name.clone(),
            plate: self.plate.clone(),
            email: self.email.clone(),
        }
    }
}

/// Outcome message shown under the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationMessage {
    Saved,
    Failed,
}

impl RegistrationMessage {
    pub fn label(&self) -> &'static str {
        match self {
            RegistrationMessage::Saved => "User added successfully!",
            RegistrationMessage::Failed => "Failed to add user.",
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            RegistrationMessage::Saved => "text-green-400",
            RegistrationMessage::Failed => "text-red-400",
        }
    }
}

/// State for the user registration section
#[derive(Debug, Clone, Default)]
pub struct RegistrarState {
    pub form: UserForm,
    pub message: Option<RegistrationMessage>,
}

impl RegistrarState {
    /// Apply a resolved submission.
    pub fn finish_submit(&mut self, outcome: Result<(), AgentError>) {
        match outcome {
            Ok(()) => {
                self.message = Some(RegistrationMessage::Saved);
                self.form = UserForm::default();
            }
            Err(e) => {
                tracing::warn!("User registration failed: {}", e);
                self.message = Some(RegistrationMessage::Failed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> UserForm {
        UserForm {
            name: "A".to_string(),
            plate: "B".to_string(),
            email: "C".to_string(),
        }
    }

    #[test]
    fn test_success_resets_form_and_sets_message() {
        let mut state = RegistrarState {
            form: filled_form(),
            message: None,
        };

        state.finish_submit(Ok(()));

        assert_eq!(state.form, UserForm::default());
        assert_eq!(state.message, Some(RegistrationMessage::Saved));
    }

    #[test]
    fn test_failure_keeps_form_and_sets_message() {
        let mut state = RegistrarState {
            form: filled_form(),
            message: None,
        };

        state.finish_submit(Err(AgentError::RequestFailed(
            "HTTP 502: Bad Gateway".to_string(),
        )));

        assert_eq!(state.form, filled_form());
        assert_eq!(state.message, Some(RegistrationMessage::Failed));
    }

    #[test]
    fn test_request_carries_fields_untouched() {
        let form = UserForm {
            name: " spaced ".to_string(),
            plate: "ka01".to_string(),
            email: "user@example.com".to_string(),
        };

        let req = form.to_request();

        assert_eq!(req.name, " spaced ");
        assert_eq!(req.plate, "ka01");
        assert_eq!(req.email, "user@example.com");
    }

    #[test]
    fn test_messages_have_distinct_styling() {
        assert_ne!(
            RegistrationMessage::Saved.text_class(),
            RegistrationMessage::Failed.text_class()
        );
    }
}
