//! View state for the page: the mobile menu flag and the lead form status
//! machine.
//!
//! Everything here is plain data, so the transitions can be exercised on the
//! host without a browser. Components wrap these types in Leptos signals.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SiteError};

/// Whether the mobile menu overlay is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuVisibility(bool);

impl MenuVisibility {
    pub fn is_open(self) -> bool {
        self.0
    }

    pub fn toggle(&mut self) {
        self.0 = !self.0;
    }

    pub fn close(&mut self) {
        self.0 = false;
    }
}

/// Which subview the lead form renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

impl FormStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            FormStatus::Idle => "idle",
            FormStatus::Submitting => "submitting",
            FormStatus::Success => "success",
        }
    }
}

impl fmt::Display for FormStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options offered by the "Service Needed" select.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ServiceType {
    #[default]
    EmergencyRepair,
    DrainCleaning,
    WaterHeater,
    LeakDetection,
    PipeRepair,
    GeneralPlumbing,
}

impl ServiceType {
    /// Select order.
    pub const ALL: [ServiceType; 6] = [
        ServiceType::EmergencyRepair,
        ServiceType::DrainCleaning,
        ServiceType::WaterHeater,
        ServiceType::LeakDetection,
        ServiceType::PipeRepair,
        ServiceType::GeneralPlumbing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServiceType::EmergencyRepair => "Emergency Repair",
            ServiceType::DrainCleaning => "Drain Cleaning",
            ServiceType::WaterHeater => "Water Heater",
            ServiceType::LeakDetection => "Leak Detection",
            ServiceType::PipeRepair => "Pipe Repair",
            ServiceType::GeneralPlumbing => "General Plumbing",
        }
    }
}

impl FromStr for ServiceType {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ServiceType::ALL
            .into_iter()
            .find(|service| service.label() == s)
            .ok_or(())
    }
}

const REDACTED: &str = "<redacted>";

/// Values currently typed into the lead form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LeadDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: ServiceType,
    pub message: String,
}

impl LeadDraft {
    /// True when nothing has been typed and the select is on its default.
    pub fn is_blank(&self) -> bool {
        *self == LeadDraft::default()
    }

    /// Check the draft the same way the browser's `required` and
    /// `type="email"` constraints do.
    pub fn validate(&self) -> Result<LeadRequest> {
        let name = required("name", &self.name)?;
        let phone = required("phone", &self.phone)?;
        // Browsers strip surrounding whitespace from email inputs.
        let email = required("email", self.email.trim())?;
        if !looks_like_email(email) {
            return Err(SiteError::InvalidEmail);
        }

        Ok(LeadRequest {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            service: self.service,
            message: self.message.trim().to_string(),
        })
    }
}

impl fmt::Debug for LeadDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeadDraft")
            .field("blank", &self.is_blank())
            .finish_non_exhaustive()
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(SiteError::MissingField(field));
    }
    Ok(value)
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// A validated lead. Built at submit time and dropped straight after: there
/// is no sink for it, and `Debug` never prints the values.
#[derive(Clone, PartialEq, Eq)]
pub struct LeadRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: ServiceType,
    pub message: String,
}

impl fmt::Debug for LeadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeadRequest")
            .field("name", &REDACTED)
            .field("phone", &REDACTED)
            .field("email", &REDACTED)
            .field("service", &REDACTED)
            .field("message", &REDACTED)
            .finish()
    }
}

/// Lead form status machine: idle -> submitting -> success -> idle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LeadForm {
    status: FormStatus,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Idle -> Submitting. The draft must validate; otherwise the status is
    /// left alone.
    pub fn submit(&mut self, draft: &LeadDraft) -> Result<LeadRequest> {
        self.expect(FormStatus::Idle, "submit")?;
        let request = draft.validate()?;
        self.status = FormStatus::Submitting;
        Ok(request)
    }

    /// Submitting -> Success, fired by the submission timer. The draft is
    /// cleared along with the form it belonged to.
    pub fn complete(&mut self, draft: &mut LeadDraft) -> Result<()> {
        self.expect(FormStatus::Submitting, "complete")?;
        self.status = FormStatus::Success;
        *draft = LeadDraft::default();
        Ok(())
    }

    /// Success -> Idle ("Send another request").
    pub fn reset(&mut self) -> Result<()> {
        self.expect(FormStatus::Success, "reset")?;
        self.status = FormStatus::Idle;
        Ok(())
    }

    fn expect(&self, wanted: FormStatus, action: &'static str) -> Result<()> {
        if self.status != wanted {
            return Err(SiteError::InvalidTransition {
                from: self.status,
                action,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_draft() -> LeadDraft {
        LeadDraft {
            name: "John Doe".into(),
            phone: "(555) 123-4567".into(),
            email: "john@example.com".into(),
            service: ServiceType::DrainCleaning,
            message: "Kitchen sink backs up".into(),
        }
    }

    #[test]
    fn menu_starts_closed() {
        assert!(!MenuVisibility::default().is_open());
    }

    #[test]
    fn menu_even_toggles_return_to_closed() {
        let mut menu = MenuVisibility::default();
        for n in 1..=8 {
            menu.toggle();
            assert_eq!(menu.is_open(), n % 2 == 1);
        }
        assert!(!menu.is_open());
    }

    #[test]
    fn menu_close_is_idempotent() {
        let mut menu = MenuVisibility::default();
        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn lead_form_full_cycle() {
        let mut form = LeadForm::new();
        let mut draft = filled_draft();
        assert_eq!(form.status(), FormStatus::Idle);

        form.submit(&draft).unwrap();
        assert_eq!(form.status(), FormStatus::Submitting);
        assert!(!draft.is_blank());

        form.complete(&mut draft).unwrap();
        assert_eq!(form.status(), FormStatus::Success);
        assert!(draft.is_blank());

        form.reset().unwrap();
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[test]
    fn submit_with_blank_required_field_stays_idle() {
        for field in ["name", "phone", "email"] {
            let mut draft = filled_draft();
            match field {
                "name" => draft.name.clear(),
                "phone" => draft.phone.clear(),
                _ => draft.email = "   ".into(),
            }

            let mut form = LeadForm::new();
            let err = form.submit(&draft).unwrap_err();
            assert!(matches!(err, SiteError::MissingField(f) if f == field));
            assert_eq!(form.status(), FormStatus::Idle);
        }
    }

    #[test]
    fn message_is_optional() {
        let mut draft = filled_draft();
        draft.message.clear();
        let request = draft.validate().unwrap();
        assert_eq!(request.message, "");
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["john", "john@", "@example.com", "jo hn@example.com", "a@b@c"] {
            let mut draft = filled_draft();
            draft.email = email.into();
            assert!(
                matches!(draft.validate(), Err(SiteError::InvalidEmail)),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn whitespace_only_text_fields_pass_like_native_required() {
        let draft = LeadDraft {
            name: "   ".into(),
            phone: "555".into(),
            email: "a@b.co".into(),
            ..LeadDraft::default()
        };

        let mut form = LeadForm::new();
        form.submit(&draft).unwrap();
        assert_eq!(form.status(), FormStatus::Submitting);
    }

    #[test]
    fn email_is_trimmed_before_checking() {
        let mut draft = filled_draft();
        draft.email = "  john@example.com \n".into();
        let request = draft.validate().unwrap();
        assert_eq!(request.email, "john@example.com");
    }

    #[test]
    fn failed_completion_keeps_the_draft() {
        let mut form = LeadForm::new();
        let mut draft = filled_draft();
        assert!(form.complete(&mut draft).is_err());
        assert!(!draft.is_blank());
    }

    #[test]
    fn submitting_cannot_be_submitted_again() {
        let mut form = LeadForm::new();
        form.submit(&filled_draft()).unwrap();

        let err = form.submit(&filled_draft()).unwrap_err();
        assert!(matches!(
            err,
            SiteError::InvalidTransition {
                from: FormStatus::Submitting,
                action: "submit"
            }
        ));
        assert_eq!(form.status(), FormStatus::Submitting);
    }

    #[test]
    fn states_cannot_be_skipped() {
        let mut form = LeadForm::new();
        let mut draft = filled_draft();
        assert!(form.complete(&mut draft).is_err());
        assert!(form.reset().is_err());
        assert_eq!(form.status(), FormStatus::Idle);

        form.submit(&filled_draft()).unwrap();
        assert!(form.reset().is_err());
        assert_eq!(form.status(), FormStatus::Submitting);

        form.complete(&mut draft).unwrap();
        assert!(form.complete(&mut draft).is_err());
        assert!(form.submit(&filled_draft()).is_err());
        assert_eq!(form.status(), FormStatus::Success);
    }

    #[test]
    fn debug_output_never_shows_values() {
        let draft = filled_draft();
        let request = draft.validate().unwrap();

        for rendered in [format!("{draft:?}"), format!("{request:?}")] {
            assert!(!rendered.contains("John"));
            assert!(!rendered.contains("555"));
            assert!(!rendered.contains("example.com"));
            assert!(!rendered.contains("Kitchen"));
        }
    }

    #[test]
    fn blank_draft_after_default() {
        assert!(LeadDraft::default().is_blank());
        assert!(!filled_draft().is_blank());
    }

    #[test]
    fn service_type_round_trips_through_labels() {
        for service in ServiceType::ALL {
            assert_eq!(service.label().parse::<ServiceType>(), Ok(service));
        }
        assert!("Roofing".parse::<ServiceType>().is_err());
        assert_eq!(ServiceType::default(), ServiceType::EmergencyRepair);
    }

    #[test]
    fn status_display_names() {
        assert_eq!(FormStatus::Idle.to_string(), "idle");
        assert_eq!(FormStatus::Submitting.to_string(), "submitting");
        assert_eq!(FormStatus::Success.to_string(), "success");
    }
}
