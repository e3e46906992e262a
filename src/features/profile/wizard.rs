//! Step machine for the profile setup wizard. Steps advance only when the
//! current one validates; going back never discards entered data because the
//! draft lives outside the step state.

use crate::features::profile::types::ProfileDraft;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStep {
    BasicInfo,
    ProfileDetails,
    SocialLinks,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::BasicInfo,
        WizardStep::ProfileDetails,
        WizardStep::SocialLinks,
        WizardStep::Review,
    ];

    pub fn number(self) -> usize {
        match self {
            WizardStep::BasicInfo => 1,
            WizardStep::ProfileDetails => 2,
            WizardStep::SocialLinks => 3,
            WizardStep::Review => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic Info",
            WizardStep::ProfileDetails => "Profile Details",
            WizardStep::SocialLinks => "Social Links",
            WizardStep::Review => "Review",
        }
    }

    /// The following step; the last step has none.
    pub fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::BasicInfo => Some(WizardStep::ProfileDetails),
            WizardStep::ProfileDetails => Some(WizardStep::SocialLinks),
            WizardStep::SocialLinks => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    /// The preceding step; the first step has none.
    pub fn back(self) -> Option<WizardStep> {
        match self {
            WizardStep::BasicInfo => None,
            WizardStep::ProfileDetails => Some(WizardStep::BasicInfo),
            WizardStep::SocialLinks => Some(WizardStep::ProfileDetails),
            WizardStep::Review => Some(WizardStep::SocialLinks),
        }
    }
}

/// Validates the fields the given step collects. Later steps never relax an
/// earlier step's rules; review re-checks everything before submission.
pub fn validate_step(step: WizardStep, draft: &ProfileDraft) -> Result<(), String> {
    match step {
        WizardStep::BasicInfo => {
            if draft.name.trim().is_empty() {
                return Err("Full name is required.".to_string());
            }
            if !draft.email.contains('@') {
                return Err("Email address looks invalid.".to_string());
            }
            if draft.username.trim().is_empty() {
                return Err("Username is required.".to_string());
            }
            Ok(())
        }
        WizardStep::ProfileDetails => {
            if draft.profession.trim().is_empty() {
                return Err("Profession is required.".to_string());
            }
            Ok(())
        }
        WizardStep::SocialLinks => {
            let website = draft.social_website.trim();
            if !website.is_empty() && !website.starts_with("http") {
                return Err("Website must start with http:// or https://.".to_string());
            }
            Ok(())
        }
        WizardStep::Review => WizardStep::ALL[..3]
            .iter()
            .try_for_each(|step| validate_step(*step, draft)),
    }
}

#[cfg(test)]
mod tests {
    use super::{WizardStep, validate_step};
    use crate::features::profile::types::ProfileDraft;

    fn complete_draft() -> ProfileDraft {
        ProfileDraft {
            name: "Emily Nguyen".to_string(),
            email: "emily.nguyen@example.com".to_string(),
            username: "emily_nguyen".to_string(),
            wallet_address: "0x7c3e".to_string(),
            profession: "Digital artist".to_string(),
            bio: "Exploring light and motion.".to_string(),
            social_twitter: "@emily".to_string(),
            social_discord: String::new(),
            social_website: "https://emily.example".to_string(),
        }
    }

    #[test]
    fn steps_advance_in_order_and_stop_at_the_ends() {
        assert_eq!(WizardStep::BasicInfo.back(), None);
        assert_eq!(
            WizardStep::BasicInfo.next(),
            Some(WizardStep::ProfileDetails)
        );
        assert_eq!(WizardStep::SocialLinks.next(), Some(WizardStep::Review));
        assert_eq!(WizardStep::Review.next(), None);

        let numbers: Vec<usize> = WizardStep::ALL.iter().map(|step| step.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn basic_info_requires_name_email_username() {
        let mut draft = complete_draft();
        draft.name = "  ".to_string();
        assert!(validate_step(WizardStep::BasicInfo, &draft).is_err());

        let mut draft = complete_draft();
        draft.email = "not-an-email".to_string();
        assert!(validate_step(WizardStep::BasicInfo, &draft).is_err());

        assert!(validate_step(WizardStep::BasicInfo, &complete_draft()).is_ok());
    }

    #[test]
    fn social_links_are_optional_but_checked_when_present() {
        let mut draft = complete_draft();
        draft.social_website = String::new();
        assert!(validate_step(WizardStep::SocialLinks, &draft).is_ok());

        draft.social_website = "emily.example".to_string();
        assert!(validate_step(WizardStep::SocialLinks, &draft).is_err());
    }

    #[test]
    fn review_rechecks_every_earlier_step() {
        assert!(validate_step(WizardStep::Review, &complete_draft()).is_ok());

        let mut draft = complete_draft();
        draft.profession = String::new();
        assert_eq!(
            validate_step(WizardStep::Review, &draft),
            Err("Profession is required.".to_string())
        );
    }
}
