use std::fmt;

use crate::domain::{JOB_SEEKER, PARTNERSHIP_ENQUIRY};

/// Which redirect message, if any, replaces the submit path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JourneyBranch {
    #[default]
    None,
    JobSeeker,
    Partnership,
}

impl JourneyBranch {
    pub fn is_redirected(self) -> bool {
        self != JourneyBranch::None
    }
}

impl fmt::Display for JourneyBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JourneyBranch::None => write!(f, "none"),
            JourneyBranch::JobSeeker => write!(f, "job-seeker"),
            JourneyBranch::Partnership => write!(f, "partnership"),
        }
    }
}

/// Maps the service selection to a journey branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyPolicy {
    pub job_seeker_value: String,
    pub partnership_value: String,
}

impl Default for JourneyPolicy {
    fn default() -> Self {
        Self::new(JOB_SEEKER, PARTNERSHIP_ENQUIRY)
    }
}

impl JourneyPolicy {
    pub fn new(job_seeker_value: impl Into<String>, partnership_value: impl Into<String>) -> Self {
        Self {
            job_seeker_value: job_seeker_value.into(),
            partnership_value: partnership_value.into(),
        }
    }

    pub fn branch_for(&self, service: &str) -> JourneyBranch {
        if service == self.job_seeker_value {
            JourneyBranch::JobSeeker
        } else if service == self.partnership_value {
            JourneyBranch::Partnership
        } else {
            JourneyBranch::None
        }
    }

    /// Service values that lead away from the chat and so accept personal
    /// email addresses.
    pub fn redirect_values(&self) -> Vec<String> {
        vec![self.job_seeker_value.clone(), self.partnership_value.clone()]
    }
}
