//! Profile analysis — pluggable, trait-based scorer for LinkedIn profiles.
//!
//! Default: `FixedProfileAnalyzer`, which ignores the profile content and
//! returns the same score and three-section advice every time.
//!
//! `AppState` holds an `Arc<dyn ProfileAnalyzer>`.

use async_trait::async_trait;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::linkedin::{Impact, LinkedInProfileData, Recommendation};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileAnalysis {
    /// Profile score, 0 – 100.
    pub score: u8,
    pub recommendations: Vec<Recommendation>,
}

/// Implement this to swap in a real scoring collaborator without touching handlers.
#[async_trait]
pub trait ProfileAnalyzer: Send + Sync {
    async fn analyze(&self, profile: &LinkedInProfileData) -> Result<ProfileAnalysis, AppError>;
}

pub const FIXED_SCORE: u8 = 85;

const FIXED_ADVICE: &[(&str, Impact, [&str; 3])] = &[
    (
        "Headline",
        Impact::High,
        [
            "Add industry-specific keywords",
            "Highlight your unique value proposition",
            "Include your most impressive achievement",
        ],
    ),
    (
        "Summary",
        Impact::High,
        [
            "Start with a compelling hook",
            "Include quantifiable achievements",
            "Add relevant industry keywords",
        ],
    ),
    (
        "Experience",
        Impact::Medium,
        [
            "Use action verbs to start bullet points",
            "Include metrics and results",
            "Highlight leadership and collaboration",
        ],
    ),
];

/// Static tips shown beside the profile form.
pub const PRO_TIPS: &[&str] = &[
    "Use industry-specific keywords to improve visibility",
    "Quantify achievements with metrics when possible",
    "Keep your profile regularly updated with recent accomplishments",
    "Engage with your network to increase profile visibility",
];

pub struct FixedProfileAnalyzer;

#[async_trait]
impl ProfileAnalyzer for FixedProfileAnalyzer {
    async fn analyze(&self, _profile: &LinkedInProfileData) -> Result<ProfileAnalysis, AppError> {
        Ok(ProfileAnalysis {
            score: FIXED_SCORE,
            recommendations: FIXED_ADVICE
                .iter()
                .map(|(section, impact, suggestions)| Recommendation {
                    section: section.to_string(),
                    suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
                    impact: *impact,
                })
                .collect(),
        })
    }
}
