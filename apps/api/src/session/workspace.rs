use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::forms::cover_letter::can_remove_key_points;
use crate::generation::analyzer::PRO_TIPS;
use crate::generation::simulated::BusyFlag;
use crate::letter::letter_paragraphs;
use crate::models::cover_letter::CoverLetterData;
use crate::models::linkedin::LinkedInProfileData;
use crate::models::resume::ResumeData;

// ────────────────────────────────────────────────────────────────────────────
// Navigation
// ────────────────────────────────────────────────────────────────────────────

/// The three panels a workspace can show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    #[default]
    Resume,
    CoverLetter,
    Linkedin,
}

/// Anything the sidebar lets the user click. Settings is listed but leads nowhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavTarget {
    Resume,
    CoverLetter,
    Linkedin,
    Settings,
}

impl NavTarget {
    pub fn tab(&self) -> Option<Tab> {
        match self {
            NavTarget::Resume => Some(Tab::Resume),
            NavTarget::CoverLetter => Some(Tab::CoverLetter),
            NavTarget::Linkedin => Some(Tab::Linkedin),
            NavTarget::Settings => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuItem {
    pub id: NavTarget,
    pub label: &'static str,
}

pub const MENU: &[MenuItem] = &[
    MenuItem {
        id: NavTarget::Resume,
        label: "Resume Builder",
    },
    MenuItem {
        id: NavTarget::CoverLetter,
        label: "Cover Letter",
    },
    MenuItem {
        id: NavTarget::Linkedin,
        label: "LinkedIn Profile",
    },
    MenuItem {
        id: NavTarget::Settings,
        label: "Settings",
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Panels
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct ResumePanel {
    pub data: ResumeData,
    pub show_preview: bool,
    pub generating: BusyFlag,
}

#[derive(Debug, Clone, Default)]
pub struct CoverLetterPanel {
    pub data: CoverLetterData,
    pub generated_letter: Option<String>,
    pub show_preview: bool,
    pub generating: BusyFlag,
}

impl CoverLetterPanel {
    /// The letter is shown only once one exists and preview is switched on.
    pub fn letter_visible(&self) -> bool {
        self.show_preview && self.generated_letter.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct LinkedInPanel {
    pub data: LinkedInProfileData,
    pub score: Option<u8>,
    pub analyzing: BusyFlag,
}

#[derive(Debug, Clone)]
pub struct Workspace {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub active_tab: Tab,
    pub resume: ResumePanel,
    pub cover_letter: CoverLetterPanel,
    pub linkedin: LinkedInPanel,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            active_tab: Tab::default(),
            resume: ResumePanel::default(),
            cover_letter: CoverLetterPanel::default(),
            linkedin: LinkedInPanel::default(),
        }
    }

    /// Switches panels. Targets without a panel leave the active tab alone.
    ///
    /// Leaving a panel discards it: the form, preview, result and busy flag
    /// of the tab being left go back to their initial values. Re-selecting
    /// the active tab keeps everything.
    pub fn navigate(&mut self, target: NavTarget) -> Tab {
        let Some(tab) = target.tab() else {
            return self.active_tab;
        };
        if tab != self.active_tab {
            self.reset_panel(self.active_tab);
            self.active_tab = tab;
        }
        self.active_tab
    }

    fn reset_panel(&mut self, tab: Tab) {
        match tab {
            Tab::Resume => self.resume = ResumePanel::default(),
            Tab::CoverLetter => self.cover_letter = CoverLetterPanel::default(),
            Tab::Linkedin => self.linkedin = LinkedInPanel::default(),
        }
    }

    pub fn view(&self) -> WorkspaceView {
        WorkspaceView {
            id: self.id,
            created_at: self.created_at,
            active_tab: self.active_tab,
            resume: self.resume.view(),
            cover_letter: self.cover_letter.view(),
            linkedin: self.linkedin.view(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Views (what the API returns)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ResumePanelView {
    pub data: ResumeData,
    pub show_preview: bool,
    pub generating: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoverLetterPanelView {
    pub data: CoverLetterData,
    pub can_remove_key_points: bool,
    pub generated_letter: Option<String>,
    pub show_preview: bool,
    pub letter_visible: bool,
    /// Preview paragraphs, present only while the letter is visible.
    pub paragraphs: Option<Vec<String>>,
    pub generating: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkedInPanelView {
    pub data: LinkedInProfileData,
    pub score: Option<u8>,
    pub analyzing: bool,
    pub pro_tips: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceView {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub active_tab: Tab,
    pub resume: ResumePanelView,
    pub cover_letter: CoverLetterPanelView,
    pub linkedin: LinkedInPanelView,
}

impl ResumePanel {
    pub fn view(&self) -> ResumePanelView {
        ResumePanelView {
            data: self.data.clone(),
            show_preview: self.show_preview,
            generating: self.generating.is_busy(),
        }
    }
}

impl CoverLetterPanel {
    pub fn view(&self) -> CoverLetterPanelView {
        let letter_visible = self.letter_visible();
        CoverLetterPanelView {
            data: self.data.clone(),
            can_remove_key_points: can_remove_key_points(&self.data),
            generated_letter: self.generated_letter.clone(),
            show_preview: self.show_preview,
            letter_visible,
            paragraphs: self
                .generated_letter
                .as_deref()
                .filter(|_| letter_visible)
                .map(letter_paragraphs),
            generating: self.generating.is_busy(),
        }
    }
}

impl LinkedInPanel {
    pub fn view(&self) -> LinkedInPanelView {
        LinkedInPanelView {
            data: self.data.clone(),
            score: self.score,
            analyzing: self.analyzing.is_busy(),
            pro_tips: PRO_TIPS,
        }
    }
}
