//! Static report templates
//!
//! Section lists are compile-time constants, so every run produces the same
//! report shape for a given category.

use serde::{Deserialize, Serialize};

use crate::DebriefError;

/// Meeting classification bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingCategory {
    /// First meeting between Antler and one or more founders
    Intro,
    /// Later meeting with founders who are already known
    Followup,
    /// Anything else (internal syncs, partner calls, ...)
    General,
}

impl MeetingCategory {
    pub const ALL: [MeetingCategory; 3] = [Self::Intro, Self::Followup, Self::General];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Followup => "followup",
            Self::General => "general",
        }
    }
}

impl std::str::FromStr for MeetingCategory {
    type Err = DebriefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "intro" => Ok(Self::Intro),
            "followup" | "follow-up" => Ok(Self::Followup),
            "general" => Ok(Self::General),
            other => Err(DebriefError::Category(other.to_string())),
        }
    }
}

/// A report section: heading plus the instruction handed to the generator.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub heading: &'static str,
    pub instruction: &'static str,
}

/// Ordered section list for one meeting category.
#[derive(Debug, Clone, Copy)]
pub struct ReportTemplate {
    pub category: MeetingCategory,
    pub sections: &'static [Section],
}

const WHO_WAS_PRESENT: Section = Section {
    heading: "Who was present",
    instruction: "List everyone who attended the meeting, one bullet per person, \
                  with their role or affiliation when the transcript states it.",
};

const ABOUT_ANTLER: Section = Section {
    heading: "About Antler",
    instruction: "Summarize how Antler and its program were presented to the \
                  founders. 2-3 sentences max.",
};

const THE_FOUNDERS: Section = Section {
    heading: "The Founder(s)",
    instruction: "Describe each founder's background, experience, and current \
                  situation. 3-6 one-sentence bullets.",
};

const IDEA_PRODUCT_BUSINESS: Section = Section {
    heading: "Idea/Product/Business",
    instruction: "Describe the idea, product, or business the founders presented, \
                  including the problem and target market. 3-6 one-sentence bullets.",
};

const STATE_OF_THINGS: Section = Section {
    heading: "State of things / Traction",
    instruction: "Capture where the company stands: funding raised, revenue, \
                  users, team size, and other concrete progress. Keep every \
                  figure mentioned in the transcript. 3-6 one-sentence bullets.",
};

const BACKGROUND: Section = Section {
    heading: "Background",
    instruction: "Recap the relationship so far and what was agreed in earlier \
                  meetings, as referenced in this one. 2-3 sentences max.",
};

const DISCUSSION_POINTS: Section = Section {
    heading: "Discussion Points",
    instruction: "Summarize the main topics discussed. 3-6 one-sentence bullets.",
};

const NEXT_STEPS: Section = Section {
    heading: "Next Steps",
    instruction: "List the agreed follow-ups and commitments, with owners and \
                  deadlines when mentioned. One bullet per item.",
};

static INTRO_TEMPLATE: ReportTemplate = ReportTemplate {
    category: MeetingCategory::Intro,
    sections: &[
        WHO_WAS_PRESENT,
        ABOUT_ANTLER,
        THE_FOUNDERS,
        IDEA_PRODUCT_BUSINESS,
        STATE_OF_THINGS,
        NEXT_STEPS,
    ],
};

static FOLLOWUP_TEMPLATE: ReportTemplate = ReportTemplate {
    category: MeetingCategory::Followup,
    sections: &[WHO_WAS_PRESENT, BACKGROUND, DISCUSSION_POINTS, NEXT_STEPS],
};

static GENERAL_TEMPLATE: ReportTemplate = ReportTemplate {
    category: MeetingCategory::General,
    sections: &[WHO_WAS_PRESENT, DISCUSSION_POINTS, NEXT_STEPS],
};

/// Get the report template for a meeting category.
pub fn template_for(category: MeetingCategory) -> &'static ReportTemplate {
    match category {
        MeetingCategory::Intro => &INTRO_TEMPLATE,
        MeetingCategory::Followup => &FOLLOWUP_TEMPLATE,
        MeetingCategory::General => &GENERAL_TEMPLATE,
    }
}
