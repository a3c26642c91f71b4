//! Copywriting frameworks and the field sets they define
//!
//! Each framework is a fixed, ordered set of content fields. AIDA and PAS are
//! flat records described by a static field table; FAB is a list of
//! feature/advantage/benefit items. Product name, audience and call-to-action
//! are shared by all three and live in [`CommonFields`].

mod fab;
mod fields;

pub use fab::{FabError, FabField, FabFields, FabItem};
pub use fields::{
    AidaFields, CommonFields, FieldError, FieldSpec, PasFields, AIDA_FIELDS, FAB_FIELDS,
    PAS_FIELDS,
};

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ParseKindError;

/// The copywriting framework driving field selection and generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkKind {
    /// Attention, Interest, Desire, Action
    #[default]
    Aida,
    /// Problem, Agitate, Solution
    Pas,
    /// Features, Advantages, Benefits
    Fab,
}

impl FrameworkKind {
    /// All frameworks in selector order
    pub const ALL: [FrameworkKind; 3] = [
        FrameworkKind::Aida,
        FrameworkKind::Pas,
        FrameworkKind::Fab,
    ];

    /// Short display name, e.g. "AIDA"
    pub fn name(self) -> &'static str {
        match self {
            FrameworkKind::Aida => "AIDA",
            FrameworkKind::Pas => "PAS",
            FrameworkKind::Fab => "FAB",
        }
    }

    /// Lowercase identifier used in briefs and on the command line
    pub fn key(self) -> &'static str {
        match self {
            FrameworkKind::Aida => "aida",
            FrameworkKind::Pas => "pas",
            FrameworkKind::Fab => "fab",
        }
    }

    pub fn expansion(self) -> &'static str {
        match self {
            FrameworkKind::Aida => "Attention, Interest, Desire, Action",
            FrameworkKind::Pas => "Problem, Agitate, Solution",
            FrameworkKind::Fab => "Features, Advantages, Benefits",
        }
    }

    pub fn best_for(self) -> &'static str {
        match self {
            FrameworkKind::Aida => "Landing pages, ads, sales pages",
            FrameworkKind::Pas => "Email marketing, blog intros, social ads",
            FrameworkKind::Fab => "Product pages, comparison pages, specs",
        }
    }

    /// One-paragraph explanation of how the framework works
    pub fn explainer(self) -> &'static str {
        match self {
            FrameworkKind::Aida => {
                "AIDA walks your reader through a journey: grab their attention, build interest \
                 in your product, create desire for the outcome, then tell them what to do next. \
                 It's the classic copywriting formula used in ads and landing pages."
            }
            FrameworkKind::Pas => {
                "PAS connects with your reader emotionally: name the problem they're \
                 experiencing, make it feel urgent by showing what happens if they don't act, \
                 then present your product as the solution. Great for email and social media copy."
            }
            FrameworkKind::Fab => {
                "FAB translates technical features into customer value: list what your product \
                 has (features), explain what each feature enables (advantages), and describe why \
                 the customer should care (benefits). Perfect for product pages and comparisons."
            }
        }
    }

    /// Field table in canonical order. For FAB this describes one item.
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            FrameworkKind::Aida => &AIDA_FIELDS,
            FrameworkKind::Pas => &PAS_FIELDS,
            FrameworkKind::Fab => &FAB_FIELDS,
        }
    }
}

impl fmt::Display for FrameworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FrameworkKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aida" => Ok(FrameworkKind::Aida),
            "pas" => Ok(FrameworkKind::Pas),
            "fab" => Ok(FrameworkKind::Fab),
            _ => Err(ParseKindError::new("framework", s, &["aida", "pas", "fab"])),
        }
    }
}

/// A framework's field values, tagged by framework
///
/// Pairing the kind with its field set in one enum means a generator call
/// can never receive PAS fields while told to produce AIDA.
#[derive(Debug, Clone, Copy)]
pub enum FrameworkFields<'a> {
    Aida(&'a AidaFields),
    Pas(&'a PasFields),
    Fab(&'a FabFields),
}

impl FrameworkFields<'_> {
    pub fn kind(&self) -> FrameworkKind {
        match self {
            FrameworkFields::Aida(_) => FrameworkKind::Aida,
            FrameworkFields::Pas(_) => FrameworkKind::Pas,
            FrameworkFields::Fab(_) => FrameworkKind::Fab,
        }
    }
}
