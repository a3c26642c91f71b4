//! Field tables and flat field records for AIDA, PAS and the shared metadata

use serde::Deserialize;
use thiserror::Error;

/// Errors from keyed field updates
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("unknown field '{key}' (valid fields: {valid})")]
    UnknownField { key: String, valid: String },
}

impl FieldError {
    fn unknown(key: &str, specs: &[FieldSpec]) -> Self {
        Self::UnknownField {
            key: key.to_string(),
            valid: specs.iter().map(|s| s.key).collect::<Vec<_>>().join(", "),
        }
    }
}

/// Static description of one framework field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Identifier used in briefs and keyed updates
    pub key: &'static str,
    /// Form label
    pub label: &'static str,
    /// Section heading in structured output
    pub heading: &'static str,
    /// Role prefix for bullet output, if the framework labels its bullets
    pub bullet_prefix: Option<&'static str>,
    /// Guidance shown next to the input
    pub help: &'static str,
}

pub static AIDA_FIELDS: [FieldSpec; 4] = [
    FieldSpec {
        key: "attention",
        label: "Attention",
        heading: "Attention",
        bullet_prefix: None,
        help: "Write a bold opening statement or hook that grabs your reader's attention. \
               Lead with a surprising fact, a provocative question, or a relatable pain point.",
    },
    FieldSpec {
        key: "interest",
        label: "Interest",
        heading: "Interest",
        bullet_prefix: None,
        help: "Explain what makes your product interesting. What does it do? What problem does \
               it solve? Give enough detail that the reader wants to learn more.",
    },
    FieldSpec {
        key: "desire",
        label: "Desire",
        heading: "Desire",
        bullet_prefix: None,
        help: "Make them want it. Describe the benefits, outcomes, and transformation. Focus on \
               how their life or business improves, not just what the product does.",
    },
    FieldSpec {
        key: "action",
        label: "Action",
        heading: "Action",
        bullet_prefix: None,
        help: "Tell them exactly what to do next. Be specific and remove friction: mention if \
               it's free, no credit card, takes 30 seconds, etc.",
    },
];

pub static PAS_FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        key: "problem",
        label: "Problem",
        heading: "The Problem",
        bullet_prefix: Some("Problem"),
        help: "Describe the problem your customer faces. Be specific and relatable. Use \
               language they would actually use when describing this frustration.",
    },
    FieldSpec {
        key: "agitate",
        label: "Agitate",
        heading: "Why It Matters",
        bullet_prefix: Some("Why it matters"),
        help: "Make the problem feel more urgent. What happens if they don't solve it? What's \
               the cost of inaction: lost revenue, wasted time, frustrated customers?",
    },
    FieldSpec {
        key: "solution",
        label: "Solution",
        heading: "The Solution",
        bullet_prefix: Some("Solution"),
        help: "Introduce your product as the answer. Show how it directly addresses the \
               problem you just described. Be specific about the outcome.",
    },
];

/// Fields of a single FAB item
pub static FAB_FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        key: "feature",
        label: "Feature",
        heading: "Feature",
        bullet_prefix: None,
        help: "List a specific feature of your product. Be concrete and factual.",
    },
    FieldSpec {
        key: "advantage",
        label: "Advantage",
        heading: "Advantage",
        bullet_prefix: None,
        help: "What does this feature enable? How is it better than the alternative?",
    },
    FieldSpec {
        key: "benefit",
        label: "Benefit",
        heading: "Benefit",
        bullet_prefix: None,
        help: "Why does the customer care? How does this improve their life or work?",
    },
];

/// Attention, Interest, Desire, Action
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AidaFields {
    pub attention: String,
    pub interest: String,
    pub desire: String,
    pub action: String,
}

impl AidaFields {
    /// Field values paired with their specs, in canonical order
    pub fn entries(&self) -> [(&'static FieldSpec, &str); 4] {
        [
            (&AIDA_FIELDS[0], self.attention.as_str()),
            (&AIDA_FIELDS[1], self.interest.as_str()),
            (&AIDA_FIELDS[2], self.desire.as_str()),
            (&AIDA_FIELDS[3], self.action.as_str()),
        ]
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), FieldError> {
        let slot = match key {
            "attention" => &mut self.attention,
            "interest" => &mut self.interest,
            "desire" => &mut self.desire,
            "action" => &mut self.action,
            _ => return Err(FieldError::unknown(key, &AIDA_FIELDS)),
        };
        *slot = value.into();
        Ok(())
    }
}

/// Problem, Agitate, Solution
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PasFields {
    pub problem: String,
    pub agitate: String,
    pub solution: String,
}

impl PasFields {
    /// Field values paired with their specs, in canonical order
    pub fn entries(&self) -> [(&'static FieldSpec, &str); 3] {
        [
            (&PAS_FIELDS[0], self.problem.as_str()),
            (&PAS_FIELDS[1], self.agitate.as_str()),
            (&PAS_FIELDS[2], self.solution.as_str()),
        ]
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), FieldError> {
        let slot = match key {
            "problem" => &mut self.problem,
            "agitate" => &mut self.agitate,
            "solution" => &mut self.solution,
            _ => return Err(FieldError::unknown(key, &PAS_FIELDS)),
        };
        *slot = value.into();
        Ok(())
    }
}

/// Metadata shared by every framework
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommonFields {
    pub product_name: String,
    pub target_audience: String,
    pub price_cta: String,
}

impl CommonFields {
    pub fn new(
        product_name: impl Into<String>,
        target_audience: impl Into<String>,
        price_cta: impl Into<String>,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            target_audience: target_audience.into(),
            price_cta: price_cta.into(),
        }
    }
}
