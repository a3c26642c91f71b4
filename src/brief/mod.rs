//! Briefs: the complete input to one copy-generation run
//!
//! A brief captures everything the editor holds: the selected framework and
//! output style, the shared metadata, and the fields of all three frameworks.
//! Fields of the inactive frameworks are kept so switching back and forth
//! loses nothing. Briefs are written as TOML:
//!
//! ```toml
//! framework = "pas"
//! style = "bullet"
//!
//! [common]
//! product_name = "SyncStock"
//! price_cta = "Connect your stores in 5 minutes"
//!
//! [pas]
//! problem = "Inventory across channels is a nightmare."
//! solution = "SyncStock updates stock everywhere in real time."
//! ```

mod examples;

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::BriefError;
use crate::framework::{
    AidaFields, CommonFields, FabFields, FrameworkFields, FrameworkKind, PasFields,
};
use crate::generator::{generate, OutputStyle};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Brief {
    pub framework: FrameworkKind,
    pub style: OutputStyle,
    pub common: CommonFields,
    pub aida: AidaFields,
    pub pas: PasFields,
    pub fab: FabFields,
}

impl Brief {
    /// Load a brief from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, BriefError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// The built-in example for `kind`, with that framework selected
    pub fn example(kind: FrameworkKind) -> Self {
        let mut brief = Self::default();
        brief.load_example(kind);
        brief
    }

    /// Replace the shared metadata and the fields of `kind` with the built-in
    /// example and select `kind`. Other frameworks' fields are left alone.
    pub fn load_example(&mut self, kind: FrameworkKind) {
        let example: Brief = examples::source(kind)
            .parse()
            .expect("built-in example should be a valid brief");

        self.framework = kind;
        self.common = example.common;
        match kind {
            FrameworkKind::Aida => self.aida = example.aida,
            FrameworkKind::Pas => self.pas = example.pas,
            FrameworkKind::Fab => self.fab = example.fab,
        }
    }

    pub fn with_framework(mut self, framework: FrameworkKind) -> Self {
        self.framework = framework;
        self
    }

    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }

    /// Field values of the selected framework
    pub fn fields(&self) -> FrameworkFields<'_> {
        self.fields_for(self.framework)
    }

    /// Field values of `kind`, whichever framework is selected
    pub fn fields_for(&self, kind: FrameworkKind) -> FrameworkFields<'_> {
        match kind {
            FrameworkKind::Aida => FrameworkFields::Aida(&self.aida),
            FrameworkKind::Pas => FrameworkFields::Pas(&self.pas),
            FrameworkKind::Fab => FrameworkFields::Fab(&self.fab),
        }
    }

    /// Generate the markup document for the selected framework and style
    pub fn generate(&self) -> String {
        generate(self.fields(), &self.common, self.style)
    }
}

impl FromStr for Brief {
    type Err = BriefError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(content)?)
    }
}
