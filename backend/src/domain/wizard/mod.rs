//! Wizard module - The fixed step sequence the decision shell walks through.

mod step;

pub use step::WizardStep;
