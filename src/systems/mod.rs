//! Systems: the per-tick algorithms that run over the grid.

pub mod stamper;
pub mod steppers;

pub use steppers::{
    BuilderRules, FlowDirection, GravityStepper, LifeStepper, StepContext, StepKind, StepReport,
    Stepper, StepperRegistry,
};
