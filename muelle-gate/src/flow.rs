//! Check-in wizard flow
//!
//! The multi-step variant of the check-in screen keeps its progress in an
//! explicit state object the caller owns and passes between steps, instead
//! of mutable globals. Forward-only with an explicit `back`; the engine
//! never sees this type.

use shared::{AppError, AppResult};

/// Wizard position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Choosing one of today's orders
    SelectOrder,
    /// Reviewing supplier and package details
    ConfirmDetails,
    /// Picking the time(s) to register
    PickTime,
    /// Registration saved
    Saved,
}

/// Explicit check-in wizard state
#[derive(Debug, Clone)]
pub struct CheckInWizard {
    step: WizardStep,
    order_id: Option<String>,
}

impl CheckInWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::SelectOrder,
            order_id: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// The order being checked in, once one is selected
    pub fn order_id(&self) -> Option<&str> {
        self.order_id.as_deref()
    }

    /// SelectOrder → ConfirmDetails
    pub fn select_order(&mut self, order_id: impl Into<String>) -> AppResult<()> {
        if self.step != WizardStep::SelectOrder {
            return Err(AppError::validation("An order is already selected"));
        }
        self.order_id = Some(order_id.into());
        self.step = WizardStep::ConfirmDetails;
        Ok(())
    }

    /// ConfirmDetails → PickTime
    pub fn confirm(&mut self) -> AppResult<()> {
        if self.step != WizardStep::ConfirmDetails {
            return Err(AppError::validation("Nothing to confirm at this step"));
        }
        self.step = WizardStep::PickTime;
        Ok(())
    }

    /// PickTime → Saved; call after the service accepted the registration
    pub fn mark_saved(&mut self) -> AppResult<()> {
        if self.step != WizardStep::PickTime {
            return Err(AppError::validation("No pending registration to save"));
        }
        self.step = WizardStep::Saved;
        Ok(())
    }

    /// One step back; no-op on the first step, Saved is terminal
    pub fn back(&mut self) {
        self.step = match self.step {
            WizardStep::ConfirmDetails => {
                self.order_id = None;
                WizardStep::SelectOrder
            }
            WizardStep::PickTime => WizardStep::ConfirmDetails,
            WizardStep::SelectOrder | WizardStep::Saved => return,
        };
    }

    /// Back to order selection for the next truck
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for CheckInWizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_path() {
        let mut wizard = CheckInWizard::new();
        assert_eq!(wizard.step(), WizardStep::SelectOrder);
        assert_eq!(wizard.order_id(), None);

        wizard.select_order("PO100").unwrap();
        assert_eq!(wizard.step(), WizardStep::ConfirmDetails);
        assert_eq!(wizard.order_id(), Some("PO100"));

        wizard.confirm().unwrap();
        assert_eq!(wizard.step(), WizardStep::PickTime);

        wizard.mark_saved().unwrap();
        assert_eq!(wizard.step(), WizardStep::Saved);
    }

    #[test]
    fn test_out_of_order_transitions_rejected() {
        let mut wizard = CheckInWizard::new();
        assert!(wizard.confirm().is_err());
        assert!(wizard.mark_saved().is_err());

        wizard.select_order("PO100").unwrap();
        assert!(wizard.select_order("PO200").is_err());
        assert_eq!(wizard.order_id(), Some("PO100"));
    }

    #[test]
    fn test_back_clears_selection_on_first_step() {
        let mut wizard = CheckInWizard::new();
        wizard.select_order("PO100").unwrap();
        wizard.confirm().unwrap();

        wizard.back();
        assert_eq!(wizard.step(), WizardStep::ConfirmDetails);
        assert_eq!(wizard.order_id(), Some("PO100"));

        wizard.back();
        assert_eq!(wizard.step(), WizardStep::SelectOrder);
        assert_eq!(wizard.order_id(), None);

        // Already at the first step
        wizard.back();
        assert_eq!(wizard.step(), WizardStep::SelectOrder);
    }

    #[test]
    fn test_saved_is_terminal_until_reset() {
        let mut wizard = CheckInWizard::new();
        wizard.select_order("PO100").unwrap();
        wizard.confirm().unwrap();
        wizard.mark_saved().unwrap();

        wizard.back();
        assert_eq!(wizard.step(), WizardStep::Saved);

        wizard.reset();
        assert_eq!(wizard.step(), WizardStep::SelectOrder);
        assert_eq!(wizard.order_id(), None);
    }
}
