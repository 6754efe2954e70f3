//! Intercepted controller-read variants
//!
//! The controller service exposes its sampling buffer through a family of
//! peek/read calls in positive and negative button logic, with extended
//! forms carrying the analog triggers' native identity and a second
//! field-set form of each. All twelve funnel into the single merge
//! contract; only the button logic changes the math.

/// How a frame encodes pressed buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonLogic {
    /// Set bit = pressed.
    Positive,
    /// Cleared bit = pressed.
    Negative,
}

/// The twelve intercepted controller-read entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallVariant {
    PeekPositive,
    PeekPositive2,
    ReadPositive,
    ReadPositive2,
    PeekNegative,
    PeekNegative2,
    ReadNegative,
    ReadNegative2,
    PeekPositiveExt,
    PeekPositiveExt2,
    ReadPositiveExt,
    ReadPositiveExt2,
}

impl CallVariant {
    pub const ALL: [CallVariant; 12] = [
        CallVariant::PeekPositive,
        CallVariant::PeekPositive2,
        CallVariant::ReadPositive,
        CallVariant::ReadPositive2,
        CallVariant::PeekNegative,
        CallVariant::PeekNegative2,
        CallVariant::ReadNegative,
        CallVariant::ReadNegative2,
        CallVariant::PeekPositiveExt,
        CallVariant::PeekPositiveExt2,
        CallVariant::ReadPositiveExt,
        CallVariant::ReadPositiveExt2,
    ];

    pub fn logic(self) -> ButtonLogic {
        match self {
            CallVariant::PeekNegative
            | CallVariant::PeekNegative2
            | CallVariant::ReadNegative
            | CallVariant::ReadNegative2 => ButtonLogic::Negative,
            _ => ButtonLogic::Positive,
        }
    }

    /// Extended calls carry the native analog-trigger identity. The merge
    /// formula is identical; the flag only selects which native function
    /// produced the frames.
    pub fn is_extended(self) -> bool {
        matches!(
            self,
            CallVariant::PeekPositiveExt
                | CallVariant::PeekPositiveExt2
                | CallVariant::ReadPositiveExt
                | CallVariant::ReadPositiveExt2
        )
    }

    /// Read calls consume the sampling buffer, peek calls do not. The
    /// distinction never reaches the merge.
    pub fn is_consuming(self) -> bool {
        matches!(
            self,
            CallVariant::ReadPositive
                | CallVariant::ReadPositive2
                | CallVariant::ReadNegative
                | CallVariant::ReadNegative2
                | CallVariant::ReadPositiveExt
                | CallVariant::ReadPositiveExt2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_variants_use_negative_logic() {
        for variant in CallVariant::ALL {
            let negative = matches!(
                variant,
                CallVariant::PeekNegative
                    | CallVariant::PeekNegative2
                    | CallVariant::ReadNegative
                    | CallVariant::ReadNegative2
            );
            assert_eq!(variant.logic() == ButtonLogic::Negative, negative);
        }
    }

    #[test]
    fn extended_variants_are_positive_only() {
        for variant in CallVariant::ALL {
            if variant.is_extended() {
                assert_eq!(variant.logic(), ButtonLogic::Positive);
            }
        }
    }

    #[test]
    fn half_of_the_variants_consume() {
        let consuming = CallVariant::ALL.iter().filter(|v| v.is_consuming()).count();
        assert_eq!(consuming, 6);
    }
}
