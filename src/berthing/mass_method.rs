use crate::Error;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter};
///
/// Method of the added-mass coefficient [Cm] calculation.
///
/// [Cm]: super::mass_coefficient
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, EnumIter, AsRefStr, Display)]
pub enum MassMethod {
    ///
    /// `clamp(1.875 - 0.75 * UKC / draft, 1.5, 1.8)`
    #[strum(serialize = "PIANC")]
    Pianc,
    ///
    /// `1 + PI * draft / (2 * beam * Cb)`
    #[strum(serialize = "Shigeru")]
    Shigeru,
    ///
    /// `1 + 2 * draft / beam`
    ///
    /// Valid for UKC >= 0.1 * draft and berthing velocity >= 0.08 m/s.
    #[default]
    #[strum(serialize = "Vasco Costa")]
    VascoCosta,
}
//
//
impl FromStr for MassMethod {
    type Err = Error;
    ///
    /// Parses the method by its name, case insensitive.
    ///
    /// # Errors
    /// [Error::UnknownMethod] returns for any name but "PIANC", "Shigeru", "Vasco Costa".
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let name = name.trim();
        MassMethod::iter()
            .find(|method| method.as_ref().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                Error::UnknownMethod(format!(
                    "MassMethod.from_str | Software does not currently support '{}' method, expected one of: {}",
                    name,
                    MassMethod::iter()
                        .map(|method| method.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}
