use crate::Error;
use strum_macros::{Display, EnumIter};
///
/// Initial inflation pressure of the pneumatic fender.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter, Display)]
pub enum PressureRating {
    #[strum(serialize = "50kPa")]
    Kpa50,
    #[strum(serialize = "80kPa")]
    Kpa80,
}
//
//
impl PressureRating {
    ///
    /// Returns the pressure in kPa.
    pub fn kpa(&self) -> u32 {
        match self {
            PressureRating::Kpa50 => 50,
            PressureRating::Kpa80 => 80,
        }
    }
}
//
//
impl TryFrom<u32> for PressureRating {
    type Error = Error;
    //
    //
    fn try_from(kpa: u32) -> Result<Self, Self::Error> {
        match kpa {
            50 => Ok(PressureRating::Kpa50),
            80 => Ok(PressureRating::Kpa80),
            _ => Err(Error::CatalogLookup(format!(
                "PressureRating.try_from | Unknown pressure rating {}kPa, expected 50 or 80",
                kpa
            ))),
        }
    }
}
