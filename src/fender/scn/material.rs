use crate::Error;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter};
///
/// Rubber material of the SCN fender,
/// selects the column of the temperature and velocity factor tables.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, EnumIter, AsRefStr, Display)]
pub enum Material {
    #[default]
    Blend,
    Rubber,
    Synthetic,
}
//
//
impl Material {
    ///
    /// Index of the value column in the correction factor tables.
    pub(crate) fn column(&self) -> usize {
        match self {
            Material::Blend => 0,
            Material::Rubber => 1,
            Material::Synthetic => 2,
        }
    }
}
//
//
impl FromStr for Material {
    type Err = Error;
    //
    //
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let name = name.trim();
        Material::iter()
            .find(|material| material.as_ref().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                Error::Validation(format!("Material.from_str | Unknown material '{}'", name))
            })
    }
}
