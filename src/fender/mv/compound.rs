use crate::Error;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter};
///
/// Rubber compound of the MV fender, ordered from the softer to the harder one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter, AsRefStr, Display)]
pub enum Compound {
    A,
    B,
}
//
//
impl FromStr for Compound {
    type Err = Error;
    //
    //
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let name = name.trim();
        Compound::iter()
            .find(|compound| compound.as_ref().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                Error::CatalogLookup(format!("Compound.from_str | Unknown compound '{}'", name))
            })
    }
}
