use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Relationship kinds accepted by `getRelatedConcepts`.
///
/// ```
/// use clinical_definitions::Relationship;
///
/// assert_eq!(Relationship::Children.to_string(), "children");
/// assert_eq!("synonym".parse::<Relationship>().unwrap(), Relationship::Synonym);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Relationship {
    Children,
    Parents,
    Siblings,
    Ancestors,
    Descendants,
    Broader,
    Narrower,
    Synonym,
    Related,
    Other,
}

impl Relationship {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
