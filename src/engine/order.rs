use std::fmt;
use std::str::FromStr;

/// The closed set of topological word-order labels used by the test suite.
///
/// Fields: VF (fronted field), LK (left bracket), MF (middle field), VC (verb cluster).
/// Slots: V verb, S subject, O object, ADV adverbial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordOrder {
    SubjectFronted,
    ObjectFronted,
    AdverbialSubjectObject,
    AdverbialObjectSubject,
    VerbInitialSubjectObject,
    VerbInitialObjectSubject,
    VerbFinalSubjectObject,
    VerbFinalObjectSubject,
}

/// How a label places the finite verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Subject in VF, verb right after it.
    AfterSubject,
    /// Object in VF, verb right after it.
    AfterObject,
    /// Adverbial in VF, verb second.
    Second,
    /// Nothing fronted, verb first.
    First,
    /// Verb in the clause-final cluster.
    Final,
}

impl WordOrder {
    pub const ALL: [WordOrder; 8] = [
        WordOrder::SubjectFronted,
        WordOrder::ObjectFronted,
        WordOrder::AdverbialSubjectObject,
        WordOrder::AdverbialObjectSubject,
        WordOrder::VerbInitialSubjectObject,
        WordOrder::VerbInitialObjectSubject,
        WordOrder::VerbFinalSubjectObject,
        WordOrder::VerbFinalObjectSubject,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WordOrder::SubjectFronted => "VF[S]LK[V]MF[O]",
            WordOrder::ObjectFronted => "VF[O]LK[V]MF[S]",
            WordOrder::AdverbialSubjectObject => "VF[ADV]LK[V]MF[SO]",
            WordOrder::AdverbialObjectSubject => "VF[ADV]LK[V]MF[OS]",
            WordOrder::VerbInitialSubjectObject => "LK[V]MF[SO]",
            WordOrder::VerbInitialObjectSubject => "LK[V]MF[OS]",
            WordOrder::VerbFinalSubjectObject => "MF[SO]VC[V]",
            WordOrder::VerbFinalObjectSubject => "MF[OS]VC[V]",
        }
    }

    pub fn placement(self) -> Placement {
        match self {
            WordOrder::SubjectFronted => Placement::AfterSubject,
            WordOrder::ObjectFronted => Placement::AfterObject,
            WordOrder::AdverbialSubjectObject | WordOrder::AdverbialObjectSubject => {
                Placement::Second
            }
            WordOrder::VerbInitialSubjectObject | WordOrder::VerbInitialObjectSubject => {
                Placement::First
            }
            WordOrder::VerbFinalSubjectObject | WordOrder::VerbFinalObjectSubject => {
                Placement::Final
            }
        }
    }

    pub fn is_verb_cluster(self) -> bool {
        self.placement() == Placement::Final
    }
}

impl fmt::Display for WordOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for a label outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWordOrder(pub String);

impl FromStr for WordOrder {
    type Err = UnknownWordOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        WordOrder::ALL
            .into_iter()
            .find(|order| order.label() == s)
            .ok_or_else(|| UnknownWordOrder(s.to_string()))
    }
}
