use std::{borrow::Cow, fmt::Debug};

use dyn_clone::{clone_trait_object, DynClone};

use crate::{Match, SimplifyError};

/// Receives match and provides replacement
///
/// Returning an error aborts the whole [`Simplifier::simplify`] call, no partially rewritten
/// text is produced
///
/// [`Simplifier::simplify`]: crate::Simplifier::simplify
pub trait Tag: DynClone + Debug + Send + Sync {
    /// Select suitable replacement
    fn generate<'tag, 'inp: 'tag>(
        &'tag self,
        m: &Match<'inp>,
    ) -> Result<Cow<'tag, str>, SimplifyError>;
}

clone_trait_object!(Tag);
