//! Profile feature: the multi-step creation wizard and the registration
//! call that submits the finished draft.

pub(crate) mod client;
pub(crate) mod types;
pub(crate) mod wizard;
