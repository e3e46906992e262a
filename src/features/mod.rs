pub(crate) mod auth;
pub(crate) mod marketplace;
pub(crate) mod profile;
pub(crate) mod wallet;
