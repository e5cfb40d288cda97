// Use cases layer: application workflows for the app server.

pub mod create_session;
pub mod get_profile;
pub mod revoke_session;
pub mod update_profile;

pub(crate) mod validate;

#[cfg(test)]
pub(crate) mod test_support;
