pub(crate) mod context;
pub(crate) mod gen_components;
pub(crate) mod profile;
pub(crate) mod routes;
