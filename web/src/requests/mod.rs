pub mod profile_reqs;
