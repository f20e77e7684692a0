#[cfg(test)]
mod common;

#[cfg(test)]
mod login_flow_tests;

#[cfg(test)]
mod guard_tests;

#[cfg(test)]
mod logout_tests;

#[cfg(test)]
mod file_store_tests;

#[cfg(test)]
mod config_tests;
