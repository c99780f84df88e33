#[cfg(test)]
mod common;

#[cfg(test)]
mod patient_dashboard_tests;


#[cfg(test)]
mod admin_dashboard_tests;

#[cfg(test)]
mod fetch_error_tests;
