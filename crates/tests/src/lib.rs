#[cfg(test)]
mod common;

#[cfg(test)]
mod request_tests;


#[cfg(test)]
mod stale_response_tests;

#[cfg(test)]
mod dynamic_label_tests;
