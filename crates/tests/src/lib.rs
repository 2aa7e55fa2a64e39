#[cfg(test)]
mod common;

#[cfg(test)]
mod session_middleware_tests;

#[cfg(test)]
mod resolve_session_tests;

#[cfg(test)]
mod health_tests;

#[cfg(test)]
mod error_response_tests;
