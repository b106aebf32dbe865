pub mod classify;
pub mod session;
pub mod uploader;
pub mod validator;

#[cfg(test)]
pub mod testserver;
