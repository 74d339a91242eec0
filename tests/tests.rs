
mod service;
mod session;
