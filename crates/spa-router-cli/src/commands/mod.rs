pub mod href;
pub mod resolve;
pub mod routes;
pub mod serve;
