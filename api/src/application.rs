pub mod household_middleware;
pub mod http;
