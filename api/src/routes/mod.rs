pub mod home_route;
pub mod search;
