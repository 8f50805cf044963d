pub mod admin;
pub mod blogs;
pub mod home;
pub mod login;
pub mod profile;
pub mod programs;
pub mod public_profile;
pub mod signup;
pub mod team;
pub mod unauthorized;
pub mod welcome;
